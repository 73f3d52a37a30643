// Copyright (c) Perdiem contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rusqlite::{params, Connection, OptionalExtension};
use thiserror::Error;

use crate::models::BudgetInput;

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("dev.perdiem", "Perdiem", "perdiem"));

const STATE_KEY: &str = "budget_input";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not determine platform-specific data dir")]
    NoDataDir,
    #[error("failed to create data dir {0}")]
    CreateDir(PathBuf, #[source] std::io::Error),
    #[error("database error")]
    Db(#[from] rusqlite::Error),
    #[error("failed to serialize budget state")]
    Serialize(#[from] serde_json::Error),
}

pub fn db_path() -> Result<PathBuf, StoreError> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2).ok_or(StoreError::NoDataDir)?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).map_err(|e| StoreError::CreateDir(data_dir.to_path_buf(), e))?;
    Ok(data_dir.join("perdiem.sqlite"))
}

/// The persistence collaborator: a single key/value table holding the whole
/// `BudgetInput` as one JSON blob under a fixed key.
pub struct Store {
    conn: Connection,
}

impl Store {
    pub fn open_or_init() -> Result<Self, StoreError> {
        Self::open_at(&db_path()?)
    }

    pub fn open_at(path: &Path) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        Self::from_conn(conn)
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::from_conn(Connection::open_in_memory()?)
    }

    fn from_conn(conn: Connection) -> Result<Self, StoreError> {
        conn.execute_batch(
            r#"
        CREATE TABLE IF NOT EXISTS state(
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        );
        "#,
        )?;
        Ok(Self { conn })
    }

    /// Load the persisted input state. A missing row or a blob that no
    /// longer parses both fall back to defaults; corruption is never
    /// surfaced to the user.
    pub fn load(&self, today: NaiveDate) -> Result<BudgetInput, StoreError> {
        let blob: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM state WHERE key=?1",
                params![STATE_KEY],
                |r| r.get(0),
            )
            .optional()?;
        Ok(blob
            .and_then(|s| serde_json::from_str(&s).ok())
            .unwrap_or_else(|| BudgetInput::default_for(today)))
    }

    /// Overwrite the persisted state unconditionally. Called after every
    /// change; there is no debouncing or versioning.
    pub fn save(&self, input: &BudgetInput) -> Result<(), StoreError> {
        let blob = serde_json::to_string(input)?;
        self.conn.execute(
            "INSERT INTO state(key, value) VALUES(?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value=excluded.value",
            params![STATE_KEY, blob],
        )?;
        Ok(())
    }

    pub fn reset(&self) -> Result<(), StoreError> {
        self.conn
            .execute("DELETE FROM state WHERE key=?1", params![STATE_KEY])?;
        Ok(())
    }

    /// Raw blob write, bypassing serialization. Test hook for exercising the
    /// corrupt-data fallback.
    pub fn put_raw(&self, value: &str) -> Result<(), StoreError> {
        self.conn.execute(
            "INSERT INTO state(key, value) VALUES(?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value=excluded.value",
            params![STATE_KEY, value],
        )?;
        Ok(())
    }
}
