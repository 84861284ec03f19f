//! SQLite connection wrapper (lightweight for CLI usage).

use crate::db::initialize::init_db;
use crate::errors::AppResult;
use rusqlite::{Connection, Result};
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    pub fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(Path::new(path))?;
        Ok(Self { conn })
    }

    /// Open and bring the schema up to date.
    pub fn open(path: &str) -> AppResult<Self> {
        let pool = Self::new(path)?;
        init_db(&pool.conn)?;
        Ok(pool)
    }

    /// Like [`DbPool::open`], but `None` after logging why the database is
    /// out of reach. Day commands keep working on an in-memory store then.
    pub fn open_or_warn(path: &str) -> Option<Self> {
        match Self::open(path) {
            Ok(pool) => Some(pool),
            Err(e) => {
                log::warn!("cannot open database {path}: {e}");
                None
            }
        }
    }
}
