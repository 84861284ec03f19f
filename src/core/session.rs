use crate::config::Config;
use crate::core::day_store::DayStatusStore;
use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::store::{KeyValueStore, MemoryStore, SqliteStore};
use crate::ui::messages::warning;

/// Storage handle for one CLI invocation.
///
/// Holds the database when it could be opened. Otherwise every store it
/// hands out is in-memory and lives only as long as the process.
pub struct Session {
    pool: Option<DbPool>,
}

impl Session {
    pub fn open(cfg: &Config) -> Self {
        let pool = DbPool::open_or_warn(&cfg.database);
        if pool.is_none() {
            warning(format!(
                "Database '{}' is unavailable, changes are kept for this run only.",
                cfg.database
            ));
        }
        Self { pool }
    }

    pub fn in_memory() -> Self {
        Self { pool: None }
    }

    pub fn is_persistent(&self) -> bool {
        self.pool.is_some()
    }

    /// A raw key-value store over the session's storage.
    pub fn kv(&self) -> Box<dyn KeyValueStore + '_> {
        match &self.pool {
            Some(p) => Box::new(SqliteStore::new(&p.conn)),
            None => Box::new(MemoryStore::new()),
        }
    }

    pub fn day_store(&self) -> DayStatusStore<Box<dyn KeyValueStore + '_>> {
        DayStatusStore::new(self.kv())
    }

    /// Write an audit line when a database is attached.
    pub fn audit(&self, operation: &str, target: &str, message: &str) {
        if let Some(p) = &self.pool {
            ttlog_soft(&p.conn, operation, target, message);
        }
    }
}
