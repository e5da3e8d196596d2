//! FactStore: the relationship store behind a single serialized connection.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use rusqlite::Connection;
use tracing::{debug, info};

use diagnet_core::errors::StorageError;
use diagnet_core::{DiagnetResult, Fact, FactBundle, FactSource};

use crate::connection::apply_pragmas;
use crate::migrations::{self, run_migrations};
use crate::queries::facts::{self as q, StoreStats};

/// SQLite-backed store of cause/effect relationships.
pub struct FactStore {
    conn: Mutex<Connection>,
    path: Option<PathBuf>,
}

impl FactStore {
    /// Open (or create) the database at `path` and bring its schema up to
    /// date.
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        let conn = Connection::open(path).map_err(|e| StorageError::SqliteError {
            message: format!("failed to open {}: {e}", path.display()),
        })?;
        Self::init(conn, Some(path.to_path_buf()))
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory().map_err(|e| StorageError::SqliteError {
            message: e.to_string(),
        })?;
        Self::init(conn, None)
    }

    fn init(conn: Connection, path: Option<PathBuf>) -> Result<Self, StorageError> {
        apply_pragmas(&conn)?;
        run_migrations(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
            path,
        })
    }

    /// Database file, or `None` for an in-memory store.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Run `f` with exclusive access to the connection.
    pub fn with_conn<F, T>(&self, f: F) -> Result<T, StorageError>
    where
        F: FnOnce(&mut Connection) -> Result<T, StorageError>,
    {
        let mut guard = self.conn.lock().map_err(|_| StorageError::LockPoisoned)?;
        f(&mut guard)
    }

    pub fn schema_version(&self) -> Result<u32, StorageError> {
        self.with_conn(|conn| migrations::current_version(conn))
    }

    /// Record one relationship. Returns `true` if it was not stored yet.
    ///
    /// Self-loops and facts with an empty name are skipped.
    pub fn merge_fact(&self, fact: &Fact) -> Result<bool, StorageError> {
        if !fact.is_retainable() {
            debug!(cause = %fact.cause, effect = %fact.effect, "skipping fact");
            return Ok(false);
        }
        self.with_conn(|conn| merge_one(conn, &fact.cause, &fact.effect))
    }

    /// Record a cause with all of its effects in one transaction. Returns
    /// the number of new relationships.
    pub fn merge_bundle(&self, bundle: &FactBundle) -> Result<usize, StorageError> {
        self.merge_bundles(std::slice::from_ref(bundle))
    }

    /// Record many bundles in one transaction. Returns the number of new
    /// relationships.
    pub fn merge_bundles(&self, bundles: &[FactBundle]) -> Result<usize, StorageError> {
        self.with_conn(|conn| {
            let tx = conn.transaction().map_err(|e| StorageError::SqliteError {
                message: e.to_string(),
            })?;
            let mut added = 0;
            for fact in bundles.iter().flat_map(FactBundle::to_facts) {
                if fact.is_retainable() && merge_one(&tx, &fact.cause, &fact.effect)? {
                    added += 1;
                }
            }
            tx.commit().map_err(|e| StorageError::SqliteError {
                message: e.to_string(),
            })?;
            Ok(added)
        })
    }

    /// Remove every node and relationship.
    pub fn clear(&self) -> Result<(), StorageError> {
        self.with_conn(|conn| q::clear_all(conn))?;
        info!("relationship store cleared");
        Ok(())
    }

    /// Every relationship as a fact, in insertion order.
    pub fn load_facts(&self) -> Result<Vec<Fact>, StorageError> {
        self.with_conn(|conn| q::load_facts(conn))
    }

    /// Effects linked to `cause`.
    pub fn effects_of(&self, cause: &str) -> Result<Vec<String>, StorageError> {
        self.with_conn(|conn| q::effects_of(conn, cause))
    }

    /// Node and relationship counts.
    pub fn stats(&self) -> Result<StoreStats, StorageError> {
        self.with_conn(|conn| q::stats(conn))
    }
}

fn merge_one(conn: &Connection, cause: &str, effect: &str) -> Result<bool, StorageError> {
    let cause_id = q::merge_cause(conn, cause)?;
    let effect_id = q::merge_effect(conn, effect)?;
    q::merge_link(conn, cause_id, effect_id)
}

impl FactSource for FactStore {
    fn fetch_facts(&self) -> DiagnetResult<Vec<Fact>> {
        Ok(self.load_facts()?)
    }

    fn describe(&self) -> String {
        match &self.path {
            Some(path) => format!("relationship store {}", path.display()),
            None => "in-memory relationship store".to_string(),
        }
    }
}

impl std::fmt::Debug for FactStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FactStore").field("path", &self.path).finish()
    }
}
