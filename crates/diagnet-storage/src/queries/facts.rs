//! Node and relationship queries.

use diagnet_core::errors::StorageError;
use diagnet_core::Fact;
use rusqlite::{params, Connection};
use serde::Serialize;

/// Row counts of the relationship store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StoreStats {
    pub causes: u64,
    pub effects: u64,
    pub relationships: u64,
}

/// Insert a cause if absent and return its id.
pub fn merge_cause(conn: &Connection, name: &str) -> Result<i64, StorageError> {
    conn.execute("INSERT OR IGNORE INTO causes (name) VALUES (?1)", params![name])
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;
    conn.prepare_cached("SELECT id FROM causes WHERE name = ?1")
        .and_then(|mut stmt| stmt.query_row(params![name], |row| row.get(0)))
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })
}

/// Insert an effect if absent and return its id.
pub fn merge_effect(conn: &Connection, name: &str) -> Result<i64, StorageError> {
    conn.execute("INSERT OR IGNORE INTO effects (name) VALUES (?1)", params![name])
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;
    conn.prepare_cached("SELECT id FROM effects WHERE name = ?1")
        .and_then(|mut stmt| stmt.query_row(params![name], |row| row.get(0)))
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })
}

/// Link a cause to an effect. Returns `true` if the link is new.
pub fn merge_link(conn: &Connection, cause_id: i64, effect_id: i64) -> Result<bool, StorageError> {
    let inserted = conn
        .execute(
            "INSERT OR IGNORE INTO cause_effects (cause_id, effect_id) VALUES (?1, ?2)",
            params![cause_id, effect_id],
        )
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;
    Ok(inserted > 0)
}

/// Every relationship as a fact, in insertion order.
pub fn load_facts(conn: &Connection) -> Result<Vec<Fact>, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT c.name, e.name
             FROM cause_effects ce
             JOIN causes c ON c.id = ce.cause_id
             JOIN effects e ON e.id = ce.effect_id
             ORDER BY ce.rowid",
        )
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;

    let rows = stmt
        .query_map([], |row| {
            Ok(Fact {
                cause: row.get(0)?,
                effect: row.get(1)?,
            })
        })
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;

    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })
}

/// Effects linked to `cause`, in insertion order.
pub fn effects_of(conn: &Connection, cause: &str) -> Result<Vec<String>, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT e.name
             FROM cause_effects ce
             JOIN causes c ON c.id = ce.cause_id
             JOIN effects e ON e.id = ce.effect_id
             WHERE c.name = ?1
             ORDER BY ce.rowid",
        )
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;

    let rows = stmt
        .query_map(params![cause], |row| row.get(0))
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;

    rows.collect::<Result<Vec<String>, _>>()
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })
}

/// Remove every node and relationship.
pub fn clear_all(conn: &Connection) -> Result<(), StorageError> {
    conn.execute_batch(
        "DELETE FROM cause_effects;
         DELETE FROM effects;
         DELETE FROM causes;",
    )
    .map_err(|e| StorageError::SqliteError { message: e.to_string() })
}

pub fn stats(conn: &Connection) -> Result<StoreStats, StorageError> {
    conn.query_row(
        "SELECT
            (SELECT COUNT(*) FROM causes),
            (SELECT COUNT(*) FROM effects),
            (SELECT COUNT(*) FROM cause_effects)",
        [],
        |row| {
            Ok(StoreStats {
                causes: row.get::<_, i64>(0)? as u64,
                effects: row.get::<_, i64>(1)? as u64,
                relationships: row.get::<_, i64>(2)? as u64,
            })
        },
    )
    .map_err(|e| StorageError::SqliteError { message: e.to_string() })
}
