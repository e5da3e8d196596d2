//! # diagnet-storage
//!
//! SQLite relationship store holding cause nodes, effect nodes, and the
//! links between them. Writes have "merge" semantics: inserting an
//! existing node or link is a no-op.

pub mod connection;
pub mod migrations;
pub mod queries;
pub mod store;

pub use queries::facts::StoreStats;
pub use store::FactStore;
