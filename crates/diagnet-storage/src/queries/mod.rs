//! Query modules, one per table group.

pub mod facts;
