//! Dependency structure: top-K parent selection and the cause→effect graph.

pub mod graph;
pub mod selector;

pub use graph::{DependencyGraph, NodeRef};
pub use selector::{select_parents, ParentSelection};
