//! Node identifiers and name interning.
//! FxHashMap, SmallVec, lasso-backed registries, dense index ID types.

pub mod collections;
pub mod identifiers;
pub mod interning;

pub use collections::{FxHashMap, FxHashSet, ParentList};
pub use identifiers::{CauseId, EffectId};
pub use interning::{FrozenRegistry, NameRegistry};
