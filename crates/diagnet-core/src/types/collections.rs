//! Re-exports of performance-oriented collection types.

pub use rustc_hash::{FxHashMap, FxHashSet};
pub use smallvec::SmallVec;

/// Parent list of an effect node. `max_parents` defaults to 5, so most
/// lists never spill to the heap.
pub type ParentList<T> = SmallVec<[T; 8]>;
