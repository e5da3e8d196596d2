//! Dense index ID types for cause and effect nodes.
//!
//! Each ID wraps a `u32` index into its own registry, so a `CauseId`
//! cannot be used where an `EffectId` is expected.

use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub struct $name(pub u32);

        impl $name {
            /// Create an ID from a dense index, or `None` if it does not fit
            /// in a `u32`.
            pub fn try_new(index: usize) -> Option<Self> {
                u32::try_from(index).ok().map(Self)
            }

            /// Create an ID from a registry index.
            ///
            /// Registry keys are `u32`-backed, so their indices always fit.
            ///
            /// # Panics
            /// Panics if `index` does not fit in a `u32`. Use
            /// [`Self::try_new`] for indices from other sources.
            pub fn new(index: usize) -> Self {
                Self::try_new(index).expect("node index exceeds u32::MAX")
            }

            /// The dense index this ID wraps.
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}#{}", stringify!($name), self.0)
            }
        }
    };
}

define_id!(
    /// Index of a cause node (e.g. a disease).
    CauseId
);

define_id!(
    /// Index of an effect node (e.g. a symptom).
    EffectId
);
