//! Name registries mapping entity names to dense indices.
//!
//! Uses `lasso::Rodeo` while a model is being built, and
//! `lasso::RodeoReader` for contention-free lookups once it is frozen.
//! Keys are handed out sequentially, so the first name interned gets
//! index 0, the next new name index 1, and so on.

use lasso::{Key, Rodeo, RodeoReader, Spur};

/// Mutable registry used during model construction.
#[derive(Debug, Default)]
pub struct NameRegistry {
    inner: Rodeo,
}

impl NameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a name, returning its dense index.
    pub fn intern(&mut self, name: &str) -> usize {
        self.inner.get_or_intern(name).into_usize()
    }

    /// Look up a name without inserting.
    pub fn get(&self, name: &str) -> Option<usize> {
        self.inner.get(name).map(Key::into_usize)
    }

    /// Resolve an index back to its name.
    pub fn resolve(&self, index: usize) -> Option<&str> {
        Spur::try_from_usize(index).and_then(|key| self.inner.try_resolve(&key))
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Freeze into a read-only registry.
    pub fn freeze(self) -> FrozenRegistry {
        FrozenRegistry {
            inner: self.inner.into_reader(),
        }
    }
}

/// Read-only registry shared by queries against a built model.
#[derive(Debug)]
pub struct FrozenRegistry {
    inner: RodeoReader,
}

impl FrozenRegistry {
    pub fn get(&self, name: &str) -> Option<usize> {
        self.inner.get(name).map(Key::into_usize)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.inner.contains(name)
    }

    pub fn resolve(&self, index: usize) -> Option<&str> {
        Spur::try_from_usize(index).and_then(|key| self.inner.try_resolve(&key))
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Names in index order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.inner.strings()
    }
}
