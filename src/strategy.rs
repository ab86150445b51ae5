//! Caller-supplied hashing and equality, injected at construction.

use core::hash::{BuildHasher, Hash};
use std::collections::hash_map::RandomState;

/// The hash/equality pair a [`ChainedHashSet`](crate::ChainedHashSet) consults
/// when placing and comparing elements.
///
/// Contract: `equals` must be an equivalence relation, and values it considers
/// equal must produce the same `hash`. Both are invoked with shared references
/// only; a strategy must not reach back into the set that is calling it (the
/// set panics on that in debug builds).
pub trait HashStrategy<T> {
    fn hash(&self, value: &T) -> u64;
    fn equals(&self, a: &T, b: &T) -> bool;
}

/// Strategy for element types that already carry `Hash + Eq`, using any
/// `BuildHasher` for the hash half. The default `RandomState` gives the std
/// library's DoS-resistant seeding.
#[derive(Clone, Debug, Default)]
pub struct DefaultStrategy<S = RandomState> {
    hasher: S,
}

impl DefaultStrategy<RandomState> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S> DefaultStrategy<S> {
    pub fn with_hasher(hasher: S) -> Self {
        Self { hasher }
    }
}

impl<T, S> HashStrategy<T> for DefaultStrategy<S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    fn hash(&self, value: &T) -> u64 {
        self.hasher.hash_one(value)
    }

    fn equals(&self, a: &T, b: &T) -> bool {
        a == b
    }
}
