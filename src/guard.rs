//! Debug-only guard against strategy callbacks reentering the set.
//!
//! The set runs user code (`HashStrategy::hash`/`equals`) while probing and
//! while redistributing elements, at which point its element count and bucket
//! placement are transiently inconsistent. A strategy that reaches back into
//! the same set (e.g. through a raw pointer) would observe that state. In
//! debug builds the guard panics on such nested entry; release builds check
//! nothing.

use core::cell::Cell;

/// Per-set engagement flag. Public entry points hold a [`ProbeToken`] for
/// their whole body: `let _g = self.guard.engage();`.
///
/// The `Cell` is present in every build profile so the containing set is
/// uniformly `!Sync`, matching its single-threaded contract.
#[derive(Debug)]
pub(crate) struct ProbeGuard {
    engaged: Cell<bool>,
}

impl ProbeGuard {
    pub(crate) const fn new() -> Self {
        Self {
            engaged: Cell::new(false),
        }
    }

    /// Mark a structural operation in flight until the token drops.
    #[inline]
    pub(crate) fn engage(&self) -> ProbeToken<'_> {
        if cfg!(debug_assertions) {
            assert!(
                !self.engaged.replace(true),
                "hash strategy reentered the set during a structural operation"
            );
        }
        ProbeToken { owner: self }
    }
}

/// RAII token returned by [`ProbeGuard::engage`].
pub(crate) struct ProbeToken<'a> {
    owner: &'a ProbeGuard,
}

impl Drop for ProbeToken<'_> {
    fn drop(&mut self) {
        self.owner.engaged.set(false);
    }
}
