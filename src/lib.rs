//! chained-hashset: a separate-chaining hash set whose buckets are
//! cursor-addressable doubly-linked chains.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: build the set in safe, verifiable layers so each piece can be
//!   reasoned about independently.
//! - Layers:
//!   - Chain<T>: an owning doubly-linked sequence. Nodes live in a slotmap
//!     arena; links are generational keys, so O(1) insert/remove at any
//!     Cursor needs no owning pointers and a stale Cursor resolves to
//!     nothing instead of dangling.
//!   - ChainedHashSet<T, H>: owns a Vec of Chains as its bucket table, maps
//!     elements to `hash % bucket_count`, rejects duplicates per the
//!     injected strategy, and grows the table whenever the next insert
//!     would breach the max load factor (default 1.0, 8 buckets initially).
//!   - Pos: the composite position, bucket index plus within-bucket
//!     Cursor. Advancing exhausts the current chain, then skips empty
//!     buckets; the end position is `{ bucket_count, end cursor }`.
//!
//! Constraints
//! - Single-threaded: the set is `!Sync` (interior `Cell` in the debug
//!   guard); no atomics, no locks.
//! - Hashing and equality are an injected strategy pair (`HashStrategy`),
//!   stored at construction; `DefaultStrategy` covers `T: Hash + Eq`.
//! - Uniqueness: a bucket never holds two elements the strategy considers
//!   equal; duplicate inserts report the existing position.
//! - Rehash moves elements (no clones) and never shrinks the table.
//!
//! Position invalidation
//! - Cursors and Positions are plain `Copy` data, valid only for the
//!   container that produced them. Structural mutation (insert, remove,
//!   rehash, clear) invalidates them, but generational keys make stale
//!   positions fail safe: they resolve to `None`/end rather than to
//!   whatever reused the slot. Holding one across a mutation is a caller
//!   bug the container does not otherwise detect.
//!
//! Reentrancy policy
//! - The only user code the set runs is the strategy pair, invoked while
//!   probing chains and redistributing elements. A strategy must not reach
//!   back into the set mid-operation; debug builds panic on such nested
//!   entry (see `guard`), release builds check nothing.
//!
//! Failure model
//! - `front`/`back` on an empty chain and dereferencing an end position are
//!   the only recoverable errors (`Error`). Allocation failure aborts, as
//!   it does for the std collections; nothing is retried or logged.
//!
//! Notes and non-goals
//! - No iterator stability across rehash, by design.
//! - No open addressing; collision resolution is chaining only.
//! - Public surface is `Chain`/`Cursor`, `ChainedHashSet`/`Pos`, the
//!   strategy trait, and `Error`; the guard is an implementation detail.

pub mod chain;
mod chain_proptest;
mod error;
mod guard;
pub mod hash_set;
mod hash_set_proptest;
pub mod strategy;

// Public surface
pub use chain::{Chain, Cursor};
pub use error::Error;
pub use hash_set::{ChainedHashSet, Pos};
pub use strategy::{DefaultStrategy, HashStrategy};
