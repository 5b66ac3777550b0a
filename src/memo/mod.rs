//! Memoization with identity-aware key derivation.
//!
//! The module centers on [`MemoCache`], an explicit cache object that
//! stores the result of a computation under a key derived from the
//! callable's identity and its arguments (or an explicit override key) and
//! serves the stored result on every later call with an equal key.
//!
//! Keys are built from [`KeyInput`] trees — a closed variant of sequences,
//! objects and scalars — produced by the [`MemoKey`] trait. Object inputs
//! are identified by allocation address with generation counters
//! ([`IdentityRegistry`]) so that an address reused after an object's death
//! never collides with the dead object's entries.
//!
//! # Examples
//!
//! ```rust
//! use fpkit::memo::MemoCache;
//!
//! fn add(arguments: (i32, i32)) -> i32 {
//!     arguments.0 + arguments.1
//! }
//!
//! let mut cache = MemoCache::new();
//!
//! // Computed once per distinct argument list.
//! assert_eq!(cache.get_or_compute_with_args(add, (2, 3)), 5);
//! assert_eq!(cache.get_or_compute_with_args(add, (2, 3)), 5);
//! assert_eq!(cache.get_or_compute_with_args(add, (2, 4)), 6);
//! assert_eq!(cache.len(), 2);
//!
//! // Override keys bypass argument derivation entirely.
//! let greeting = cache.get_or_compute_with_key("greeting", || 0);
//! assert_eq!(greeting, 0);
//!
//! // reset() is the only eviction mechanism: a full clear.
//! cache.reset();
//! assert!(cache.is_empty());
//! ```

mod cache;
mod identity;
mod key;

pub use cache::MemoCache;
pub use identity::IdentityRegistry;
pub use key::{KeyInput, MemoKey, ObjectIdentity, Pinned};
