//! Identity tracking for object-keyed cache entries.
//!
//! An object's identity token is its allocation address, and allocators
//! reuse addresses: once an object is dropped, a later, distinct object can
//! come back at the same address. Keying a cache on raw addresses would then
//! hand the new object the dead object's entries.
//!
//! The registry prevents that by pairing every tracked address with a
//! liveness observer and a generation counter. While the original referent
//! is alive, the address keeps its generation. When an address is observed
//! again after its referent died, the generation is incremented, so the new
//! object's derived keys differ from every key the dead object produced.

use std::collections::hash_map::Entry;

use rustc_hash::FxHashMap;

use crate::memo::key::{ObjectIdentity, Observer};

/// Tracks generation counters for object identity tokens.
///
/// # Examples
///
/// ```rust
/// use std::rc::Rc;
/// use fpkit::memo::{IdentityRegistry, ObjectIdentity};
///
/// let mut registry = IdentityRegistry::new();
/// let object = Rc::new(String::from("value"));
///
/// let identity = ObjectIdentity::observe(&object);
/// assert_eq!(registry.generation_for(&identity), 0);
/// // The same live object keeps its generation.
/// assert_eq!(registry.generation_for(&identity), 0);
/// ```
#[derive(Debug, Default)]
pub struct IdentityRegistry {
    tracked: FxHashMap<usize, TrackedIdentity>,
}

#[derive(Debug)]
struct TrackedIdentity {
    observer: Observer,
    generation: u64,
}

impl IdentityRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tracked: FxHashMap::default(),
        }
    }

    /// Returns the generation for an observed object, updating the tracking
    /// state as a side effect.
    ///
    /// - An untracked address is recorded at generation 0.
    /// - A tracked address whose previous referent is no longer alive is a
    ///   collision: the generation is incremented and the observer replaced
    ///   with the current object's.
    /// - A tracked address with a live referent keeps its generation.
    pub fn generation_for(&mut self, identity: &ObjectIdentity) -> u64 {
        match self.tracked.entry(identity.address) {
            Entry::Vacant(slot) => {
                slot.insert(TrackedIdentity {
                    observer: identity.observer.clone(),
                    generation: 0,
                });
                0
            }
            Entry::Occupied(mut entry) => {
                let tracked = entry.get_mut();
                if !tracked.observer.referent_alive() {
                    // Address reuse: a new object came back at a dead
                    // object's address.
                    tracked.generation += 1;
                    tracked.observer = identity.observer.clone();
                }
                tracked.generation
            }
        }
    }

    /// Drops all tracked identities, including pinned strong references.
    pub fn reset(&mut self) {
        self.tracked.clear();
    }

    /// Returns the number of distinct identity tokens currently tracked.
    #[must_use]
    pub fn tracked_count(&self) -> usize {
        self.tracked.len()
    }
}
