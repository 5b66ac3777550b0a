//! The memoization cache.

use std::collections::hash_map::Entry;

use rustc_hash::FxHashMap;

use crate::memo::identity::IdentityRegistry;
use crate::memo::key::{KeyInput, MemoKey};

/// A cache that stores the result of a computation per derived key and
/// returns the stored result on subsequent calls with an equal key.
///
/// The cache is an explicit object: construct one, keep it wherever the
/// call sites can reach it (`&mut`, or shared ownership such as
/// `Rc<RefCell<MemoCache<_>>>`), and every instance is independent. There
/// is no process-wide cache and no hidden global state.
///
/// Entries are keyed by strings derived from the callable's identity plus
/// its arguments, or from an explicit override key (see
/// [`MemoKey`]). A populated key is never overwritten: the computation runs
/// once per key, and its result is returned from then on — including
/// "falsy" results such as `0`, `""` or `false`, since presence is tracked
/// by key existence rather than by the value.
///
/// The cache is single-threaded by construction (`&mut self` everywhere):
/// there is no internal locking and no in-flight deduplication of
/// concurrent identical calls. Cross-thread sharing requires external
/// synchronization.
///
/// # Examples
///
/// ```rust
/// use fpkit::memo::MemoCache;
///
/// fn add(arguments: (i32, i32)) -> i32 {
///     arguments.0 + arguments.1
/// }
///
/// let mut cache = MemoCache::new();
///
/// let first = cache.get_or_compute_with_args(add, (2, 3));
/// let second = cache.get_or_compute_with_args(add, (2, 3));
/// assert_eq!(first, 5);
/// assert_eq!(second, 5);
///
/// // A different argument list derives a different key.
/// let third = cache.get_or_compute_with_args(add, (2, 4));
/// assert_eq!(third, 6);
/// assert_eq!(cache.len(), 2);
/// ```
pub struct MemoCache<V> {
    entries: FxHashMap<String, V>,
    identities: IdentityRegistry,
}

impl<V> MemoCache<V> {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: FxHashMap::default(),
            identities: IdentityRegistry::new(),
        }
    }

    /// Clears every entry and all identity-tracking state.
    ///
    /// This is the cache's only eviction mechanism: a full clear. After a
    /// reset, previously memoized calls recompute, and previously tracked
    /// objects are re-registered from scratch (pinned objects are released).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::memo::MemoCache;
    ///
    /// let mut cache = MemoCache::new();
    /// cache.get_or_compute_with_key("answer", || 42);
    /// assert_eq!(cache.len(), 1);
    ///
    /// cache.reset();
    /// assert!(cache.is_empty());
    /// ```
    pub fn reset(&mut self) {
        self.entries.clear();
        self.identities.reset();
    }

    /// Returns the number of cached entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the cache holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V: Clone> MemoCache<V> {
    /// Returns the cached result for the key derived from the callable and
    /// its arguments, computing and storing it on first use.
    ///
    /// The key leads with the callable's identity — its type name, which is
    /// unique per function item and per closure definition site — followed
    /// by the encoded arguments. Closures from the same definition site
    /// share identity regardless of captured values; include captured
    /// values in `arguments`, or use
    /// [`get_or_compute_with_key`](Self::get_or_compute_with_key), when the
    /// captures must discriminate.
    ///
    /// On a miss, `function(arguments)` runs to completion and its result
    /// is stored; a panic propagates and stores nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::cell::Cell;
    /// use std::rc::Rc;
    /// use fpkit::memo::MemoCache;
    ///
    /// let invocations = Rc::new(Cell::new(0));
    /// let mut cache = MemoCache::new();
    ///
    /// for _ in 0..3 {
    ///     let invocations = Rc::clone(&invocations);
    ///     let value = cache.get_or_compute_with_args(
    ///         move |(a, b)| {
    ///             invocations.set(invocations.get() + 1);
    ///             a + b
    ///         },
    ///         (2, 3),
    ///     );
    ///     assert_eq!(value, 5);
    /// }
    ///
    /// // Computed once, served from cache twice.
    /// assert_eq!(invocations.get(), 1);
    /// ```
    pub fn get_or_compute_with_args<Arguments, Function>(
        &mut self,
        function: Function,
        arguments: Arguments,
    ) -> V
    where
        Arguments: MemoKey,
        Function: FnOnce(Arguments) -> V,
    {
        let key = self.derive_args_key::<Function, Arguments>(&arguments);
        match self.entries.entry(key) {
            Entry::Occupied(entry) => entry.get().clone(),
            Entry::Vacant(slot) => slot.insert(function(arguments)).clone(),
        }
    }

    /// Fallible form of
    /// [`get_or_compute_with_args`](Self::get_or_compute_with_args).
    ///
    /// An `Err` from the computation propagates unchanged and nothing is
    /// stored for the key, so a later call recomputes.
    ///
    /// # Errors
    ///
    /// Returns whatever error the computation returns.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::memo::MemoCache;
    ///
    /// let mut cache = MemoCache::new();
    ///
    /// let failed: Result<i32, String> =
    ///     cache.try_get_or_compute_with_args(|(a, b): (i32, i32)| {
    ///         if b == 0 {
    ///             Err(String::from("division by zero"))
    ///         } else {
    ///             Ok(a / b)
    ///         }
    ///     }, (10, 0));
    /// assert!(failed.is_err());
    /// assert!(cache.is_empty());
    /// ```
    pub fn try_get_or_compute_with_args<Arguments, Function, Error>(
        &mut self,
        function: Function,
        arguments: Arguments,
    ) -> Result<V, Error>
    where
        Arguments: MemoKey,
        Function: FnOnce(Arguments) -> Result<V, Error>,
    {
        let key = self.derive_args_key::<Function, Arguments>(&arguments);
        match self.entries.entry(key) {
            Entry::Occupied(entry) => Ok(entry.get().clone()),
            Entry::Vacant(slot) => Ok(slot.insert(function(arguments)?).clone()),
        }
    }

    /// Returns the cached result for an explicit override key, computing
    /// and storing it on first use.
    ///
    /// The key is derived from the override alone; the callable does not
    /// contribute. Two different callables memoized under an equal override
    /// key share one entry — the first computation wins.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::memo::MemoCache;
    ///
    /// let mut cache = MemoCache::new();
    ///
    /// let first = cache.get_or_compute_with_key("static-key", || 1);
    /// let second = cache.get_or_compute_with_key("static-key", || 2);
    ///
    /// // The second computation never ran.
    /// assert_eq!(first, 1);
    /// assert_eq!(second, 1);
    /// ```
    pub fn get_or_compute_with_key<Key, Function>(&mut self, key: Key, function: Function) -> V
    where
        Key: MemoKey,
        Function: FnOnce() -> V,
    {
        let key = self.derive_override_key(&key);
        match self.entries.entry(key) {
            Entry::Occupied(entry) => entry.get().clone(),
            Entry::Vacant(slot) => slot.insert(function()).clone(),
        }
    }

    /// Fallible form of
    /// [`get_or_compute_with_key`](Self::get_or_compute_with_key).
    ///
    /// # Errors
    ///
    /// Returns whatever error the computation returns; nothing is stored on
    /// failure.
    pub fn try_get_or_compute_with_key<Key, Function, Error>(
        &mut self,
        key: Key,
        function: Function,
    ) -> Result<V, Error>
    where
        Key: MemoKey,
        Function: FnOnce() -> Result<V, Error>,
    {
        let key = self.derive_override_key(&key);
        match self.entries.entry(key) {
            Entry::Occupied(entry) => Ok(entry.get().clone()),
            Entry::Vacant(slot) => Ok(slot.insert(function()?).clone()),
        }
    }

    fn derive_args_key<Function, Arguments: MemoKey>(&mut self, arguments: &Arguments) -> String {
        let input = KeyInput::Sequence(vec![
            KeyInput::Scalar(String::from(std::any::type_name::<Function>())),
            arguments.key_input(),
        ]);
        input.encode(&mut self.identities)
    }

    fn derive_override_key<Key: MemoKey>(&mut self, key: &Key) -> String {
        key.key_input().encode(&mut self.identities)
    }
}

impl<V> Default for MemoCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> std::fmt::Debug for MemoCache<V> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("MemoCache")
            .field("entries", &self.entries.len())
            .field("tracked_identities", &self.identities.tracked_count())
            .finish()
    }
}
