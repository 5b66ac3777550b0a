//! Key derivation for the memoization cache.
//!
//! Cache keys are derived from a closed tagged variant, [`KeyInput`], rather
//! than from runtime type inspection. Argument values are converted into a
//! `KeyInput` tree up front (via the [`MemoKey`] trait) and the tree is then
//! encoded in a single walk:
//!
//! - [`KeyInput::Sequence`]: elements are encoded recursively and joined
//!   with `:`
//! - [`KeyInput::Object`]: encoded as `typeName:identityToken:generation`,
//!   where the generation comes from the
//!   [`IdentityRegistry`](crate::memo::IdentityRegistry)
//! - [`KeyInput::Scalar`]: the canonical string form of the value

use std::any::Any;
use std::rc::{Rc, Weak};

use crate::collection::map;
use crate::memo::identity::IdentityRegistry;

/// A value prepared for key encoding.
///
/// # Examples
///
/// ```rust
/// use fpkit::memo::{IdentityRegistry, KeyInput, MemoKey};
///
/// let mut registry = IdentityRegistry::new();
/// let input = (2, 3).key_input();
/// assert_eq!(input.encode(&mut registry), "2:3");
/// ```
#[derive(Debug, Clone)]
pub enum KeyInput {
    /// An ordered sequence of nested inputs.
    Sequence(Vec<KeyInput>),
    /// A reference-counted object identified by its allocation identity.
    Object(ObjectIdentity),
    /// A scalar in its canonical string form.
    Scalar(String),
}

impl KeyInput {
    /// Encodes this input into its cache-key string.
    ///
    /// Object inputs consult (and update) the registry for their generation;
    /// sequence and scalar inputs are pure.
    ///
    /// Sequences are flattened textually: `[[a, b]]` and `[a, b]` encode to
    /// the same string. Same-string collisions between structurally
    /// different inputs are possible; callers who need to discriminate put a
    /// distinguishing component first, the way
    /// [`MemoCache`](crate::memo::MemoCache) leads with the callable
    /// identity.
    #[must_use]
    pub fn encode(&self, registry: &mut IdentityRegistry) -> String {
        match self {
            Self::Scalar(text) => text.clone(),
            Self::Object(identity) => {
                let generation = registry.generation_for(identity);
                format!(
                    "{}:{:x}:{}",
                    identity.type_name, identity.address, generation
                )
            }
            Self::Sequence(elements) => {
                map(elements, |element| element.encode(registry)).join(":")
            }
        }
    }
}

/// The observed identity of a reference-counted object.
///
/// Identity is the object's allocation address, which the underlying
/// allocator may reuse after the object is dropped. The attached observer
/// lets the [`IdentityRegistry`](crate::memo::IdentityRegistry) detect such
/// reuse and keep dead and live objects apart (see the generation protocol
/// there).
#[derive(Debug, Clone)]
pub struct ObjectIdentity {
    pub(crate) type_name: &'static str,
    pub(crate) address: usize,
    pub(crate) observer: Observer,
}

impl ObjectIdentity {
    /// Observes an object weakly.
    ///
    /// The observation does not extend the object's lifetime; once every
    /// strong reference is dropped, the observer reports the referent dead
    /// and the registry mints a new generation for any later object reusing
    /// the address.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::rc::Rc;
    /// use fpkit::memo::ObjectIdentity;
    ///
    /// let object = Rc::new(String::from("config"));
    /// let identity = ObjectIdentity::observe(&object);
    /// ```
    #[must_use]
    pub fn observe<T: Any>(object: &Rc<T>) -> Self {
        let weak: Weak<T> = Rc::downgrade(object);
        let weak: Weak<dyn Any> = weak;
        Self {
            type_name: std::any::type_name::<T>(),
            address: Rc::as_ptr(object).cast::<()>() as usize,
            observer: Observer::Weak(weak),
        }
    }

    /// Observes an object by holding a strong reference to it.
    ///
    /// This is the fallback for referents whose liveness cannot be observed
    /// weakly (for example objects handed out by an API that does not expose
    /// a downgradable handle at the call site). The strong reference
    /// guarantees the identity token is never reused while the registry
    /// lives — at the cost of keeping the object alive for as long as the
    /// cache does. Prefer [`ObjectIdentity::observe`] unless that retention
    /// is acceptable.
    #[must_use]
    pub fn pin<T: Any>(object: Rc<T>) -> Self {
        let address = Rc::as_ptr(&object).cast::<()>() as usize;
        let owned: Rc<dyn Any> = object;
        Self {
            type_name: std::any::type_name::<T>(),
            address,
            observer: Observer::Pinned(owned),
        }
    }

    #[cfg(test)]
    pub(crate) fn fabricated(address: usize, observer: Observer) -> Self {
        Self {
            type_name: "fabricated",
            address,
            observer,
        }
    }
}

/// How a tracked object's liveness is established.
#[derive(Clone)]
pub(crate) enum Observer {
    /// Non-owning observation; reports dead once all strong refs are gone.
    Weak(Weak<dyn Any>),
    /// Owning observation; the referent cannot die while tracked.
    Pinned(Rc<dyn Any>),
}

impl Observer {
    pub(crate) fn referent_alive(&self) -> bool {
        match self {
            Self::Weak(weak) => weak.strong_count() > 0,
            Self::Pinned(_) => true,
        }
    }
}

impl std::fmt::Debug for Observer {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Weak(weak) => formatter
                .debug_tuple("Weak")
                .field(&weak.strong_count())
                .finish(),
            Self::Pinned(_) => formatter.write_str("Pinned"),
        }
    }
}

/// A strong-observation wrapper for use as a key argument.
///
/// Where `Rc<T>` keys into the cache via weak observation, `Pinned<T>` keys
/// in while holding a strong reference, keeping the object (and therefore
/// its identity token) alive for the cache's lifetime. This is a deliberate
/// memory-retention tradeoff; see [`ObjectIdentity::pin`].
///
/// # Examples
///
/// ```rust
/// use std::rc::Rc;
/// use fpkit::memo::{MemoCache, Pinned};
///
/// let mut cache = MemoCache::new();
/// let session = Rc::new(String::from("session"));
///
/// let value = cache.get_or_compute_with_key(Pinned::new(Rc::clone(&session)), || 7);
/// assert_eq!(value, 7);
/// ```
#[derive(Debug, Clone)]
pub struct Pinned<T>(Rc<T>);

impl<T: Any> Pinned<T> {
    /// Wraps a reference-counted object for strong observation.
    #[must_use]
    pub fn new(object: Rc<T>) -> Self {
        Self(object)
    }
}

/// Conversion of argument values into [`KeyInput`] trees.
///
/// Implemented for scalars (integers, floats, `bool`, `char`, strings),
/// sequences (`Vec`, slices, arrays, tuples up to arity 6), reference-counted
/// objects (`Rc<T>` via weak observation, [`Pinned<T>`] via strong
/// observation), and [`KeyInput`] itself.
pub trait MemoKey {
    /// Converts this value into its key-encoding input.
    fn key_input(&self) -> KeyInput;
}

impl<K: MemoKey + ?Sized> MemoKey for &K {
    fn key_input(&self) -> KeyInput {
        (**self).key_input()
    }
}

macro_rules! memo_key_for_scalars {
    ($($scalar:ty),+ $(,)?) => {
        $(
            impl MemoKey for $scalar {
                fn key_input(&self) -> KeyInput {
                    KeyInput::Scalar(self.to_string())
                }
            }
        )+
    };
}

memo_key_for_scalars! {
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    f32, f64,
    bool, char,
}

impl MemoKey for String {
    fn key_input(&self) -> KeyInput {
        KeyInput::Scalar(self.clone())
    }
}

impl MemoKey for str {
    fn key_input(&self) -> KeyInput {
        KeyInput::Scalar(self.to_string())
    }
}

impl<T: MemoKey> MemoKey for Vec<T> {
    fn key_input(&self) -> KeyInput {
        KeyInput::Sequence(map(self, MemoKey::key_input))
    }
}

impl<T: MemoKey> MemoKey for [T] {
    fn key_input(&self) -> KeyInput {
        KeyInput::Sequence(map(self, MemoKey::key_input))
    }
}

impl<T: MemoKey, const N: usize> MemoKey for [T; N] {
    fn key_input(&self) -> KeyInput {
        KeyInput::Sequence(map(self, MemoKey::key_input))
    }
}

impl MemoKey for () {
    fn key_input(&self) -> KeyInput {
        KeyInput::Sequence(Vec::new())
    }
}

macro_rules! memo_key_for_tuples {
    ($(($($element:ident $index:tt),+))+) => {
        $(
            impl<$($element: MemoKey),+> MemoKey for ($($element,)+) {
                fn key_input(&self) -> KeyInput {
                    KeyInput::Sequence(vec![$(self.$index.key_input()),+])
                }
            }
        )+
    };
}

memo_key_for_tuples! {
    (A 0)
    (A 0, B 1)
    (A 0, B 1, C 2)
    (A 0, B 1, C 2, D 3)
    (A 0, B 1, C 2, D 3, E 4)
    (A 0, B 1, C 2, D 3, E 4, F 5)
}

impl<T: Any> MemoKey for Rc<T> {
    fn key_input(&self) -> KeyInput {
        KeyInput::Object(ObjectIdentity::observe(self))
    }
}

impl<T: Any> MemoKey for Pinned<T> {
    fn key_input(&self) -> KeyInput {
        KeyInput::Object(ObjectIdentity::pin(Rc::clone(&self.0)))
    }
}

impl MemoKey for KeyInput {
    fn key_input(&self) -> KeyInput {
        self.clone()
    }
}

impl MemoKey for ObjectIdentity {
    fn key_input(&self) -> KeyInput {
        KeyInput::Object(self.clone())
    }
}
