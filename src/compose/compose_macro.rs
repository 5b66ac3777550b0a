//! The `compose!` macro for right-to-left function composition.

/// Composes functions from right to left.
///
/// `compose!(f, g, h)(x)` is equivalent to `f(g(h(x)))`: the rightmost
/// function is applied first, following the mathematical convention.
///
/// # Laws
///
/// - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
/// - **Identity**: `compose!(identity, f) == f == compose!(f, identity)`
///
/// # Examples
///
/// ```rust
/// use fpkit::compose;
///
/// fn add_one(value: i32) -> i32 { value + 1 }
/// fn double(value: i32) -> i32 { value * 2 }
///
/// // add_one(double(5)) = 11
/// let composed = compose!(add_one, double);
/// assert_eq!(composed(5), 11);
/// ```
///
/// ## Types flow through the chain
///
/// ```rust
/// use fpkit::compose;
///
/// fn stringify(value: i32) -> String { value.to_string() }
/// fn length(text: String) -> usize { text.len() }
///
/// let digits = compose!(length, stringify);
/// assert_eq!(digits(12345), 5);
/// ```
#[macro_export]
macro_rules! compose {
    ($function:expr $(,)?) => {
        $function
    };
    ($head:expr, $($tail:expr),+ $(,)?) => {
        move |input| ($head)($crate::compose!($($tail),+)(input))
    };
}
