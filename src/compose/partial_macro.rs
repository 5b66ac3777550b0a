//! The `partial!` macro for partial function application.

/// Partially applies arguments to a 2- or 3-argument function.
///
/// Use `__` (double underscore) as a placeholder for arguments that remain
/// parameters of the resulting closure. The `__` is matched as a literal
/// token — do not import anything for it.
///
/// # Syntax
///
/// For a 2-argument function `f(a, b)`:
/// - `partial!(f, value, __)` creates `|b| f(value, b)`
/// - `partial!(f, __, value)` creates `|a| f(a, value)`
/// - `partial!(f, v1, v2)` creates `|| f(v1, v2)` (a thunk)
/// - `partial!(f, __, __)` creates `|a, b| f(a, b)`
///
/// The same patterns apply to 3-argument functions.
///
/// # Type Requirements
///
/// - Fixed values must implement [`Clone`] (the partial function may be
///   called repeatedly)
/// - The wrapped function must implement [`Fn`]
///
/// # Examples
///
/// ```rust
/// use fpkit::partial;
///
/// fn add(first: i32, second: i32) -> i32 { first + second }
///
/// let add_five = partial!(add, 5, __);
/// assert_eq!(add_five(3), 8);
/// assert_eq!(add_five(10), 15);
/// ```
///
/// ## Fixing the second argument
///
/// ```rust
/// use fpkit::partial;
///
/// fn divide(numerator: f64, denominator: f64) -> f64 {
///     numerator / denominator
/// }
///
/// let halve = partial!(divide, __, 2.0);
/// assert_eq!(halve(10.0), 5.0);
/// ```
///
/// ## Three-argument functions
///
/// ```rust
/// use fpkit::partial;
///
/// fn clamp(value: i32, low: i32, high: i32) -> i32 {
///     value.max(low).min(high)
/// }
///
/// let clamp_percent = partial!(clamp, __, 0, 100);
/// assert_eq!(clamp_percent(250), 100);
/// assert_eq!(clamp_percent(-4), 0);
/// ```
#[macro_export]
macro_rules! partial {
    // 2-argument forms
    ($function:expr, __, __ $(,)?) => {{
        let function = $function;
        move |first, second| function(first, second)
    }};
    ($function:expr, $first:expr, __ $(,)?) => {{
        let function = $function;
        let first = $first;
        move |second| function(::std::clone::Clone::clone(&first), second)
    }};
    ($function:expr, __, $second:expr $(,)?) => {{
        let function = $function;
        let second = $second;
        move |first| function(first, ::std::clone::Clone::clone(&second))
    }};
    ($function:expr, $first:expr, $second:expr $(,)?) => {{
        let function = $function;
        let first = $first;
        let second = $second;
        move || {
            function(
                ::std::clone::Clone::clone(&first),
                ::std::clone::Clone::clone(&second),
            )
        }
    }};
    // 3-argument forms
    ($function:expr, __, __, __ $(,)?) => {{
        let function = $function;
        move |first, second, third| function(first, second, third)
    }};
    ($function:expr, $first:expr, __, __ $(,)?) => {{
        let function = $function;
        let first = $first;
        move |second, third| function(::std::clone::Clone::clone(&first), second, third)
    }};
    ($function:expr, __, $second:expr, __ $(,)?) => {{
        let function = $function;
        let second = $second;
        move |first, third| function(first, ::std::clone::Clone::clone(&second), third)
    }};
    ($function:expr, __, __, $third:expr $(,)?) => {{
        let function = $function;
        let third = $third;
        move |first, second| function(first, second, ::std::clone::Clone::clone(&third))
    }};
    ($function:expr, $first:expr, $second:expr, __ $(,)?) => {{
        let function = $function;
        let first = $first;
        let second = $second;
        move |third| {
            function(
                ::std::clone::Clone::clone(&first),
                ::std::clone::Clone::clone(&second),
                third,
            )
        }
    }};
    ($function:expr, $first:expr, __, $third:expr $(,)?) => {{
        let function = $function;
        let first = $first;
        let third = $third;
        move |second| {
            function(
                ::std::clone::Clone::clone(&first),
                second,
                ::std::clone::Clone::clone(&third),
            )
        }
    }};
    ($function:expr, __, $second:expr, $third:expr $(,)?) => {{
        let function = $function;
        let second = $second;
        let third = $third;
        move |first| {
            function(
                first,
                ::std::clone::Clone::clone(&second),
                ::std::clone::Clone::clone(&third),
            )
        }
    }};
    ($function:expr, $first:expr, $second:expr, $third:expr $(,)?) => {{
        let function = $function;
        let first = $first;
        let second = $second;
        let third = $third;
        move || {
            function(
                ::std::clone::Clone::clone(&first),
                ::std::clone::Clone::clone(&second),
                ::std::clone::Clone::clone(&third),
            )
        }
    }};
}
