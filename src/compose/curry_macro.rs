//! The curry macro family for converting multi-argument functions to
//! curried form.
//!
//! Currying turns a function of several arguments into a chain of
//! single-argument closures. The macros share the wrapped function through
//! `std::rc::Rc`, so a curried function and every partial application of it
//! can be called any number of times.

/// Converts a 2-argument function into curried form.
///
/// Given `f(a, b) -> c`, returns a closure taking `a` that returns a
/// closure taking `b`.
///
/// # Type Requirements
///
/// - The function must implement [`Fn`]
/// - Earlier arguments must implement [`Clone`] so partial applications
///   stay reusable
///
/// # Examples
///
/// ```rust
/// use fpkit::curry2;
///
/// fn add(first: i32, second: i32) -> i32 { first + second }
///
/// let curried = curry2!(add);
/// assert_eq!(curried(5)(3), 8);
/// ```
///
/// ## Reusable partial applications
///
/// ```rust
/// use fpkit::curry2;
///
/// fn multiply(first: i32, second: i32) -> i32 { first * second }
///
/// let curried = curry2!(multiply);
/// let double = curried(2);
/// let triple = curried(3);
///
/// assert_eq!(double(5), 10);
/// assert_eq!(triple(5), 15);
/// ```
#[macro_export]
macro_rules! curry2 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |first| {
            let function = ::std::rc::Rc::clone(&function);
            move |second| function(::std::clone::Clone::clone(&first), second)
        }
    }};
}

/// Converts a 3-argument function into curried form.
///
/// # Examples
///
/// ```rust
/// use fpkit::curry3;
///
/// fn add_three(first: i32, second: i32, third: i32) -> i32 {
///     first + second + third
/// }
///
/// let curried = curry3!(add_three);
/// assert_eq!(curried(1)(2)(3), 6);
/// ```
#[macro_export]
macro_rules! curry3 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |first| {
            let function = ::std::rc::Rc::clone(&function);
            move |second| {
                let function = ::std::rc::Rc::clone(&function);
                let first = ::std::clone::Clone::clone(&first);
                move |third| {
                    function(
                        ::std::clone::Clone::clone(&first),
                        ::std::clone::Clone::clone(&second),
                        third,
                    )
                }
            }
        }
    }};
}

/// Converts a 4-argument function into curried form.
///
/// # Examples
///
/// ```rust
/// use fpkit::curry4;
///
/// fn add_four(first: i32, second: i32, third: i32, fourth: i32) -> i32 {
///     first + second + third + fourth
/// }
///
/// let curried = curry4!(add_four);
/// assert_eq!(curried(1)(2)(3)(4), 10);
/// ```
#[macro_export]
macro_rules! curry4 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |first| {
            let function = ::std::rc::Rc::clone(&function);
            move |second| {
                let function = ::std::rc::Rc::clone(&function);
                let first = ::std::clone::Clone::clone(&first);
                move |third| {
                    let function = ::std::rc::Rc::clone(&function);
                    let first = ::std::clone::Clone::clone(&first);
                    let second = ::std::clone::Clone::clone(&second);
                    move |fourth| {
                        function(
                            ::std::clone::Clone::clone(&first),
                            ::std::clone::Clone::clone(&second),
                            ::std::clone::Clone::clone(&third),
                            fourth,
                        )
                    }
                }
            }
        }
    }};
}
