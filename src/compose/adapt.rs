//! Adapting a callable's failure channel.

use std::panic::{UnwindSafe, catch_unwind};

use crate::error::CaughtPanic;

/// Wraps a callable so that panics surface as [`CaughtPanic`] errors
/// instead of unwinding.
///
/// The wrapped callable takes a single argument; pass a tuple to adapt a
/// multi-argument computation. Results of successful calls pass through
/// unchanged.
///
/// # Examples
///
/// ```rust
/// use fpkit::compose::panics_to_result;
///
/// let checked_divide = panics_to_result(|(a, b): (i32, i32)| a / b);
///
/// assert_eq!(checked_divide((10, 2)), Ok(5));
///
/// let error = checked_divide((1, 0)).unwrap_err();
/// assert!(error.message.contains("divide by zero"));
/// ```
pub fn panics_to_result<Argument, Output, Function>(
    function: Function,
) -> impl Fn(Argument) -> Result<Output, CaughtPanic>
where
    Function: Fn(Argument) -> Output + std::panic::RefUnwindSafe,
    Argument: UnwindSafe,
{
    move |argument| catch_unwind(|| function(argument)).map_err(CaughtPanic::from_payload)
}
