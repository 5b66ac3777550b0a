//! Error types shared across the crate.
//!
//! All errors are plain structs with public fields. Nothing here is ever
//! retried or logged: construction sites surface these synchronously and
//! callers decide what to do with them.

/// Represents a contract violation the type system cannot express.
///
/// Raised by functions that accept runtime-validated parameters, such as
/// [`curry_n`](crate::compose::curry_n) receiving an arity of zero.
///
/// # Examples
///
/// ```rust
/// use fpkit::error::InvalidArgumentError;
///
/// let error = InvalidArgumentError {
///     function_name: "curry_n",
///     position: 1,
///     expectation: "positive integer",
/// };
/// assert_eq!(
///     format!("{}", error),
///     "curry_n() expects parameter 1 to be positive integer"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidArgumentError {
    /// The name of the function that rejected the argument.
    pub function_name: &'static str,
    /// The 1-based position of the offending parameter.
    pub position: usize,
    /// A description of what the parameter was expected to be.
    pub expectation: &'static str,
}

impl std::fmt::Display for InvalidArgumentError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "{}() expects parameter {} to be {}",
            self.function_name, self.position, self.expectation
        )
    }
}

impl std::error::Error for InvalidArgumentError {}

/// A panic captured by [`panics_to_result`](crate::compose::panics_to_result).
///
/// Carries the stringified panic payload. Payloads that are neither `&str`
/// nor `String` are reported as opaque.
///
/// # Examples
///
/// ```rust
/// use fpkit::error::CaughtPanic;
///
/// let error = CaughtPanic {
///     message: String::from("attempt to divide by zero"),
/// };
/// assert_eq!(
///     format!("{}", error),
///     "wrapped callable panicked: attempt to divide by zero"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaughtPanic {
    /// The panic message, or `"<non-string panic payload>"`.
    pub message: String,
}

impl CaughtPanic {
    /// Builds a `CaughtPanic` from the payload returned by
    /// `std::panic::catch_unwind`.
    #[must_use]
    pub fn from_payload(payload: Box<dyn std::any::Any + Send>) -> Self {
        let message = payload
            .downcast_ref::<&str>()
            .map(|message| (*message).to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| String::from("<non-string panic payload>"));

        Self { message }
    }
}

impl std::fmt::Display for CaughtPanic {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "wrapped callable panicked: {}", self.message)
    }
}

impl std::error::Error for CaughtPanic {}
