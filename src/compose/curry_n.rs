//! Dynamic-arity currying over a uniform argument type.
//!
//! Where the [`curry2!`](crate::curry2!) macro family fixes the arity at
//! compile time, [`curry_n`] picks it at runtime: arguments are collected
//! one at a time into a slice and the wrapped function runs once the
//! declared arity is reached.

use std::marker::PhantomData;
use std::rc::Rc;

use crate::error::InvalidArgumentError;

/// A function curried to a runtime-chosen arity.
///
/// Created by [`curry_n`]. Apply arguments one at a time with
/// [`apply`](CurriedN::apply); each application yields either another
/// partial application or the completed result.
pub struct CurriedN<Argument, Output, Function> {
    arity: usize,
    function: Rc<Function>,
    applied: Vec<Argument>,
    _output: PhantomData<fn() -> Output>,
}

/// The outcome of applying one argument to a [`CurriedN`].
pub enum Applied<Argument, Output, Function> {
    /// More arguments are needed.
    Partial(CurriedN<Argument, Output, Function>),
    /// The arity was reached and the function ran.
    Complete(Output),
}

impl<Argument, Output, Function> Applied<Argument, Output, Function> {
    /// Returns the partial application, if more arguments are needed.
    #[must_use]
    pub fn into_partial(self) -> Option<CurriedN<Argument, Output, Function>> {
        match self {
            Self::Partial(curried) => Some(curried),
            Self::Complete(_) => None,
        }
    }

    /// Returns the completed result, if the arity was reached.
    #[must_use]
    pub fn into_complete(self) -> Option<Output> {
        match self {
            Self::Partial(_) => None,
            Self::Complete(output) => Some(output),
        }
    }
}

/// Curries `function` to `arity` arguments of a uniform type.
///
/// The wrapped function receives the collected arguments as a slice once
/// `arity` of them have been applied.
///
/// # Errors
///
/// Returns [`InvalidArgumentError`] when `arity` is zero.
///
/// # Examples
///
/// ```rust
/// use fpkit::compose::{Applied, curry_n};
///
/// let sum = curry_n(3, |values: &[i32]| values.iter().sum::<i32>()).unwrap();
///
/// let partial = match sum.apply(1) {
///     Applied::Partial(curried) => curried,
///     Applied::Complete(_) => unreachable!(),
/// };
/// let partial = match partial.apply(2) {
///     Applied::Partial(curried) => curried,
///     Applied::Complete(_) => unreachable!(),
/// };
/// assert_eq!(partial.apply(3).into_complete(), Some(6));
/// ```
///
/// ## Zero arity is rejected
///
/// ```rust
/// use fpkit::compose::curry_n;
///
/// let rejected = curry_n(0, |values: &[i32]| values.len());
/// assert_eq!(
///     rejected.unwrap_err().to_string(),
///     "curry_n() expects parameter 1 to be positive integer"
/// );
/// ```
pub fn curry_n<Argument, Output, Function>(
    arity: usize,
    function: Function,
) -> Result<CurriedN<Argument, Output, Function>, InvalidArgumentError>
where
    Function: Fn(&[Argument]) -> Output,
{
    if arity == 0 {
        return Err(InvalidArgumentError {
            function_name: "curry_n",
            position: 1,
            expectation: "positive integer",
        });
    }

    Ok(CurriedN {
        arity,
        function: Rc::new(function),
        applied: Vec::new(),
        _output: PhantomData,
    })
}

impl<Argument, Output, Function> CurriedN<Argument, Output, Function>
where
    Function: Fn(&[Argument]) -> Output,
{
    /// Applies one argument.
    ///
    /// Returns [`Applied::Complete`] with the function's result when this
    /// argument reaches the declared arity, and [`Applied::Partial`] with
    /// the extended application otherwise.
    #[must_use]
    pub fn apply(mut self, value: Argument) -> Applied<Argument, Output, Function> {
        self.applied.push(value);
        if self.applied.len() == self.arity {
            Applied::Complete((self.function)(&self.applied))
        } else {
            Applied::Partial(self)
        }
    }

    /// The declared arity.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// How many more arguments are needed before the function runs.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.arity - self.applied.len()
    }
}

impl<Argument, Output, Function> std::fmt::Debug for CurriedN<Argument, Output, Function> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("CurriedN")
            .field("arity", &self.arity)
            .field("applied", &self.applied.len())
            .finish()
    }
}

impl<Argument: Clone, Output, Function> Clone for CurriedN<Argument, Output, Function> {
    /// Clones the partial application; the wrapped function is shared.
    fn clone(&self) -> Self {
        Self {
            arity: self.arity,
            function: Rc::clone(&self.function),
            applied: self.applied.clone(),
            _output: PhantomData,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_arity_completes_immediately() {
        let negate = curry_n(1, |values: &[i32]| -values[0]).unwrap();
        assert_eq!(negate.apply(5).into_complete(), Some(-5));
    }

    #[test]
    fn test_remaining_counts_down() {
        let curried = curry_n(3, |values: &[i32]| values.len()).unwrap();
        assert_eq!(curried.remaining(), 3);

        let curried = curried.apply(1).into_partial().unwrap();
        assert_eq!(curried.remaining(), 2);
    }

    #[test]
    fn test_clone_forks_the_application() {
        let sum = curry_n(2, |values: &[i32]| values.iter().sum::<i32>()).unwrap();
        let with_ten = sum.apply(10).into_partial().unwrap();

        let first = with_ten.clone().apply(1).into_complete();
        let second = with_ten.apply(2).into_complete();

        assert_eq!(first, Some(11));
        assert_eq!(second, Some(12));
    }
}
