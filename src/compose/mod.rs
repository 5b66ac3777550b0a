//! Function composition, currying, and callable adapters.
//!
//! # Overview
//!
//! The macros live at the crate root (they are `#[macro_export]`ed):
//!
//! - [`compose!`](crate::compose!): compose functions right-to-left
//! - [`pipe!`](crate::pipe!): thread a value through functions left-to-right
//! - [`curry2!`](crate::curry2!) / [`curry3!`](crate::curry3!) /
//!   [`curry4!`](crate::curry4!): fixed-arity currying
//! - [`partial!`](crate::partial!): partial application with `__`
//!   placeholders
//!
//! This module itself provides:
//!
//! - [`curry_n`]: dynamic-arity currying over a uniform argument type
//! - [`identity`], [`constant`], [`flip`]: the basic combinators
//! - [`panics_to_result`]: adapt a panicking callable into one returning
//!   `Result`
//!
//! # Examples
//!
//! ```rust
//! use fpkit::{compose, pipe};
//!
//! fn add_one(value: i32) -> i32 { value + 1 }
//! fn double(value: i32) -> i32 { value * 2 }
//!
//! let composed = compose!(add_one, double);
//! assert_eq!(composed(5), 11);
//!
//! assert_eq!(pipe!(5, double, add_one), 11);
//! ```

mod adapt;
mod compose_macro;
mod curry_macro;
mod curry_n;
mod partial_macro;
mod pipe_macro;
mod utils;

pub use adapt::panics_to_result;
pub use curry_n::{Applied, CurriedN, curry_n};
pub use utils::{constant, flip, identity};
