//! Order-preserving combinators over ordinary collections.
//!
//! Every function in this module is a standalone, stateless helper over
//! anything that implements [`IntoIterator`]. Results come back as owned
//! `Vec`s (or maps) in encounter order:
//!
//! - [`map`]: apply a callback to each element, collecting in order
//! - [`reduce_left`] / [`reduce_right`]: directional folds
//! - [`flatten`]: collapse a [`Nested`] tree of collections into one `Vec`
//! - [`unique`] / [`unique_by`]: first-occurrence de-duplication
//! - [`group`]: partition elements by a derived group key
//!
//! # Examples
//!
//! ```rust
//! use fpkit::collection::{map, unique};
//!
//! let doubled = map(vec![1, 2, 3], |value| value * 2);
//! assert_eq!(doubled, vec![2, 4, 6]);
//!
//! let deduplicated = unique(vec![1, 2, 1, 3, 2]);
//! assert_eq!(deduplicated, vec![1, 2, 3]);
//! ```

mod flatten;
mod group;
mod map;
mod reduce;
mod unique;

pub use flatten::{Nested, flatten};
pub use group::group;
pub use map::map;
pub use reduce::{reduce_left, reduce_right};
pub use unique::{unique, unique_by};
