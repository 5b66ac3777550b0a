//! The `map` combinator.

/// Applies a callback to each element of a collection, collecting the
/// results in the original order.
///
/// This is the crate's basic "iterate and apply" primitive; the memoization
/// key encoder uses it to encode sequence inputs element by element.
///
/// # Arguments
///
/// * `collection` - Anything that implements [`IntoIterator`]
/// * `callback` - The function applied to each element
///
/// # Examples
///
/// ```rust
/// use fpkit::collection::map;
///
/// let lengths = map(vec!["a", "bb", "ccc"], |element| element.len());
/// assert_eq!(lengths, vec![1, 2, 3]);
/// ```
///
/// ## Order preservation
///
/// ```rust
/// use fpkit::collection::map;
///
/// let identity: Vec<i32> = map(1..=4, |value| value);
/// assert_eq!(identity, vec![1, 2, 3, 4]);
/// ```
#[must_use]
pub fn map<Collection, Callback, Output>(
    collection: Collection,
    callback: Callback,
) -> Vec<Output>
where
    Collection: IntoIterator,
    Callback: FnMut(Collection::Item) -> Output,
{
    collection.into_iter().map(callback).collect()
}
