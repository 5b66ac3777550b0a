//! Directional fold combinators.

/// Folds a collection from the left.
///
/// The callback receives the accumulator and the next element, in iteration
/// order, and returns the new accumulator.
///
/// # Examples
///
/// ```rust
/// use fpkit::collection::reduce_left;
///
/// let sum = reduce_left(vec![1, 2, 3, 4], |accumulator, value| accumulator + value, 0);
/// assert_eq!(sum, 10);
/// ```
///
/// ## The fold direction is observable for non-commutative operations
///
/// ```rust
/// use fpkit::collection::reduce_left;
///
/// let joined = reduce_left(vec!["a", "b", "c"], |mut accumulator: String, value| {
///     accumulator.push_str(value);
///     accumulator
/// }, String::new());
/// assert_eq!(joined, "abc");
/// ```
#[must_use]
pub fn reduce_left<Collection, Callback, Accumulator>(
    collection: Collection,
    mut callback: Callback,
    initial: Accumulator,
) -> Accumulator
where
    Collection: IntoIterator,
    Callback: FnMut(Accumulator, Collection::Item) -> Accumulator,
{
    let mut accumulator = initial;
    for element in collection {
        accumulator = callback(accumulator, element);
    }
    accumulator
}

/// Folds a collection from the right.
///
/// Elements are consumed in reverse iteration order. The collection is
/// buffered once to reverse it, so this allocates for the element count.
///
/// # Examples
///
/// ```rust
/// use fpkit::collection::reduce_right;
///
/// let joined = reduce_right(vec!["a", "b", "c"], |mut accumulator: String, value| {
///     accumulator.push_str(value);
///     accumulator
/// }, String::new());
/// assert_eq!(joined, "cba");
/// ```
#[must_use]
pub fn reduce_right<Collection, Callback, Accumulator>(
    collection: Collection,
    mut callback: Callback,
    initial: Accumulator,
) -> Accumulator
where
    Collection: IntoIterator,
    Callback: FnMut(Accumulator, Collection::Item) -> Accumulator,
{
    let buffered: Vec<Collection::Item> = collection.into_iter().collect();
    let mut accumulator = initial;
    for element in buffered.into_iter().rev() {
        accumulator = callback(accumulator, element);
    }
    accumulator
}
