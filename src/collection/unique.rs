//! First-occurrence de-duplication.

use smallvec::SmallVec;

/// Inline capacity for the seen-index buffer before spilling to the heap.
const SEEN_INLINE_CAPACITY: usize = 8;

/// Removes duplicate elements, keeping the first occurrence of each.
///
/// Comparison is strict [`PartialEq`] equality and the original encounter
/// order is preserved. Elements only need `PartialEq`, not `Hash` or `Ord`,
/// so the scan is linear in the number of distinct elements.
///
/// # Examples
///
/// ```rust
/// use fpkit::collection::unique;
///
/// assert_eq!(unique(vec![1, 2, 1, 3, 2, 4]), vec![1, 2, 3, 4]);
/// assert_eq!(unique(vec!["a", "b", "a"]), vec!["a", "b"]);
/// ```
#[must_use]
pub fn unique<Collection>(collection: Collection) -> Vec<Collection::Item>
where
    Collection: IntoIterator,
    Collection::Item: PartialEq,
{
    let mut aggregation: Vec<Collection::Item> = Vec::new();
    for element in collection {
        if !aggregation.contains(&element) {
            aggregation.push(element);
        }
    }
    aggregation
}

/// Removes duplicates keyed by a callback-derived index value.
///
/// The callback maps each element to an index; elements whose index was
/// already seen are dropped. The first element per index wins and encounter
/// order is preserved.
///
/// # Examples
///
/// ```rust
/// use fpkit::collection::unique_by;
///
/// // One word per length.
/// let words = unique_by(vec!["hi", "to", "sun", "cat"], |word| word.len());
/// assert_eq!(words, vec!["hi", "sun"]);
/// ```
#[must_use]
pub fn unique_by<Collection, Callback, Index>(
    collection: Collection,
    mut callback: Callback,
) -> Vec<Collection::Item>
where
    Collection: IntoIterator,
    Callback: FnMut(&Collection::Item) -> Index,
    Index: PartialEq,
{
    let mut seen: SmallVec<[Index; SEEN_INLINE_CAPACITY]> = SmallVec::new();
    let mut aggregation: Vec<Collection::Item> = Vec::new();
    for element in collection {
        let index = callback(&element);
        if !seen.contains(&index) {
            seen.push(index);
            aggregation.push(element);
        }
    }
    aggregation
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_empty() {
        assert_eq!(unique(Vec::<i32>::new()), Vec::<i32>::new());
    }

    #[test]
    fn test_unique_all_distinct() {
        assert_eq!(unique(vec![3, 1, 2]), vec![3, 1, 2]);
    }

    #[test]
    fn test_unique_works_without_hash() {
        // f64 is PartialEq but not Eq/Hash.
        assert_eq!(unique(vec![1.5, 2.5, 1.5]), vec![1.5, 2.5]);
    }

    #[test]
    fn test_unique_by_keeps_first_element_per_index() {
        let values = unique_by(vec![10, 21, 30, 41], |value| value % 10);
        assert_eq!(values, vec![10, 21]);
    }

    #[test]
    fn test_unique_by_spills_past_inline_capacity() {
        let values: Vec<i32> = (0..SEEN_INLINE_CAPACITY as i32 * 2).collect();
        let result = unique_by(values.clone(), |value| *value);
        assert_eq!(result, values);
    }
}
