//! Partitioning a collection by a derived group key.

use std::collections::HashMap;
use std::hash::Hash;

/// Partitions elements into groups keyed by the callback's return value.
///
/// Within each group, elements keep their original encounter order. The
/// groups themselves live in a [`HashMap`] and carry no ordering.
///
/// # Examples
///
/// ```rust
/// use fpkit::collection::group;
///
/// let grouped = group(vec![1, 2, 3, 4, 5], |value| value % 2 == 0);
///
/// assert_eq!(grouped[&true], vec![2, 4]);
/// assert_eq!(grouped[&false], vec![1, 3, 5]);
/// ```
///
/// ## Grouping by a derived string key
///
/// ```rust
/// use fpkit::collection::group;
///
/// let grouped = group(vec!["apple", "avocado", "banana"], |word| {
///     word.chars().next().unwrap_or_default()
/// });
///
/// assert_eq!(grouped[&'a'], vec!["apple", "avocado"]);
/// assert_eq!(grouped[&'b'], vec!["banana"]);
/// ```
#[must_use]
pub fn group<Collection, Callback, Key>(
    collection: Collection,
    mut callback: Callback,
) -> HashMap<Key, Vec<Collection::Item>>
where
    Collection: IntoIterator,
    Callback: FnMut(&Collection::Item) -> Key,
    Key: Hash + Eq,
{
    let mut groups: HashMap<Key, Vec<Collection::Item>> = HashMap::new();
    for element in collection {
        groups.entry(callback(&element)).or_default().push(element);
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_empty() {
        let grouped = group(Vec::<i32>::new(), |value| *value);
        assert!(grouped.is_empty());
    }

    #[test]
    fn test_group_single_group() {
        let grouped = group(vec![1, 2, 3], |_| "all");
        assert_eq!(grouped.len(), 1);
        assert_eq!(grouped["all"], vec![1, 2, 3]);
    }

    #[test]
    fn test_group_preserves_order_within_groups() {
        let grouped = group(0..10, |value| value % 3);
        assert_eq!(grouped[&0], vec![0, 3, 6, 9]);
        assert_eq!(grouped[&1], vec![1, 4, 7]);
        assert_eq!(grouped[&2], vec![2, 5, 8]);
    }
}
