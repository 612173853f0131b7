use std::{collections::HashSet, hash::Hash};

/// Keep one record per key, the first one seen.
///
/// Output order is the order of first occurrence in `records`; the input is left
/// untouched. Applying it twice with the same key function gives the same result as
/// applying it once.
///
/// # Examples
/// ```
/// use pw_feed::dedup::dedupe_by;
///
/// let rows = [("a", 1), ("b", 2), ("a", 3)];
/// assert_eq!(dedupe_by(&rows, |r| r.0), vec![("a", 1), ("b", 2)]);
/// ```
pub fn dedupe_by<T, K, F>(records: &[T], mut key: F) -> Vec<T>
where
    T: Clone,
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut seen = HashSet::with_capacity(records.len());
    records
        .iter()
        .filter(|&record| seen.insert(key(record)))
        .cloned()
        .collect()
}
