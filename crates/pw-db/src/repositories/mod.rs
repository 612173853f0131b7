// All lookups take the store by reference and never fail: a missing key is `None` or an
// empty `Vec`. One-to-many lookups keep store order unless documented otherwise.

pub mod comment;
pub mod connection;
pub mod post;
pub mod question;
pub mod resource;
pub mod stats;
pub mod user;

/// First record matching `predicate`, in store order
pub fn find_first<'a, T, P>(records: &'a [T], predicate: P) -> Option<&'a T>
where
    P: FnMut(&&T) -> bool,
{
    records.iter().find(predicate)
}

/// Every record matching `predicate`, in store order
pub fn filter_all<'a, T, P>(records: &'a [T], predicate: P) -> Vec<&'a T>
where
    P: FnMut(&&T) -> bool,
{
    records.iter().filter(predicate).collect()
}

/// Comparison key for free-form labels (company, topic, expertise tag):
/// trimmed and lowercased with full Unicode case mapping. Accents are kept.
pub fn label_key(label: &str) -> String {
    label.trim().chars().flat_map(char::to_lowercase).collect()
}

/// Whether two labels are equal under [`label_key`]
pub fn same_label(a: &str, b: &str) -> bool {
    a.trim()
        .chars()
        .flat_map(char::to_lowercase)
        .eq(b.trim().chars().flat_map(char::to_lowercase))
}
