//! Domain-specific assertion macros for the search harnesses.
//!
//! These wrap `pretty_assertions` and add context-rich failure messages that
//! make it clear which search invariant was violated.

/// Assert the exact names (and order) of a result set.
///
/// ```rust
/// assert_names!(results, ["Files", "Firefox"]);
/// ```
#[macro_export]
macro_rules! assert_names {
    ($results:expr, [$($name:expr),* $(,)?]) => {{
        let results: &migemo_core::ResultSet = &$results;
        let expected: Vec<&str> = vec![$($name),*];
        pretty_assertions::assert_eq!(
            results.names(),
            expected,
            "assert_names! failed (pending = {})",
            results.pending
        );
    }};
}

/// Assert that a result set is the "input too short" placeholder.
#[macro_export]
macro_rules! assert_pending {
    ($results:expr) => {{
        let results: &migemo_core::ResultSet = &$results;
        if !results.pending || !results.is_empty() {
            panic!(
                "assert_pending! failed:\n  pending: {}\n  names:   {:?}",
                results.pending,
                results.names()
            );
        }
    }};
}

/// Assert that every candidate of `$narrow` also appears in `$wide`.
#[macro_export]
macro_rules! assert_subset {
    ($narrow:expr, $wide:expr) => {{
        let narrow: &migemo_core::ResultSet = &$narrow;
        let wide: &migemo_core::ResultSet = &$wide;
        let extra: Vec<_> = narrow
            .iter()
            .filter(|c| !wide.candidates.contains(c))
            .map(|c| c.name.as_str())
            .collect();
        if !extra.is_empty() {
            panic!(
                "assert_subset! failed: {:?} not in the wider set {:?}",
                extra,
                wide.names()
            );
        }
    }};
}
