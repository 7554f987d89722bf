//! Result merger: drops our matches that another provider already shows.
//!
//! Identity is the display name, not the id. Two different items that share
//! a name collapse into one.

use crate::types::{Candidate, ResultSet};
use std::collections::HashSet;

/// Remove from `own` every candidate whose name appears in `other`.
/// Order and the `pending` flag of `own` are preserved.
pub fn merge(own: ResultSet, other: &[Candidate]) -> ResultSet {
    if other.is_empty() {
        return own;
    }
    let taken: HashSet<&str> = other.iter().map(|c| c.name.as_str()).collect();
    let ResultSet { candidates, pending } = own;
    let candidates = candidates
        .into_iter()
        .filter(|c| !taken.contains(c.name.as_str()))
        .collect();
    ResultSet { candidates, pending }
}
