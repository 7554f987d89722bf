//! Core types shared by every search layer.
//!
//! [`SearchTerms`] is what the host hands us on each keystroke, [`Candidate`]
//! is what the catalog supplies, and [`ResultSet`] is what flows back.

use serde::{Deserialize, Serialize};

/// Opaque identity of a catalog item (a desktop-file id, a line number, …).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CandidateId(String);

impl CandidateId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl From<&str> for CandidateId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for CandidateId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CandidateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A searchable item. The search core reads candidates but never mutates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: CandidateId,
    /// Display name; the only field the matcher and the merger look at.
    pub name: String,
}

impl Candidate {
    pub fn new(id: impl Into<CandidateId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// The user's input as an ordered list of tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchTerms(Vec<String>);

impl SearchTerms {
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(terms.into_iter().map(Into::into).collect())
    }

    /// Split a raw search string on Unicode whitespace.
    pub fn parse(input: &str) -> Self {
        Self::new(input.split_whitespace())
    }

    /// Terms joined with a single space. Used for length gating and as the
    /// logical identity of the query.
    pub fn joined(&self) -> String {
        self.0.join(" ")
    }

    /// Length of [`joined`](Self::joined) in characters, not bytes.
    pub fn joined_len(&self) -> usize {
        let chars: usize = self.0.iter().map(|t| t.chars().count()).sum();
        chars + self.0.len().saturating_sub(1)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for SearchTerms {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl std::fmt::Display for SearchTerms {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.joined())
    }
}

/// Ordered matches for one query.
///
/// `pending` marks a result produced without searching because the input was
/// too short. Hosts cache the last set and pass it back to
/// [`SearchController::subsearch`](crate::SearchController::subsearch).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultSet {
    pub candidates: Vec<Candidate>,
    pub pending: bool,
}

impl ResultSet {
    /// An empty, non-pending set: a search ran and found nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// An empty set standing in for a search that has not run yet.
    pub fn pending() -> Self {
        Self {
            candidates: Vec::new(),
            pending: true,
        }
    }

    pub fn from_candidates(candidates: Vec<Candidate>) -> Self {
        Self {
            candidates,
            pending: false,
        }
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Candidate> {
        self.candidates.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.candidates.iter().map(|c| c.name.as_str()).collect()
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a Candidate;
    type IntoIter = std::slice::Iter<'a, Candidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.candidates.iter()
    }
}
