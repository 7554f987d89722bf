//! Literal name search: the host's own application provider, reduced to
//! what the merger needs from it.
//!
//! A candidate matches when every term is a case-insensitive substring of
//! its name.

use crate::catalog::Catalog;
use crate::provider::SearchProvider;
use crate::types::{Candidate, ResultSet, SearchTerms};
use async_trait::async_trait;
use std::sync::Arc;

pub const LITERAL_PROVIDER_ID: &str = "literal";

pub struct LiteralProvider {
    catalog: Arc<dyn Catalog>,
}

impl LiteralProvider {
    pub fn new(catalog: Arc<dyn Catalog>) -> Self {
        Self { catalog }
    }

    fn filter<'a, I>(candidates: I, terms: &SearchTerms) -> ResultSet
    where
        I: IntoIterator<Item = &'a Candidate>,
    {
        let needles: Vec<String> = terms.as_slice().iter().map(|t| t.to_lowercase()).collect();
        let candidates = candidates
            .into_iter()
            .filter(|c| {
                let name = c.name.to_lowercase();
                needles.iter().all(|n| name.contains(n.as_str()))
            })
            .cloned()
            .collect();
        ResultSet::from_candidates(candidates)
    }
}

#[async_trait]
impl SearchProvider for LiteralProvider {
    fn id(&self) -> &str {
        LITERAL_PROVIDER_ID
    }

    async fn initial_results(&mut self, terms: &SearchTerms) -> ResultSet {
        if terms.is_empty() {
            return ResultSet::empty();
        }
        Self::filter(&self.catalog.all(), terms)
    }

    async fn subsearch_results(&mut self, previous: &ResultSet, terms: &SearchTerms) -> ResultSet {
        if terms.is_empty() {
            return ResultSet::empty();
        }
        Self::filter(previous, terms)
    }
}
