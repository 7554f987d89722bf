//! Incremental search controller.
//!
//! Re-entered on every keystroke. Each call decides between three plans:
//!
//! | Input                                              | Plan      | Engine call |
//! |----------------------------------------------------|-----------|-------------|
//! | joined length < [`MIN_QUERY_LENGTH`]               | `Pending` | no          |
//! | no previous set, previous set pending, or length == min | `Full` | yes, whole catalog |
//! | anything else                                      | `Narrow`  | yes, previous set only |
//!
//! Narrowing relies on refinement being monotonic: the engine pattern for a
//! longer query never matches a name the shorter query rejected. Hosts only
//! call `subsearch` when the new string extends the old one.

use crate::catalog::Catalog;
use crate::encoder::encode;
use crate::engine::Transliterator;
use crate::error::EngineError;
use crate::pattern::Pattern;
use crate::types::{Candidate, ResultSet, SearchTerms};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Inputs shorter than this (in characters of the joined string) never reach
/// the engine.
pub const MIN_QUERY_LENGTH: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    /// No terms yet, or the host cleared the search.
    Idle,
    BelowThreshold,
    FullScan,
    Narrowing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanPlan {
    Pending,
    Full,
    Narrow,
}

impl ScanPlan {
    pub fn decide(previous: Option<&ResultSet>, terms: &SearchTerms) -> Self {
        let len = terms.joined_len();
        if len < MIN_QUERY_LENGTH {
            return ScanPlan::Pending;
        }
        match previous {
            Some(prev) if !prev.pending && len != MIN_QUERY_LENGTH => ScanPlan::Narrow,
            _ => ScanPlan::Full,
        }
    }
}

pub struct SearchController {
    engine: Box<dyn Transliterator>,
    catalog: Arc<dyn Catalog>,
    state: SearchState,
    cancel: CancellationToken,
}

impl SearchController {
    pub fn new(engine: Box<dyn Transliterator>, catalog: Arc<dyn Catalog>) -> Self {
        Self {
            engine,
            catalog,
            state: SearchState::Idle,
            cancel: CancellationToken::new(),
        }
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    /// Token that aborts the query currently in flight. A cancelled search
    /// yields an empty result and is not retried; the controller then
    /// installs a fresh token, so fetch the handle again per keystroke.
    pub fn cancel_handle(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// The host cleared its search string.
    pub fn reset(&mut self) {
        tracing::debug!(from = ?self.state, "search reset");
        self.state = SearchState::Idle;
    }

    /// First keystroke of a search, or any keystroke with no usable
    /// previous result.
    pub async fn initial(&mut self, terms: &SearchTerms) -> ResultSet {
        self.run(None, terms).await
    }

    /// A follow-up keystroke. `previous` is the set this controller returned
    /// for the prior input.
    pub async fn subsearch(&mut self, previous: &ResultSet, terms: &SearchTerms) -> ResultSet {
        self.run(Some(previous), terms).await
    }

    /// Stop the engine. Later searches come back empty.
    pub async fn shutdown(&mut self) {
        self.engine.stop().await;
        self.state = SearchState::Idle;
    }

    async fn run(&mut self, previous: Option<&ResultSet>, terms: &SearchTerms) -> ResultSet {
        let plan = ScanPlan::decide(previous, terms);
        tracing::debug!(query = %terms, ?plan, "search");
        match (plan, previous) {
            (ScanPlan::Pending, _) => {
                self.state = if terms.is_empty() {
                    SearchState::Idle
                } else {
                    SearchState::BelowThreshold
                };
                ResultSet::pending()
            }
            (ScanPlan::Narrow, Some(prev)) => {
                self.state = SearchState::Narrowing;
                self.scan(terms, &prev.candidates).await
            }
            _ => {
                self.state = SearchState::FullScan;
                let all = self.catalog.all();
                self.scan(terms, &all).await
            }
        }
    }

    async fn scan(&mut self, terms: &SearchTerms, candidates: &[Candidate]) -> ResultSet {
        match self.try_scan(terms, candidates).await {
            Ok(matches) => {
                tracing::debug!(
                    query = %terms,
                    scanned = candidates.len(),
                    matched = matches.len(),
                    "scan complete"
                );
                ResultSet::from_candidates(matches)
            }
            Err(EngineError::Cancelled) => {
                tracing::debug!(query = %terms, "search abandoned");
                self.cancel = CancellationToken::new();
                ResultSet::empty()
            }
            Err(e) if e.is_fatal() => {
                tracing::error!(
                    query = %terms,
                    error = %e,
                    "engine unavailable; returning no matches"
                );
                ResultSet::empty()
            }
            Err(e) => {
                tracing::warn!(
                    query = %terms,
                    error = %e,
                    "search failed; returning no matches"
                );
                ResultSet::empty()
            }
        }
    }

    async fn try_scan(
        &mut self,
        terms: &SearchTerms,
        candidates: &[Candidate],
    ) -> Result<Vec<Candidate>, EngineError> {
        if candidates.is_empty() {
            return Ok(Vec::new());
        }
        let line = encode(terms);
        let response = self.engine.query(&line, &self.cancel).await?;
        let pattern = Pattern::compile(&response)?;
        Ok(pattern.filter(candidates))
    }
}
