//! Host-facing search providers.
//!
//! A host drives any number of [`SearchProvider`]s with the same terms on
//! every keystroke. [`MigemoProvider`] is ours: it runs the controller and
//! then hides what a companion provider already shows.

use crate::controller::{SearchController, SearchState};
use crate::merge::merge;
use crate::types::{ResultSet, SearchTerms};
use async_trait::async_trait;

#[async_trait]
pub trait SearchProvider: Send {
    /// Stable id the host registers the provider under.
    fn id(&self) -> &str;

    async fn initial_results(&mut self, terms: &SearchTerms) -> ResultSet;

    async fn subsearch_results(&mut self, previous: &ResultSet, terms: &SearchTerms) -> ResultSet;

    /// The host cleared its search string.
    fn reset(&mut self) {}

    /// Release whatever the provider owns. Called once after unregistering.
    async fn dispose(&mut self) {}
}

pub const MIGEMO_PROVIDER_ID: &str = "migemo";

/// Transliterating provider layered over a companion provider.
///
/// The companion is consulted with the same strategy the controller picked
/// (full scan or narrowing) so both sides look at comparable inputs; while
/// the input is pending it is not consulted at all.
pub struct MigemoProvider {
    controller: SearchController,
    companion: Box<dyn SearchProvider>,
}

impl MigemoProvider {
    pub fn new(controller: SearchController, companion: Box<dyn SearchProvider>) -> Self {
        Self {
            controller,
            companion,
        }
    }

    pub fn controller(&self) -> &SearchController {
        &self.controller
    }
}

#[async_trait]
impl SearchProvider for MigemoProvider {
    fn id(&self) -> &str {
        MIGEMO_PROVIDER_ID
    }

    async fn initial_results(&mut self, terms: &SearchTerms) -> ResultSet {
        let own = self.controller.initial(terms).await;
        if own.pending {
            return own;
        }
        let other = self.companion.initial_results(terms).await;
        merge(own, &other.candidates)
    }

    async fn subsearch_results(&mut self, previous: &ResultSet, terms: &SearchTerms) -> ResultSet {
        let own = self.controller.subsearch(previous, terms).await;
        let other = match self.controller.state() {
            SearchState::Narrowing => self.companion.subsearch_results(previous, terms).await,
            SearchState::FullScan => self.companion.initial_results(terms).await,
            SearchState::Idle | SearchState::BelowThreshold => return own,
        };
        merge(own, &other.candidates)
    }

    fn reset(&mut self) {
        self.controller.reset();
        self.companion.reset();
    }

    async fn dispose(&mut self) {
        tracing::info!("disposing migemo provider");
        self.controller.shutdown().await;
        self.companion.dispose().await;
    }
}
