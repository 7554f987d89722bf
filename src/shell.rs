//! Search system: the host side of the provider contract.
//!
//! Providers are registered explicitly ([`SearchSystem::add_provider`]);
//! nothing patches the dispatch loop. On each keystroke the system decides
//! per provider between a fresh search and a subsearch over that provider's
//! previous results, the same way the desktop shell does:
//!
//! - new string extends the previous one → `subsearch_results(previous, …)`
//! - anything else → `initial_results(…)`
//! - empty string → every provider is reset

use migemo_core::{ResultSet, SearchProvider, SearchTerms};
use serde::Serialize;
use std::collections::HashMap;

/// One provider's answer for the current keystroke.
#[derive(Debug, Clone, Serialize)]
pub struct ProviderResults {
    pub provider: String,
    pub results: ResultSet,
}

#[derive(Default)]
pub struct SearchSystem {
    providers: Vec<Box<dyn SearchProvider>>,
    previous_text: Option<String>,
    previous_results: HashMap<String, ResultSet>,
}

impl SearchSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a provider. A provider with the same id is replaced and
    /// returned so the caller can dispose it.
    pub fn add_provider(
        &mut self,
        provider: Box<dyn SearchProvider>,
    ) -> Option<Box<dyn SearchProvider>> {
        let id = provider.id().to_string();
        tracing::info!(provider = %id, "search provider registered");
        self.previous_results.remove(&id);
        match self.providers.iter().position(|p| p.id() == id) {
            Some(i) => Some(std::mem::replace(&mut self.providers[i], provider)),
            None => {
                self.providers.push(provider);
                None
            }
        }
    }

    pub fn remove_provider(&mut self, id: &str) -> Option<Box<dyn SearchProvider>> {
        let i = self.providers.iter().position(|p| p.id() == id)?;
        tracing::info!(provider = %id, "search provider removed");
        self.previous_results.remove(id);
        Some(self.providers.remove(i))
    }

    pub fn has_provider(&self, id: &str) -> bool {
        self.providers.iter().any(|p| p.id() == id)
    }

    pub fn provider_ids(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.id()).collect()
    }

    /// Run every provider against `text`, in registration order.
    pub async fn update_search(&mut self, text: &str) -> Vec<ProviderResults> {
        let text = text.trim();
        let terms = SearchTerms::parse(text);

        if terms.is_empty() {
            self.reset();
            return Vec::new();
        }

        let refines = self
            .previous_text
            .as_deref()
            .is_some_and(|prev| !prev.is_empty() && text.starts_with(prev));

        let mut out = Vec::with_capacity(self.providers.len());
        for provider in &mut self.providers {
            let id = provider.id().to_string();
            let results = match self.previous_results.get(&id) {
                Some(previous) if refines => provider.subsearch_results(previous, &terms).await,
                _ => provider.initial_results(&terms).await,
            };
            self.previous_results.insert(id.clone(), results.clone());
            out.push(ProviderResults {
                provider: id,
                results,
            });
        }

        tracing::debug!(query = %terms, refines, providers = out.len(), "search updated");
        self.previous_text = Some(text.to_string());
        out
    }

    /// Forget the current search, as when the user clears the entry.
    pub fn reset(&mut self) {
        for provider in &mut self.providers {
            provider.reset();
        }
        self.previous_text = None;
        self.previous_results.clear();
    }
}
