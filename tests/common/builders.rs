//! Test builders: ergonomic constructors for catalogs, terms and result sets.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use migemo_core::{
    Candidate, Catalog, ResultSet, SearchController, SearchTerms, StaticCatalog, Transliterator,
};
use std::sync::Arc;

// ---------------------------------------------------------------------------
// CatalogBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for catalog fixtures.
///
/// ```rust
/// let catalog = CatalogBuilder::new()
///     .app("1", "Files")
///     .apps(CATALOG_JAPANESE)
///     .build();
/// ```
#[derive(Default)]
pub struct CatalogBuilder {
    candidates: Vec<Candidate>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn app(mut self, id: &str, name: &str) -> Self {
        self.candidates.push(Candidate::new(id, name));
        self
    }

    pub fn apps(mut self, table: &[(&str, &str)]) -> Self {
        self.candidates.extend(crate::common::fixtures::candidates(table));
        self
    }

    /// `n` synthetic applications named `App 0`, `App 1`, …
    pub fn synthetic(mut self, n: usize) -> Self {
        self.candidates
            .extend((0..n).map(|i| Candidate::new(format!("app-{i}"), format!("App {i}"))));
        self
    }

    pub fn build(self) -> Arc<dyn Catalog> {
        Arc::new(StaticCatalog::new(self.candidates))
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// Terms as the host would split them from the search entry.
pub fn terms(text: &str) -> SearchTerms {
    SearchTerms::parse(text)
}

/// A non-pending result set holding `names`, ids taken from position.
pub fn result_set(names: &[&str]) -> ResultSet {
    ResultSet::from_candidates(
        names
            .iter()
            .enumerate()
            .map(|(i, n)| Candidate::new(i.to_string(), *n))
            .collect(),
    )
}

pub fn controller(
    engine: impl Transliterator + 'static,
    catalog: Arc<dyn Catalog>,
) -> SearchController {
    SearchController::new(Box::new(engine), catalog)
}

/// A current-thread runtime for driving async code from proptest bodies.
pub fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("test runtime")
}
