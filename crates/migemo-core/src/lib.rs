//! migemo-core: search core for migemo-search.
//!
//! This crate holds everything between the host's keystroke and the ordered
//! result list, except the engine process itself (see `migemo-engine`).
//!
//! # Pipeline
//!
//! ```text
//! terms ──► controller ──► encoder ──► Transliterator ──► pattern ──► merge ──► host
//!              │                                            ▲
//!              └────────────── catalog / previous set ──────┘
//! ```
//!
//! The controller is re-entered on every keystroke. It never talks to a
//! concrete process; it owns a boxed [`Transliterator`] so tests can swap in
//! a scripted engine.

pub mod catalog;
pub mod config;
pub mod controller;
pub mod encoder;
pub mod engine;
pub mod error;
pub mod literal;
pub mod merge;
pub mod pattern;
pub mod provider;
pub mod types;

pub use catalog::{Catalog, StaticCatalog};
pub use controller::{ScanPlan, SearchController, SearchState, MIN_QUERY_LENGTH};
pub use engine::Transliterator;
pub use error::EngineError;
pub use literal::LiteralProvider;
pub use provider::{MigemoProvider, SearchProvider};
pub use types::{Candidate, CandidateId, ResultSet, SearchTerms};
