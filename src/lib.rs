//! migemo-search: romanized incremental application search.
//!
//! Type `fairu` and find `ファイル`: every keystroke is expanded by a cmigemo
//! worker process into a regular expression, which is matched against the
//! catalog of application names. This crate holds the host side (the search
//! system providers register with, and the enable/disable lifecycle); the
//! search logic lives in `migemo-core` and the process client in
//! `migemo-engine`.
//!
//! # Architecture
//!
//! ```text
//! SearchSystem ──► MigemoProvider ──► SearchController ──► ProcessTransliterator ──► cmigemo
//!      │                 │
//!      └──► LiteralProvider ◄── merge (companion)
//! ```
//!
//! Everything runs cooperatively on one tokio runtime; the engine answers
//! one query at a time.

pub mod extension;
pub mod shell;

pub use extension::MigemoExtension;
pub use shell::{ProviderResults, SearchSystem};
