//! migemo-engine: the cmigemo worker process behind the search core.
//!
//! [`ProcessTransliterator`] implements [`migemo_core::Transliterator`] over a
//! long-lived child process speaking cmigemo's quiet, non-echo line protocol.

pub mod process;

pub use process::ProcessTransliterator;
