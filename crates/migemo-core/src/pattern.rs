//! Pattern matcher: compiles one engine response into a reusable predicate.
//!
//! The engine emits a regular expression (an alternation of spellings). We
//! compile it once per query and search every candidate name with it,
//! unanchored and case-sensitive. Case variants are the engine's job.

use crate::error::EngineError;
use crate::types::Candidate;
use regex::Regex;

/// A compiled engine response. Valid for one query only.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
}

impl Pattern {
    /// Compile raw engine output. An empty line or a malformed expression is
    /// the engine breaking its contract and is reported as
    /// [`EngineError::Protocol`].
    pub fn compile(engine_output: &str) -> Result<Self, EngineError> {
        if engine_output.is_empty() {
            return Err(EngineError::Protocol("empty response line".to_string()));
        }
        let regex = Regex::new(engine_output).map_err(|e| {
            EngineError::Protocol(format!("cannot compile engine pattern: {e}"))
        })?;
        Ok(Self { regex })
    }

    pub fn is_match(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }

    /// Keep the candidates whose name matches, in their original order.
    pub fn filter<'a, I>(&self, candidates: I) -> Vec<Candidate>
    where
        I: IntoIterator<Item = &'a Candidate>,
    {
        candidates
            .into_iter()
            .filter(|c| self.is_match(&c.name))
            .cloned()
            .collect()
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}
