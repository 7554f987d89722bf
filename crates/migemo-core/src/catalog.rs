//! Item catalog: the source of every candidate a full scan looks at.
//!
//! The real catalog belongs to the host (installed applications). This crate
//! only needs [`Catalog::all`]; [`StaticCatalog`] covers tests and the CLI.

use crate::types::Candidate;
use anyhow::Context;
use std::path::Path;

pub trait Catalog: Send + Sync {
    /// Every candidate, in the catalog's display order.
    fn all(&self) -> Vec<Candidate>;
}

/// A fixed list of candidates.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    candidates: Vec<Candidate>,
}

impl StaticCatalog {
    pub fn new(candidates: Vec<Candidate>) -> Self {
        Self { candidates }
    }

    /// Load a catalog file: one item per line, either `id<TAB>name` or a bare
    /// name whose id becomes its 1-based line number. Blank lines and lines
    /// starting with `#` are skipped.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading catalog {}", path.display()))?;
        Ok(Self::parse(&text))
    }

    pub fn parse(text: &str) -> Self {
        let candidates = text
            .lines()
            .enumerate()
            .filter_map(|(i, line)| {
                let line = line.trim_end_matches('\r');
                if line.trim().is_empty() || line.starts_with('#') {
                    return None;
                }
                Some(match line.split_once('\t') {
                    Some((id, name)) => Candidate::new(id.trim(), name.trim()),
                    None => Candidate::new((i + 1).to_string(), line.trim()),
                })
            })
            .collect();
        Self { candidates }
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

impl Catalog for StaticCatalog {
    fn all(&self) -> Vec<Candidate> {
        self.candidates.clone()
    }
}

impl FromIterator<Candidate> for StaticCatalog {
    fn from_iter<I: IntoIterator<Item = Candidate>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
