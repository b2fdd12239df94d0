// Corpus: the immutable set of artworks the recommender compares against.
//
// A corpus is built once at startup (from the built-in table or a JSON
// file) and then only read. Records keep their insertion order, which is
// also the order used to break ties between equal scores.

pub mod builtin;
pub mod models;

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use models::ArtworkRecord;

/// An immutable snapshot of known artworks, keyed by title.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    records: Vec<ArtworkRecord>,
    by_title: HashMap<String, usize>,
}

impl Corpus {
    /// The built-in dozen-artwork corpus.
    pub fn builtin() -> Self {
        Self::from_records(builtin::records()).unwrap_or_else(|e| {
            warn!(error = %e, "Built-in corpus is invalid, falling back to an empty corpus");
            Self::default()
        })
    }

    /// Build a corpus from records, rejecting empty or duplicate titles.
    pub fn from_records(records: Vec<ArtworkRecord>) -> Result<Self> {
        let mut by_title = HashMap::with_capacity(records.len());
        for (i, record) in records.iter().enumerate() {
            if record.title.trim().is_empty() {
                anyhow::bail!("Artwork at position {i} has no title");
            }
            if by_title.insert(record.title.clone(), i).is_some() {
                anyhow::bail!("Duplicate artwork title in corpus: {:?}", record.title);
            }
        }

        debug!(artworks = records.len(), "Built corpus");
        Ok(Self { records, by_title })
    }

    /// Parse a corpus from a JSON array of artwork records.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let records: Vec<ArtworkRecord> =
            serde_json::from_str(json).context("Corpus JSON is not an array of artwork records")?;
        Self::from_records(records)
    }

    /// Load a corpus from a JSON file on disk.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read corpus file {}", path.display()))?;
        let corpus = Self::from_json_str(&json)
            .with_context(|| format!("Failed to load corpus from {}", path.display()))?;
        info!(
            path = %path.display(),
            artworks = corpus.len(),
            "Loaded corpus file"
        );
        Ok(corpus)
    }

    /// Look up an artwork by exact title.
    pub fn get(&self, title: &str) -> Option<&ArtworkRecord> {
        self.by_title.get(title).map(|&i| &self.records[i])
    }

    /// Look up an artwork by title, ignoring case and surrounding whitespace.
    ///
    /// Tries the exact title first, so exact matches never pay for the scan.
    pub fn find(&self, title: &str) -> Option<&ArtworkRecord> {
        if let Some(record) = self.get(title) {
            return Some(record);
        }
        let wanted = title.trim().to_lowercase();
        self.records
            .iter()
            .find(|r| r.title.to_lowercase() == wanted)
    }

    pub fn contains(&self, title: &str) -> bool {
        self.by_title.contains_key(title)
    }

    /// All records, in insertion order.
    pub fn records(&self) -> &[ArtworkRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
