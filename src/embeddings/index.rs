// Corpus embedding index: one TF-IDF vector per artwork.
//
// Every record's attributes are concatenated into a synthetic document
// (see ArtworkRecord::feature_text) and a single vectorizer is fit over
// the whole corpus. Artwork-to-artwork similarity is then the cosine of
// their rows.
//
// The index is rebuilt from scratch for each corpus snapshot; there is no
// incremental update.

use std::collections::HashMap;

use tracing::{info, warn};

use super::cosine::cosine_similarity;
use super::tfidf::{TfIdfParams, TfIdfVectorizer};
use crate::corpus::Corpus;

/// Dense TF-IDF embeddings for every artwork in a corpus snapshot.
#[derive(Debug, Clone)]
pub struct EmbeddingIndex {
    vectorizer: TfIdfVectorizer,
    embeddings: HashMap<String, Vec<f64>>,
}

impl EmbeddingIndex {
    /// Fit the vectorizer over the corpus and embed every artwork.
    ///
    /// An empty corpus produces an empty index: zero dimensions, no vectors.
    pub fn build(corpus: &Corpus, params: &TfIdfParams) -> Self {
        if corpus.is_empty() {
            warn!("Building embeddings for an empty corpus; all similarities will be 0.0");
        }

        let documents: Vec<String> = corpus.records().iter().map(|r| r.feature_text()).collect();
        let (vectorizer, rows) = TfIdfVectorizer::fit_transform(&documents, params);

        let embeddings: HashMap<String, Vec<f64>> = corpus
            .records()
            .iter()
            .zip(rows)
            .map(|(record, row)| (record.title.clone(), row))
            .collect();

        info!(
            artworks = embeddings.len(),
            dimension = vectorizer.dimension(),
            "Built artwork embeddings"
        );

        Self {
            vectorizer,
            embeddings,
        }
    }

    /// The embedding for a title, if the title is in the snapshot.
    pub fn embedding(&self, title: &str) -> Option<&[f64]> {
        self.embeddings.get(title).map(Vec::as_slice)
    }

    /// Cosine similarity of two artworks' embeddings.
    ///
    /// Returns 0.0 if either title is unknown.
    pub fn similarity(&self, a: &str, b: &str) -> f64 {
        match (self.embedding(a), self.embedding(b)) {
            (Some(ea), Some(eb)) => cosine_similarity(ea, eb),
            _ => 0.0,
        }
    }

    /// Embed arbitrary text against the fitted corpus vocabulary.
    pub fn embed_text(&self, text: &str) -> Vec<f64> {
        self.vectorizer.transform(text)
    }

    /// Vocabulary size, shared by every vector in the index.
    pub fn dimension(&self) -> usize {
        self.vectorizer.dimension()
    }

    pub fn len(&self) -> usize {
        self.embeddings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.embeddings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_artwork_embedded_with_same_dimension() {
        let corpus = Corpus::builtin();
        let index = EmbeddingIndex::build(&corpus, &TfIdfParams::default());
        assert_eq!(index.len(), corpus.len());
        for record in corpus.records() {
            let e = index.embedding(&record.title).unwrap();
            assert_eq!(e.len(), index.dimension());
        }
        assert!(index.dimension() <= 1000);
    }

    #[test]
    fn test_unknown_title_scores_zero() {
        let index = EmbeddingIndex::build(&Corpus::builtin(), &TfIdfParams::default());
        assert_eq!(index.similarity("Mona Lisa", "Not An Artwork"), 0.0);
        assert_eq!(index.similarity("Not An Artwork", "Mona Lisa"), 0.0);
    }

    #[test]
    fn test_self_similarity_is_one() {
        let index = EmbeddingIndex::build(&Corpus::builtin(), &TfIdfParams::default());
        let score = index.similarity("Guernica", "Guernica");
        assert!((score - 1.0).abs() < 1e-9, "got {score}");
    }

    #[test]
    fn test_empty_corpus_index() {
        let index = EmbeddingIndex::build(&Corpus::default(), &TfIdfParams::default());
        assert!(index.is_empty());
        assert_eq!(index.dimension(), 0);
        assert!(index.embed_text("melting clocks").is_empty());
    }
}
