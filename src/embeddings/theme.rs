// Theme models: TF-IDF cosine similarity between artwork stories.
//
// PairwiseTheme refits a two-document vectorizer for every comparison, so
// its scores are only meaningful relative to that one pair. CorpusTheme
// fits once over every story in the corpus, which keeps idf weights (and
// therefore scores) consistent across all comparisons.

use tracing::debug;

use super::cosine::cosine_similarity;
use super::tfidf::{TfIdfParams, TfIdfVectorizer};
use super::traits::ThemeModel;
use crate::corpus::Corpus;

/// Refits a vectorizer on just the two texts being compared.
#[derive(Debug, Clone, Default)]
pub struct PairwiseTheme {
    pub params: TfIdfParams,
}

impl ThemeModel for PairwiseTheme {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        if a.trim().is_empty() || b.trim().is_empty() {
            return 0.0;
        }
        let (_, rows) = TfIdfVectorizer::fit_transform(&[a, b], &self.params);
        cosine_similarity(&rows[0], &rows[1])
    }

    fn name(&self) -> &'static str {
        "pairwise"
    }
}

/// One vectorizer fit over every theme text in a corpus snapshot.
#[derive(Debug, Clone)]
pub struct CorpusTheme {
    vectorizer: TfIdfVectorizer,
}

impl CorpusTheme {
    /// Fit the shared theme vectorizer on the corpus stories.
    pub fn fit(corpus: &Corpus, params: &TfIdfParams) -> Self {
        let texts: Vec<&str> = corpus
            .records()
            .iter()
            .map(|r| r.theme_text())
            .filter(|t| !t.trim().is_empty())
            .collect();
        let vectorizer = TfIdfVectorizer::fit(&texts, params);
        debug!(
            texts = texts.len(),
            vocabulary = vectorizer.dimension(),
            "Fitted corpus theme model"
        );
        Self { vectorizer }
    }

    pub fn dimension(&self) -> usize {
        self.vectorizer.dimension()
    }
}

impl ThemeModel for CorpusTheme {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        if a.trim().is_empty() || b.trim().is_empty() {
            return 0.0;
        }
        cosine_similarity(&self.vectorizer.transform(a), &self.vectorizer.transform(b))
    }

    fn name(&self) -> &'static str {
        "corpus"
    }
}
