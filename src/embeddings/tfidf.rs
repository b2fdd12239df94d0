// TF-IDF vectorizer: turns short artwork texts into dense weighted vectors.
//
// Each text is a separate document for IDF computation: words shared by
// every artwork ("oil", "canvas") get downweighted, words distinctive to a
// few artworks get boosted.
//
// Pipeline per document:
//   lowercase → split into alphanumeric tokens (≥ 2 chars) → drop English
//   stop words (scikit-learn's list by default) → emit unigrams and bigrams
//   of the remaining tokens.
//
// Weights are raw term counts times the smoothed idf
// `ln((1 + n) / (1 + df)) + 1`, and every row is L2-normalized so a dot
// product between two rows is their cosine similarity.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use super::stop_list::StopWordList;

/// Vectorizer settings.
#[derive(Debug, Clone, PartialEq)]
pub struct TfIdfParams {
    /// Upper bound on vocabulary size; the most frequent terms are kept.
    pub max_features: usize,
    /// Longest n-gram to emit (1 = unigrams only, 2 = unigrams + bigrams)
    pub max_ngram: usize,
    /// Stop words removed before n-grams are built
    pub stop_words: StopWordList,
}

impl Default for TfIdfParams {
    fn default() -> Self {
        Self {
            max_features: 1000,
            max_ngram: 2,
            stop_words: StopWordList::default(),
        }
    }
}

/// A fitted TF-IDF vectorizer: vocabulary plus per-term idf weights.
///
/// Fitting is not incremental. A new document set means a new vectorizer.
#[derive(Debug, Clone)]
pub struct TfIdfVectorizer {
    params: TfIdfParams,
    stop_words: HashSet<String>,
    /// term → column index (columns are in alphabetical term order)
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
}

impl TfIdfVectorizer {
    /// Fit a vectorizer over all `documents` at once.
    ///
    /// An empty document set (or one made only of stop words) yields a
    /// vectorizer with an empty vocabulary whose vectors have length zero.
    pub fn fit<S: AsRef<str>>(documents: &[S], params: &TfIdfParams) -> Self {
        let stop_words = params.stop_words.words();
        let analyzed: Vec<Vec<String>> = documents
            .iter()
            .map(|d| analyze(d.as_ref(), &stop_words, params.max_ngram))
            .collect();

        // Corpus-wide term counts and document frequencies
        let mut term_counts: HashMap<&str, usize> = HashMap::new();
        let mut doc_freq: HashMap<&str, usize> = HashMap::new();
        for terms in &analyzed {
            let mut seen: HashSet<&str> = HashSet::new();
            for term in terms {
                *term_counts.entry(term.as_str()).or_insert(0) += 1;
                if seen.insert(term.as_str()) {
                    *doc_freq.entry(term.as_str()).or_insert(0) += 1;
                }
            }
        }

        // Keep the most frequent terms, ties broken alphabetically
        let mut ranked: Vec<(&str, usize)> = term_counts.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked.truncate(params.max_features);

        let mut kept: Vec<&str> = ranked.into_iter().map(|(term, _)| term).collect();
        kept.sort_unstable();

        let n_docs = documents.len() as f64;
        let idf: Vec<f64> = kept
            .iter()
            .map(|term| {
                let df = doc_freq.get(term).copied().unwrap_or(0) as f64;
                ((1.0 + n_docs) / (1.0 + df)).ln() + 1.0
            })
            .collect();

        let vocabulary: HashMap<String, usize> = kept
            .into_iter()
            .enumerate()
            .map(|(i, term)| (term.to_string(), i))
            .collect();

        debug!(
            documents = documents.len(),
            vocabulary = vocabulary.len(),
            "Fitted TF-IDF vectorizer"
        );

        Self {
            params: params.clone(),
            stop_words,
            vocabulary,
            idf,
        }
    }

    /// Fit on `documents` and return the vectorizer with one row per document.
    pub fn fit_transform<S: AsRef<str>>(
        documents: &[S],
        params: &TfIdfParams,
    ) -> (Self, Vec<Vec<f64>>) {
        let vectorizer = Self::fit(documents, params);
        let rows = documents
            .iter()
            .map(|d| vectorizer.transform(d.as_ref()))
            .collect();
        (vectorizer, rows)
    }

    /// Vectorize a document against the fitted vocabulary.
    ///
    /// Terms outside the vocabulary are ignored. A document with no known
    /// terms maps to the zero vector.
    pub fn transform(&self, document: &str) -> Vec<f64> {
        let mut row = vec![0.0; self.vocabulary.len()];
        for term in analyze(document, &self.stop_words, self.params.max_ngram) {
            if let Some(&col) = self.vocabulary.get(&term) {
                row[col] += 1.0;
            }
        }

        for (value, idf) in row.iter_mut().zip(&self.idf) {
            *value *= idf;
        }

        let norm = row.iter().map(|v| v * v).sum::<f64>().sqrt();
        if norm > 0.0 {
            for value in &mut row {
                *value /= norm;
            }
        }
        row
    }

    /// Number of columns in every vector this vectorizer produces.
    pub fn dimension(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn contains_term(&self, term: &str) -> bool {
        self.vocabulary.contains_key(term)
    }
}

/// Split text into lowercase alphanumeric tokens of at least two characters.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|token| token.chars().count() >= 2)
        .map(str::to_string)
        .collect()
}

/// Tokenize, remove stop words, and emit n-grams up to `max_ngram`.
fn analyze(text: &str, stop_words: &HashSet<String>, max_ngram: usize) -> Vec<String> {
    let tokens: Vec<String> = tokenize(text)
        .into_iter()
        .filter(|t| !stop_words.contains(t))
        .collect();

    let mut terms = tokens.clone();
    for n in 2..=max_ngram.max(1) {
        terms.extend(tokens.windows(n).map(|w| w.join(" ")));
    }
    terms
}
