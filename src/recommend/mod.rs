// Recommender: ranks candidate artworks by similarity to a target.
//
// Two scorers are available over the same corpus snapshot:
//   - weighted multi-factor similarity (artist, period, movement, theme),
//     the default, with a minimum-score threshold and factor reasons
//   - cosine similarity of corpus TF-IDF embeddings, no threshold, with
//     attribute-overlap reasons
//
// The recommender only reads the corpus; it holds no mutable state and can
// be shared freely across threads.

pub mod catalogue;

use serde::Serialize;
use tracing::{debug, info};

use crate::corpus::models::ArtworkRecord;
use crate::corpus::Corpus;
use crate::embeddings::index::EmbeddingIndex;
use crate::embeddings::tfidf::TfIdfParams;
use crate::embeddings::theme::{CorpusTheme, PairwiseTheme};
use crate::embeddings::traits::ThemeModel;
use crate::scoring::reasons::{attribute_reasons, factor_reasons};
use crate::scoring::similarity::{
    combine, round3, FactorScores, SimilarityCalculator, SimilarityWeights,
};

/// Which theme model the weighted scorer uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeBackend {
    /// One vectorizer fit over every story in the corpus (default)
    #[default]
    Corpus,
    /// A fresh two-document vectorizer for every compared pair
    Pairwise,
}

/// Everything needed to build a recommender besides the corpus itself.
#[derive(Debug, Clone, Default)]
pub struct EngineSettings {
    pub tfidf: TfIdfParams,
    pub weights: SimilarityWeights,
    pub theme: ThemeBackend,
}

/// One ranked recommendation.
#[derive(Debug, Clone, Serialize)]
pub struct SimilarityResult<'a> {
    pub artwork: &'a ArtworkRecord,
    /// Similarity to the target, in [0, 1], rounded to 3 decimals
    pub score: f64,
    /// At most two reasons, strongest first
    pub reasons: Vec<String>,
}

impl SimilarityResult<'_> {
    /// The reasons joined for display, e.g. "Same artist + Same period".
    pub fn reason(&self) -> String {
        self.reasons.join(" + ")
    }
}

/// A full breakdown of how two artworks compare.
#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    pub factors: FactorScores,
    /// Weighted multi-factor score
    pub score: f64,
    /// Cosine similarity of the corpus embeddings
    pub embedding_score: f64,
    pub reasons: Vec<String>,
}

/// Ranks artworks from one corpus snapshot.
pub struct Recommender<'c> {
    corpus: &'c Corpus,
    index: EmbeddingIndex,
    calculator: SimilarityCalculator,
}

impl<'c> Recommender<'c> {
    /// Build the embedding index and theme model for `corpus`.
    pub fn new(corpus: &'c Corpus, settings: &EngineSettings) -> Self {
        let index = EmbeddingIndex::build(corpus, &settings.tfidf);
        let theme: Box<dyn ThemeModel> = match settings.theme {
            ThemeBackend::Corpus => Box::new(CorpusTheme::fit(corpus, &settings.tfidf)),
            ThemeBackend::Pairwise => Box::new(PairwiseTheme {
                params: settings.tfidf.clone(),
            }),
        };
        let calculator = SimilarityCalculator::new(settings.weights.clone(), theme);

        info!(
            artworks = corpus.len(),
            theme_model = calculator.theme_model().name(),
            "Recommender ready"
        );

        Self {
            corpus,
            index,
            calculator,
        }
    }

    pub fn corpus(&self) -> &'c Corpus {
        self.corpus
    }

    pub fn index(&self) -> &EmbeddingIndex {
        &self.index
    }

    pub fn calculator(&self) -> &SimilarityCalculator {
        &self.calculator
    }

    /// Rank `candidates` by weighted similarity to `target`.
    ///
    /// The target itself (same title) is never returned. Candidates at or
    /// below the minimum score are dropped. Equal scores keep their order
    /// in `candidates`.
    pub fn similar<'a>(
        &self,
        target: &ArtworkRecord,
        candidates: &'a [ArtworkRecord],
        limit: usize,
    ) -> Vec<SimilarityResult<'a>> {
        let min_score = self.calculator.weights().min_score;

        let results: Vec<SimilarityResult<'a>> = candidates
            .iter()
            .filter(|c| c.title != target.title)
            .filter_map(|candidate| {
                let factors = self.calculator.factors(target, candidate);
                let score = combine(&factors, self.calculator.weights());
                (score > min_score).then(|| SimilarityResult {
                    artwork: candidate,
                    score,
                    reasons: factor_reasons(target, candidate, &factors),
                })
            })
            .collect();

        let ranked = rank(results, limit);
        debug!(
            target = target.title.as_str(),
            candidates = candidates.len(),
            returned = ranked.len(),
            "Ranked by weighted similarity"
        );
        ranked
    }

    /// Rank the whole corpus against the artwork titled `title`.
    ///
    /// An unknown title yields an empty list.
    pub fn similar_by_title(&self, title: &str, limit: usize) -> Vec<SimilarityResult<'c>> {
        let corpus: &'c Corpus = self.corpus;
        match corpus.find(title) {
            Some(target) => self.similar(target, corpus.records(), limit),
            None => {
                debug!(title, "Target artwork not in corpus");
                Vec::new()
            }
        }
    }

    /// Rank the corpus by embedding cosine similarity to `title`.
    ///
    /// No threshold is applied. An unknown title yields an empty list.
    pub fn similar_by_embedding(&self, title: &str, limit: usize) -> Vec<SimilarityResult<'c>> {
        let corpus: &'c Corpus = self.corpus;
        let Some(target) = corpus.find(title) else {
            debug!(title, "Target artwork not in corpus");
            return Vec::new();
        };

        let results: Vec<SimilarityResult<'c>> = corpus
            .records()
            .iter()
            .filter(|c| c.title != target.title)
            .map(|candidate| SimilarityResult {
                artwork: candidate,
                score: round3(self.index.similarity(&target.title, &candidate.title)),
                reasons: attribute_reasons(target, candidate),
            })
            .collect();

        rank(results, limit)
    }

    /// Explain how two corpus artworks compare. `None` if either is unknown.
    pub fn compare(&self, a: &str, b: &str) -> Option<Comparison> {
        let a = self.corpus.find(a)?;
        let b = self.corpus.find(b)?;
        let factors = self.calculator.factors(a, b);
        Some(Comparison {
            factors,
            score: combine(&factors, self.calculator.weights()),
            embedding_score: round3(self.index.similarity(&a.title, &b.title)),
            reasons: factor_reasons(a, b, &factors),
        })
    }
}

/// Sort by score descending (stable, so ties keep their input order) and
/// keep the top `limit`.
fn rank<'a>(mut results: Vec<SimilarityResult<'a>>, limit: usize) -> Vec<SimilarityResult<'a>> {
    results.sort_by(|a, b| b.score.total_cmp(&a.score));
    results.truncate(limit);
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::models::Year;

    fn artwork(title: &str, artist: &str, year: i32, movement: &str) -> ArtworkRecord {
        ArtworkRecord {
            title: title.to_string(),
            artist: artist.to_string(),
            year: Year::from_int(year),
            movement: movement.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_ties_keep_candidate_order() {
        let corpus = Corpus::default();
        let recommender = Recommender::new(&corpus, &EngineSettings::default());
        let target = artwork("T", "Claude Monet", 1900, "Impressionism");
        let pool = vec![
            artwork("First", "Someone", 1905, "Impressionism"),
            artwork("Second", "Someone Else", 1905, "Impressionism"),
        ];
        let results = recommender.similar(&target, &pool, 10);
        let titles: Vec<&str> = results.iter().map(|r| r.artwork.title.as_str()).collect();
        assert_eq!(titles, vec!["First", "Second"]);
        assert_eq!(results[0].score, results[1].score);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let corpus = Corpus::default();
        let recommender = Recommender::new(&corpus, &EngineSettings::default());
        let target = artwork("T", "A", 1900, "");
        // Period only: 0.2 * 0.3 = 0.06, dropped
        let pool = vec![artwork("Far", "B", 1300, "")];
        assert!(recommender.similar(&target, &pool, 10).is_empty());
    }

    #[test]
    fn test_zero_limit() {
        let corpus = Corpus::builtin();
        let recommender = Recommender::new(&corpus, &EngineSettings::default());
        assert!(recommender.similar_by_title("Mona Lisa", 0).is_empty());
    }

    #[test]
    fn test_reason_join() {
        let record = ArtworkRecord::default();
        let result = SimilarityResult {
            artwork: &record,
            score: 0.5,
            reasons: vec!["Same artist".to_string(), "Same period".to_string()],
        };
        assert_eq!(result.reason(), "Same artist + Same period");
    }
}
