use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::corpus::Corpus;
use crate::embeddings::stop_list::StopWordList;
use crate::embeddings::tfidf::TfIdfParams;
use crate::recommend::{EngineSettings, ThemeBackend};
use crate::scoring::similarity::SimilarityWeights;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Every
/// variable is optional; unset means the built-in default.
#[derive(Debug, Clone)]
pub struct Config {
    /// JSON corpus file (ARTSTORY_CORPUS_PATH). None means the built-in corpus.
    pub corpus_path: Option<PathBuf>,
    /// Vocabulary bound for the TF-IDF vectorizers (ARTSTORY_MAX_FEATURES)
    pub max_features: usize,
    /// Stop-word list for the TF-IDF analyzer (ARTSTORY_STOP_WORDS: "sklearn" or "extended")
    pub stop_words: StopWordList,
    /// Similarity weights and minimum score (ARTSTORY_WEIGHTS, ARTSTORY_MIN_SCORE)
    pub weights: SimilarityWeights,
    /// Which theme model to use (ARTSTORY_THEME_MODEL: "corpus" or "pairwise")
    pub theme_backend: ThemeBackend,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            corpus_path: None,
            max_features: TfIdfParams::default().max_features,
            stop_words: StopWordList::default(),
            weights: SimilarityWeights::default(),
            theme_backend: ThemeBackend::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Unset variables fall back to defaults. Set but malformed values are
    /// errors.
    pub fn load() -> Result<Self> {
        let corpus_path = env::var("ARTSTORY_CORPUS_PATH")
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let max_features = match env::var("ARTSTORY_MAX_FEATURES") {
            Ok(raw) => {
                let n: usize = raw
                    .trim()
                    .parse()
                    .with_context(|| format!("ARTSTORY_MAX_FEATURES is not a number: {raw:?}"))?;
                if n == 0 {
                    anyhow::bail!("ARTSTORY_MAX_FEATURES must be at least 1");
                }
                n
            }
            Err(_) => TfIdfParams::default().max_features,
        };

        let stop_words = match env::var("ARTSTORY_STOP_WORDS").as_deref() {
            Ok("extended") => StopWordList::Extended,
            Ok("sklearn") | Err(_) => StopWordList::Sklearn,
            Ok(other) => anyhow::bail!(
                "Unknown ARTSTORY_STOP_WORDS {other:?}. Use \"sklearn\" or \"extended\"."
            ),
        };

        let mut weights = match env::var("ARTSTORY_WEIGHTS") {
            Ok(raw) => raw
                .parse::<SimilarityWeights>()
                .context("Invalid ARTSTORY_WEIGHTS")?,
            Err(_) => SimilarityWeights::default(),
        };

        if let Ok(raw) = env::var("ARTSTORY_MIN_SCORE") {
            weights.min_score = raw
                .trim()
                .parse()
                .with_context(|| format!("ARTSTORY_MIN_SCORE is not a number: {raw:?}"))?;
            weights.validate().context("Invalid ARTSTORY_MIN_SCORE")?;
        }

        let theme_backend = match env::var("ARTSTORY_THEME_MODEL").as_deref() {
            Ok("pairwise") => ThemeBackend::Pairwise,
            Ok("corpus") | Err(_) => ThemeBackend::Corpus,
            Ok(other) => anyhow::bail!(
                "Unknown ARTSTORY_THEME_MODEL {other:?}. Use \"corpus\" or \"pairwise\"."
            ),
        };

        Ok(Self {
            corpus_path,
            max_features,
            stop_words,
            weights,
            theme_backend,
        })
    }

    /// Settings for building a recommender.
    pub fn engine_settings(&self) -> EngineSettings {
        EngineSettings {
            tfidf: TfIdfParams {
                max_features: self.max_features,
                stop_words: self.stop_words,
                ..TfIdfParams::default()
            },
            weights: self.weights.clone(),
            theme: self.theme_backend,
        }
    }

    /// Load the configured corpus: the JSON file if one is set, otherwise
    /// the built-in table.
    pub fn load_corpus(&self) -> Result<Corpus> {
        match &self.corpus_path {
            Some(path) => Corpus::from_json_file(path),
            None => Ok(Corpus::builtin()),
        }
    }
}
