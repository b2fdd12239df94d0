// Combined similarity score formula.
//
// The overall score is a weighted sum of four independent factors:
//
//   score = 0.4·artist + 0.2·period + 0.25·movement + 0.15·theme
//
// rounded to 3 decimals. Artist carries the most weight because "more by
// the same painter" is the recommendation people expect first.

use std::fmt;
use std::str::FromStr;

use anyhow::Result;
use serde::Serialize;

use super::factors::{artist_similarity, movement_similarity, period_similarity};
use crate::corpus::models::ArtworkRecord;
use crate::embeddings::traits::ThemeModel;

/// Configurable weights for the similarity formula.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityWeights {
    /// Weight of the artist factor (default 0.4)
    pub artist: f64,
    /// Weight of the period factor (default 0.2)
    pub period: f64,
    /// Weight of the movement factor (default 0.25)
    pub movement: f64,
    /// Weight of the theme factor (default 0.15)
    pub theme: f64,
    /// Candidates scoring at or below this are dropped by the ranker (default 0.1)
    pub min_score: f64,
}

impl Default for SimilarityWeights {
    fn default() -> Self {
        Self {
            artist: 0.4,
            period: 0.2,
            movement: 0.25,
            theme: 0.15,
            min_score: 0.1,
        }
    }
}

impl SimilarityWeights {
    /// Check the weights can only produce scores in [0, 1].
    pub fn validate(&self) -> Result<()> {
        let weights = [self.artist, self.period, self.movement, self.theme];
        if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
            anyhow::bail!("Similarity weights must be finite and non-negative: {}", self);
        }
        let total: f64 = weights.iter().sum();
        if total > 1.0 + 1e-9 {
            anyhow::bail!("Similarity weights must sum to at most 1.0, got {total:.3} ({})", self);
        }
        if !(0.0..=1.0).contains(&self.min_score) {
            anyhow::bail!("Minimum score must be within [0, 1], got {}", self.min_score);
        }
        Ok(())
    }
}

/// Parses `artist,period,movement,theme`, keeping the default minimum score.
impl FromStr for SimilarityWeights {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<f64> = s
            .split(',')
            .map(|p| {
                p.trim()
                    .parse::<f64>()
                    .map_err(|e| anyhow::anyhow!("Invalid weight {:?}: {e}", p.trim()))
            })
            .collect::<Result<_>>()?;

        let [artist, period, movement, theme] = parts[..] else {
            anyhow::bail!(
                "Expected four comma-separated weights (artist,period,movement,theme), got {}",
                parts.len()
            );
        };

        let weights = Self {
            artist,
            period,
            movement,
            theme,
            ..Self::default()
        };
        weights.validate()?;
        Ok(weights)
    }
}

impl fmt::Display for SimilarityWeights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "artist {:.2}, period {:.2}, movement {:.2}, theme {:.2}",
            self.artist, self.period, self.movement, self.theme
        )
    }
}

/// The four factor scores for one pair of artworks, each in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct FactorScores {
    pub artist: f64,
    pub period: f64,
    pub movement: f64,
    pub theme: f64,
}

/// Round to 3 decimals, the precision scores are reported at.
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Combine factor scores into the overall similarity.
///
/// Returns a score from 0.0 to 1.0, rounded to 3 decimals.
pub fn combine(factors: &FactorScores, weights: &SimilarityWeights) -> f64 {
    let score = factors.artist * weights.artist
        + factors.period * weights.period
        + factors.movement * weights.movement
        + factors.theme * weights.theme;
    round3(score.clamp(0.0, 1.0))
}

/// Scores pairs of artworks with the weighted multi-factor formula.
pub struct SimilarityCalculator {
    weights: SimilarityWeights,
    theme: Box<dyn ThemeModel>,
}

impl SimilarityCalculator {
    pub fn new(weights: SimilarityWeights, theme: Box<dyn ThemeModel>) -> Self {
        Self { weights, theme }
    }

    pub fn weights(&self) -> &SimilarityWeights {
        &self.weights
    }

    pub fn theme_model(&self) -> &dyn ThemeModel {
        self.theme.as_ref()
    }

    /// Score every factor for a pair. Missing data scores 0.0.
    pub fn factors(&self, a: &ArtworkRecord, b: &ArtworkRecord) -> FactorScores {
        FactorScores {
            artist: artist_similarity(&a.artist, &b.artist),
            period: period_similarity(a.year.value(), b.year.value()),
            movement: movement_similarity(&a.movement, &b.movement),
            theme: self.theme.similarity(a.theme_text(), b.theme_text()),
        }
    }

    /// Overall weighted similarity of a pair.
    pub fn similarity(&self, a: &ArtworkRecord, b: &ArtworkRecord) -> f64 {
        combine(&self.factors(a, b), &self.weights)
    }
}
