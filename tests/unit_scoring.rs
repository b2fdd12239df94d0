// Unit tests for the similarity factors and the weighted formula.
//
// Tests isolated pure functions: artist alias matching, period bucket
// boundaries, movement groups, weight parsing, and score combination.

use artstory::scoring::factors::{artist_similarity, movement_similarity, period_similarity};
use artstory::scoring::reasons::period_category;
use artstory::scoring::similarity::{combine, round3, FactorScores, SimilarityWeights};

// ============================================================
// artist_similarity
// ============================================================

#[test]
fn artist_identical_names() {
    assert_eq!(artist_similarity("Leonardo da Vinci", "Leonardo da Vinci"), 1.0);
}

#[test]
fn artist_alias_in_either_order() {
    assert_eq!(artist_similarity("da Vinci", "Leonardo da Vinci"), 0.9);
    assert_eq!(artist_similarity("Leonardo da Vinci", "da Vinci"), 0.9);
    assert_eq!(artist_similarity("Leonardo", "Vinci"), 0.9);
}

#[test]
fn artist_accented_alias() {
    assert_eq!(artist_similarity("Salvador Dalí", "Dali"), 0.9);
}

#[test]
fn artist_no_fuzzy_matching() {
    // Shared surname fragments are not enough outside the alias table
    assert_eq!(artist_similarity("Vincent van Gogh", "Theo van Gogh"), 0.0);
    assert_eq!(artist_similarity("Claude Monet", "Édouard Manet"), 0.0);
}

#[test]
fn artist_aliases_from_different_groups() {
    assert_eq!(artist_similarity("Picasso", "Monet"), 0.0);
}

// ============================================================
// period_similarity: bucket boundaries
// ============================================================

#[test]
fn period_within_decade() {
    assert_eq!(period_similarity(Some(1503), Some(1498)), 0.9);
}

#[test]
fn period_exact_boundary_ten() {
    assert_eq!(period_similarity(Some(1500), Some(1510)), 0.9);
    assert_eq!(period_similarity(Some(1500), Some(1511)), 0.7);
}

#[test]
fn period_exact_boundary_hundred() {
    assert_eq!(period_similarity(Some(1500), Some(1600)), 0.7);
    assert_eq!(period_similarity(Some(1500), Some(1601)), 0.3);
}

#[test]
fn period_exact_boundary_thousand() {
    assert_eq!(period_similarity(Some(900), Some(1900)), 0.3);
    assert_eq!(period_similarity(Some(900), Some(1901)), 0.1);
}

#[test]
fn period_mona_lisa_and_guernica() {
    // Gap 434: beyond a century, within a millennium
    assert_eq!(period_similarity(Some(1503), Some(1937)), 0.3);
}

#[test]
fn period_missing_year() {
    assert_eq!(period_similarity(None, Some(1937)), 0.0);
    assert_eq!(period_similarity(Some(1503), None), 0.0);
    assert_eq!(period_similarity(None, None), 0.0);
}

#[test]
fn period_is_symmetric() {
    for (a, b) in [(1503, 1937), (1888, 1889), (400, 2000)] {
        assert_eq!(
            period_similarity(Some(a), Some(b)),
            period_similarity(Some(b), Some(a))
        );
    }
}

// ============================================================
// movement_similarity
// ============================================================

#[test]
fn movement_unrelated_groups() {
    assert_eq!(movement_similarity("impressionism", "cubism"), 0.0);
}

#[test]
fn movement_each_related_group() {
    assert_eq!(movement_similarity("Impressionism", "Neo-Impressionism"), 0.8);
    assert_eq!(movement_similarity("Cubism", "Futurism"), 0.8);
    assert_eq!(movement_similarity("Dada", "Expressionism"), 0.8);
    assert_eq!(movement_similarity("Renaissance", "Baroque"), 0.8);
    assert_eq!(movement_similarity("Contemporary", "Postmodernism"), 0.8);
}

#[test]
fn movement_case_insensitive_match() {
    assert_eq!(movement_similarity("Post-impressionism", "POST-IMPRESSIONISM"), 1.0);
}

// ============================================================
// combine: weighted formula
// ============================================================

#[test]
fn combine_uses_default_weights() {
    let factors = FactorScores {
        artist: 1.0,
        period: 1.0,
        movement: 1.0,
        theme: 1.0,
    };
    let score = combine(&factors, &SimilarityWeights::default());
    assert!((score - 1.0).abs() < 1e-9, "All factors at 1.0 should score 1.0, got {score}");
}

#[test]
fn combine_artist_only() {
    let factors = FactorScores {
        artist: 1.0,
        ..Default::default()
    };
    assert_eq!(combine(&factors, &SimilarityWeights::default()), 0.4);
}

#[test]
fn combine_custom_weights_zero_produces_zero() {
    let weights = SimilarityWeights {
        artist: 0.0,
        period: 0.0,
        movement: 0.0,
        theme: 0.0,
        min_score: 0.1,
    };
    let factors = FactorScores {
        artist: 1.0,
        period: 0.9,
        movement: 1.0,
        theme: 1.0,
    };
    assert_eq!(combine(&factors, &weights), 0.0);
}

#[test]
fn round3_nearest() {
    assert_eq!(round3(0.1236), 0.124);
    assert_eq!(round3(0.1234), 0.123);
}

// ============================================================
// SimilarityWeights parsing
// ============================================================

#[test]
fn weights_parse_with_spaces() {
    let w: SimilarityWeights = " 0.4 , 0.2 , 0.25 , 0.15 ".parse().unwrap();
    assert_eq!(w, SimilarityWeights::default());
}

#[test]
fn weights_display() {
    let text = SimilarityWeights::default().to_string();
    assert_eq!(text, "artist 0.40, period 0.20, movement 0.25, theme 0.15");
}

#[test]
fn weights_min_score_out_of_range() {
    let w = SimilarityWeights {
        min_score: 1.5,
        ..Default::default()
    };
    assert!(w.validate().is_err());
}

// ============================================================
// period_category
// ============================================================

#[test]
fn period_category_boundaries() {
    assert_eq!(period_category(10), "Same decade");
    assert_eq!(period_category(11), "Same period");
    assert_eq!(period_category(51), "Same century");
    assert_eq!(period_category(1000), "Different period");
}
