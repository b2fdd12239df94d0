// Human-readable reasons attached to ranked recommendations.
//
// Reasons are checked in a fixed priority order and at most two are kept,
// so the strongest explanation always comes first.

use std::collections::BTreeSet;

use super::similarity::FactorScores;
use crate::corpus::models::ArtworkRecord;

/// Maximum number of reasons attached to one result.
pub const MAX_REASONS: usize = 2;

/// Years within this gap count as "the same period" for reasons.
pub const SAME_PERIOD_YEARS: u32 = 50;

/// Theme similarity above this counts as "a similar theme".
pub const THEME_REASON_THRESHOLD: f64 = 0.3;

fn same_text(a: &str, b: &str) -> bool {
    let a = a.trim();
    !a.is_empty() && a.to_lowercase() == b.trim().to_lowercase()
}

/// Reasons for the weighted multi-factor score.
///
/// Priority: same artist, same period (≤ 50 years), same movement, similar
/// theme. `factors` supplies the already computed theme score so the theme
/// model is not run twice.
pub fn factor_reasons(
    target: &ArtworkRecord,
    candidate: &ArtworkRecord,
    factors: &FactorScores,
) -> Vec<String> {
    let mut reasons = Vec::new();

    if same_text(&target.artist, &candidate.artist) {
        reasons.push("Same artist".to_string());
    }

    if let (Some(a), Some(b)) = (target.year.value(), candidate.year.value()) {
        if a.abs_diff(b) <= SAME_PERIOD_YEARS {
            reasons.push("Same period".to_string());
        }
    }

    if same_text(&target.movement, &candidate.movement) {
        reasons.push("Same art movement".to_string());
    }

    if factors.theme > THEME_REASON_THRESHOLD {
        reasons.push("Similar theme".to_string());
    }

    reasons.truncate(MAX_REASONS);
    reasons
}

/// Reasons for the embedding score, based on shared attributes.
///
/// Priority: same artist, same movement, same technique, two or more
/// shared colors, any shared subject. Falls back to a generic suggestion
/// so an embedding result always carries a reason.
pub fn attribute_reasons(target: &ArtworkRecord, candidate: &ArtworkRecord) -> Vec<String> {
    let mut reasons = Vec::new();

    if same_text(&target.artist, &candidate.artist) {
        reasons.push("Same artist".to_string());
    }

    if same_text(&target.movement, &candidate.movement) {
        reasons.push(format!("Same art movement ({})", target.movement));
    }

    if same_text(&target.technique, &candidate.technique) {
        reasons.push(format!("Similar technique ({})", target.technique));
    }

    let common_colors = shared_tags(&target.colors, &candidate.colors);
    if common_colors.len() >= 2 {
        let shown: Vec<&str> = common_colors.iter().take(2).map(String::as_str).collect();
        reasons.push(format!("Similar color palette ({})", shown.join(", ")));
    }

    let common_subjects = shared_tags(&target.subjects, &candidate.subjects);
    if !common_subjects.is_empty() {
        let shown: Vec<&str> = common_subjects.iter().map(String::as_str).collect();
        reasons.push(format!("Similar subjects ({})", shown.join(", ")));
    }

    if reasons.is_empty() {
        reasons.push("General artwork suggestion".to_string());
    }

    reasons.truncate(MAX_REASONS);
    reasons
}

/// Case-insensitive intersection of two tag lists, in sorted order.
fn shared_tags(a: &[String], b: &[String]) -> BTreeSet<String> {
    let a: BTreeSet<String> = a.iter().map(|t| t.trim().to_lowercase()).collect();
    b.iter()
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty() && a.contains(t))
        .collect()
}

/// Describe a year gap in words.
pub fn period_category(year_gap: u32) -> &'static str {
    match year_gap {
        0..=10 => "Same decade",
        11..=50 => "Same period",
        51..=100 => "Same century",
        _ => "Different period",
    }
}
