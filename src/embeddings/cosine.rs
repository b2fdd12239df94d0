// Cosine similarity between dense embedding vectors.
//
//   cos(a, b) = (a · b) / (|a| |b|)
//
// TF-IDF weights are non-negative, so results lie in [0, 1]. The result is
// clamped to that range.

/// Cosine similarity of two vectors of equal length.
///
/// Returns 0.0 when the lengths differ, when either vector is empty, or
/// when either has zero norm. Never fails.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    if a.is_empty() || a.len() != b.len() {
        return 0.0;
    }

    let mut dot = 0.0;
    let mut norm_a = 0.0;
    let mut norm_b = 0.0;
    for (x, y) in a.iter().zip(b) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    (dot / (norm_a.sqrt() * norm_b.sqrt())).clamp(0.0, 1.0)
}
