// Similarity scoring: per-factor functions, the weighted formula, and
// the reasons shown next to each recommendation.

pub mod factors;
pub mod reasons;
pub mod similarity;
