// Theme model trait: swap-ready abstraction for the free-text factor.
//
// The theme factor can either refit a tiny vectorizer on each pair of
// texts or reuse one vectorizer fit on the whole corpus. Both sit behind
// this trait so the similarity calculator does not care which is in use.

/// Scores how close two free-text theme descriptions are.
pub trait ThemeModel: Send + Sync {
    /// Similarity of two texts in [0, 1]. Empty text on either side scores 0.0.
    fn similarity(&self, a: &str, b: &str) -> f64;

    /// Short name used in logs and status output.
    fn name(&self) -> &'static str;
}
