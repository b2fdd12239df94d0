// System status display: corpus size, embedding dimension, active settings.

use crate::config::Config;
use crate::recommend::Recommender;

/// Display corpus and engine status to the terminal.
pub fn show(config: &Config, recommender: &Recommender<'_>) {
    let corpus = recommender.corpus();

    match &config.corpus_path {
        Some(path) => println!("Corpus: {} ({} artworks)", path.display(), corpus.len()),
        None => println!("Corpus: built-in ({} artworks)", corpus.len()),
    }

    if corpus.is_empty() {
        println!("  Corpus is empty; every recommendation will come back empty.");
        return;
    }

    let undated = corpus
        .records()
        .iter()
        .filter(|r| r.year.value().is_none())
        .count();
    if undated > 0 {
        println!("  {undated} artworks have no usable year (period factor scores 0.0)");
    }

    let index = recommender.index();
    println!(
        "Embeddings: {} vectors, {} dimensions (max {})",
        index.len(),
        index.dimension(),
        config.max_features
    );
    println!("Stop words: {}", config.stop_words.name());

    let calculator = recommender.calculator();
    println!("Weights: {}", calculator.weights());
    println!("Minimum score: {:.2}", calculator.weights().min_score);
    println!("Theme model: {}", calculator.theme_model().name());
}
