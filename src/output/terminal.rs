// Colored terminal output for rankings, lookups and comparisons.
//
// main.rs delegates all human-facing formatting here.

use colored::Colorize;

use crate::corpus::models::ArtworkRecord;
use crate::recommend::catalogue::ExplorationPick;
use crate::recommend::{Comparison, SimilarityResult};

/// Display a ranked list of similar artworks.
pub fn display_similar(target: &str, results: &[SimilarityResult<'_>]) {
    if results.is_empty() {
        println!("No sufficiently similar artworks found for \"{target}\".");
        return;
    }

    println!(
        "\n{}",
        format!("=== Similar to \"{}\" ({} results) ===", target, results.len()).bold()
    );
    println!();

    println!(
        "  {:>4}  {:<32} {:<24} {:>6}  {}",
        "Rank".dimmed(),
        "Title".dimmed(),
        "Artist".dimmed(),
        "Score".dimmed(),
        "Why".dimmed(),
    );
    println!("  {}", "-".repeat(90).dimmed());

    for (i, result) in results.iter().enumerate() {
        println!(
            "  {:>4}. {:<32} {:<24} {}  {}",
            i + 1,
            super::truncate_chars(&result.artwork.title, 30),
            super::truncate_chars(&result.artwork.artist, 22),
            colorize_score(result.score),
            result.reason().dimmed(),
        );
    }
    println!();
}

/// Display a plain artwork list (artist, period and movement lookups).
pub fn display_artworks(heading: &str, artworks: &[&ArtworkRecord]) {
    if artworks.is_empty() {
        println!("No artworks found for {heading}.");
        return;
    }

    println!(
        "\n{}",
        format!("=== {} ({} artworks) ===", heading, artworks.len()).bold()
    );
    println!();

    for artwork in artworks {
        println!(
            "  {:<32} {:<24} {:>10}  {}",
            super::truncate_chars(&artwork.title, 30).bold(),
            super::truncate_chars(&artwork.artist, 22),
            artwork.year.to_string(),
            artwork.movement.dimmed(),
        );
        if !artwork.story.is_empty() {
            println!("      {}", super::truncate_chars(&artwork.story, 100).dimmed());
        }
    }
    println!();
}

/// Display the exploration picks with their era labels.
pub fn display_exploration(picks: &[ExplorationPick<'_>]) {
    if picks.is_empty() {
        println!("Nothing to explore: the corpus has no dated artworks.");
        return;
    }

    println!("\n{}", format!("=== Explore ({} picks) ===", picks.len()).bold());
    println!();
    for pick in picks {
        println!(
            "  {:<32} {:>10}  {:<20} {}",
            super::truncate_chars(&pick.artwork.title, 30).bold(),
            pick.artwork.year.to_string(),
            pick.artwork.movement,
            pick.label.bright_blue(),
        );
    }
    println!();
}

/// Display a factor-by-factor comparison of two artworks.
pub fn display_comparison(a: &ArtworkRecord, b: &ArtworkRecord, comparison: &Comparison) {
    println!(
        "\n{}",
        format!("=== \"{}\" vs \"{}\" ===", a.title, b.title).bold()
    );
    println!();

    let rows = [
        ("Artist", comparison.factors.artist, &a.artist, &b.artist),
        ("Movement", comparison.factors.movement, &a.movement, &b.movement),
    ];
    for (label, score, left, right) in rows {
        println!("  {:<10} {}  {} / {}", label, bar(score), left, right);
    }
    println!(
        "  {:<10} {}  {} / {}",
        "Period",
        bar(comparison.factors.period),
        a.year,
        b.year
    );
    println!("  {:<10} {}", "Theme", bar(comparison.factors.theme));
    println!();
    println!("  Weighted score:  {}", colorize_score(comparison.score));
    println!("  Embedding score: {}", colorize_score(comparison.embedding_score));
    if !comparison.reasons.is_empty() {
        println!("  Reasons: {}", comparison.reasons.join(" + ").dimmed());
    }
    println!();
}

/// Render a [0, 1] value as a fixed-width bar.
fn bar(value: f64) -> String {
    let width: usize = 20;
    let filled = (value.clamp(0.0, 1.0) * width as f64).round() as usize;
    format!(
        "[{}{}] {:.2}",
        "=".repeat(filled),
        " ".repeat(width - filled),
        value
    )
}

/// Colorize a similarity score by strength.
fn colorize_score(score: f64) -> colored::ColoredString {
    let text = format!("{score:>6.3}");
    if score >= 0.6 {
        text.bright_green().bold()
    } else if score >= 0.3 {
        text.bright_yellow()
    } else {
        text.normal()
    }
}
