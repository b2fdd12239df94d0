use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;

use artstory::config::Config;
use artstory::corpus::Corpus;
use artstory::output::terminal;
use artstory::recommend::{catalogue, Recommender};

/// ArtStory: artwork similarity and recommendations.
///
/// Ranks artworks by how similar they are to one you name, using artist,
/// period, movement and story similarity, or TF-IDF embeddings.
#[derive(Parser)]
#[command(name = "artstory", version, about)]
struct Cli {
    /// Print results as JSON instead of a table
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find artworks similar to the given one
    Similar {
        /// Title of the target artwork (case-insensitive)
        title: String,

        /// Number of recommendations (1-20)
        #[arg(long, default_value = "5", value_parser = clap::value_parser!(u32).range(1..=20))]
        limit: u32,

        /// Rank by embedding cosine similarity instead of weighted factors
        #[arg(long)]
        embedding: bool,
    },

    /// Show a factor-by-factor comparison of two artworks
    Compare {
        /// First artwork title
        a: String,
        /// Second artwork title
        b: String,
    },

    /// List artworks by an artist, newest first
    Artist {
        /// Artist name (case-insensitive)
        name: String,

        /// Leave this title out of the list
        #[arg(long)]
        exclude: Option<String>,

        /// Number of results (1-20)
        #[arg(long, default_value = "5", value_parser = clap::value_parser!(u32).range(1..=20))]
        limit: u32,
    },

    /// List artworks created within 50 years of a year, closest first
    Period {
        /// Target year
        year: i32,

        /// Number of results (1-20)
        #[arg(long, default_value = "5", value_parser = clap::value_parser!(u32).range(1..=20))]
        limit: u32,
    },

    /// List artworks of an art movement, newest first
    Movement {
        /// Movement name (case-insensitive)
        name: String,

        /// Leave this title out of the list
        #[arg(long)]
        exclude: Option<String>,

        /// Number of results (1-20)
        #[arg(long, default_value = "5", value_parser = clap::value_parser!(u32).range(1..=20))]
        limit: u32,
    },

    /// Suggest a spread of artworks across eras and movements
    Explore {
        /// Number of picks (1-50)
        #[arg(long, default_value = "10", value_parser = clap::value_parser!(u32).range(1..=50))]
        limit: u32,
    },

    /// Show corpus and engine status
    Status,
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("artstory=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;
    let corpus = config.load_corpus()?;
    let recommender = Recommender::new(&corpus, &config.engine_settings());

    match cli.command {
        Commands::Similar {
            title,
            limit,
            embedding,
        } => {
            let target = require_artwork(&corpus, &title)?;
            let limit = limit as usize;
            let results = if embedding {
                recommender.similar_by_embedding(&target.title, limit)
            } else {
                recommender.similar_by_title(&target.title, limit)
            };
            info!(
                target = target.title.as_str(),
                results = results.len(),
                embedding,
                "Generated similar artwork recommendations"
            );
            if cli.json {
                print_json(&results)?;
            } else {
                terminal::display_similar(&target.title, &results);
            }
        }

        Commands::Compare { a, b } => {
            let left = require_artwork(&corpus, &a)?;
            let right = require_artwork(&corpus, &b)?;
            let comparison = recommender
                .compare(&left.title, &right.title)
                .context("Comparison failed for artworks present in the corpus")?;
            if cli.json {
                print_json(&comparison)?;
            } else {
                terminal::display_comparison(left, right, &comparison);
            }
        }

        Commands::Artist {
            name,
            exclude,
            limit,
        } => {
            let found =
                catalogue::by_artist(&name, corpus.records(), exclude.as_deref(), limit as usize);
            if cli.json {
                print_json(&found)?;
            } else {
                terminal::display_artworks(&format!("artist \"{name}\""), &found);
            }
        }

        Commands::Period { year, limit } => {
            let found = catalogue::by_period(year, corpus.records(), limit as usize);
            if cli.json {
                print_json(&found)?;
            } else {
                terminal::display_artworks(&format!("the years around {year}"), &found);
            }
        }

        Commands::Movement {
            name,
            exclude,
            limit,
        } => {
            let found =
                catalogue::by_movement(&name, corpus.records(), exclude.as_deref(), limit as usize);
            if cli.json {
                print_json(&found)?;
            } else {
                terminal::display_artworks(&format!("movement \"{name}\""), &found);
            }
        }

        Commands::Explore { limit } => {
            let picks = catalogue::explore(corpus.records(), limit as usize);
            if cli.json {
                print_json(&picks)?;
            } else {
                terminal::display_exploration(&picks);
            }
        }

        Commands::Status => {
            artstory::status::show(&config, &recommender);
        }
    }

    Ok(())
}

/// Look up an artwork by title, failing with a not-found error.
fn require_artwork<'a>(
    corpus: &'a Corpus,
    title: &str,
) -> Result<&'a artstory::corpus::models::ArtworkRecord> {
    corpus.find(title).with_context(|| {
        format!("Artwork {title:?} not found. Run `artstory explore` to see known titles.")
    })
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
