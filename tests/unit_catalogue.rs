// Unit tests for the catalogue lookups over the built-in corpus.

use artstory::corpus::Corpus;
use artstory::recommend::catalogue::{by_artist, by_movement, by_period, explore};

fn titles(records: &[&artstory::corpus::models::ArtworkRecord]) -> Vec<String> {
    records.iter().map(|r| r.title.clone()).collect()
}

#[test]
fn artist_lookup_newest_first() {
    let corpus = Corpus::builtin();
    let found = by_artist("vincent van gogh", corpus.records(), None, 10);
    assert_eq!(
        titles(&found),
        vec!["Starry Night", "Sunflowers", "Cafe Terrace at Night"]
    );
}

#[test]
fn artist_lookup_excludes_current_artwork() {
    let corpus = Corpus::builtin();
    let found = by_artist("Leonardo da Vinci", corpus.records(), Some("Mona Lisa"), 5);
    assert_eq!(titles(&found), vec!["The Last Supper"]);
}

#[test]
fn artist_lookup_unknown_artist() {
    let corpus = Corpus::builtin();
    assert!(by_artist("Frida Kahlo", corpus.records(), None, 5).is_empty());
}

#[test]
fn period_lookup_closest_first() {
    let corpus = Corpus::builtin();
    let found = by_period(1890, corpus.records(), 3);
    // 1889, 1888, 1888, 1893 are all within a few years of 1890
    assert_eq!(found.len(), 3);
    assert_eq!(found[0].title, "Starry Night");
    for record in &found {
        let gap = record.year.value().unwrap().abs_diff(1890);
        assert!(gap <= 3, "{} is {gap} years away", record.title);
    }
}

#[test]
fn period_lookup_window_is_fifty_years() {
    let corpus = Corpus::builtin();
    let found = by_period(1600, corpus.records(), 20);
    assert_eq!(titles(&found), vec!["The Night Watch"]);
}

#[test]
fn movement_lookup_case_insensitive() {
    let corpus = Corpus::builtin();
    let found = by_movement("CUBISM", corpus.records(), None, 5);
    assert_eq!(titles(&found), vec!["Guernica", "Les Demoiselles d'Avignon"]);
}

#[test]
fn explore_picks_are_unique_and_bounded() {
    let corpus = Corpus::builtin();
    let picks = explore(corpus.records(), 50);
    let mut seen = std::collections::HashSet::new();
    for pick in &picks {
        assert!(seen.insert(pick.artwork.title.clone()), "duplicate {}", pick.artwork.title);
    }
    assert!(!picks.is_empty());

    let limited = explore(corpus.records(), 2);
    assert_eq!(limited.len(), 2);
    assert_eq!(limited[0].artwork.title, picks[0].artwork.title);
}

#[test]
fn explore_on_empty_pool() {
    assert!(explore(&[], 10).is_empty());
}
