// Catalogue lookups: recommendations that filter and sort rather than score.
//
// These answer "more by this artist", "more from around this year", "more
// from this movement", and "something different" over any candidate pool.

use serde::Serialize;

use crate::corpus::models::ArtworkRecord;

/// Window (± years) for period recommendations.
pub const PERIOD_WINDOW_YEARS: u32 = 50;

/// Window (± years) around each exploration anchor.
pub const EXPLORE_WINDOW_YEARS: u32 = 100;

const EXPLORE_ANCHOR_YEARS: [i32; 6] = [1500, 1600, 1700, 1800, 1900, 2000];
const EXPLORE_MOVEMENTS: [&str; 5] = ["renaissance", "baroque", "impressionism", "cubism", "surrealism"];

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

/// Most recent first; unknown years last.
fn sort_newest_first(artworks: &mut [&ArtworkRecord]) {
    artworks.sort_by(|a, b| b.year.value().cmp(&a.year.value()));
}

/// Other artworks by `artist` (case-insensitive), newest first.
pub fn by_artist<'a>(
    artist: &str,
    pool: &'a [ArtworkRecord],
    exclude_title: Option<&str>,
    limit: usize,
) -> Vec<&'a ArtworkRecord> {
    let mut matches: Vec<&ArtworkRecord> = pool
        .iter()
        .filter(|r| !r.artist.trim().is_empty() && eq_ignore_case(&r.artist, artist))
        .filter(|r| exclude_title != Some(r.title.as_str()))
        .collect();
    sort_newest_first(&mut matches);
    matches.truncate(limit);
    matches
}

/// Artworks created within ±50 years of `year`, closest first.
pub fn by_period(year: i32, pool: &[ArtworkRecord], limit: usize) -> Vec<&ArtworkRecord> {
    let mut matches: Vec<(&ArtworkRecord, u32)> = pool
        .iter()
        .filter_map(|r| r.year.value().map(|y| (r, y.abs_diff(year))))
        .filter(|(_, gap)| *gap <= PERIOD_WINDOW_YEARS)
        .collect();
    matches.sort_by_key(|(_, gap)| *gap);
    matches.into_iter().take(limit).map(|(r, _)| r).collect()
}

/// Artworks of `movement` (case-insensitive), newest first.
pub fn by_movement<'a>(
    movement: &str,
    pool: &'a [ArtworkRecord],
    exclude_title: Option<&str>,
    limit: usize,
) -> Vec<&'a ArtworkRecord> {
    let mut matches: Vec<&ArtworkRecord> = pool
        .iter()
        .filter(|r| !r.movement.trim().is_empty() && eq_ignore_case(&r.movement, movement))
        .filter(|r| exclude_title != Some(r.title.as_str()))
        .collect();
    sort_newest_first(&mut matches);
    matches.truncate(limit);
    matches
}

/// One pick from the exploration list.
#[derive(Debug, Clone, Serialize)]
pub struct ExplorationPick<'a> {
    pub artwork: &'a ArtworkRecord,
    pub label: &'static str,
}

/// A rough era label for an artwork's year.
pub fn exploration_label(year: Option<i32>) -> &'static str {
    match year.unwrap_or(0) {
        y if y >= 1900 => "Modern artwork",
        y if y >= 1800 => "19th-century masterpiece",
        y if y >= 1500 => "Renaissance-era artwork",
        _ => "Classical artwork",
    }
}

/// A spread of artworks across eras and movements.
///
/// Takes the first artwork near each century anchor from 1500 to 2000,
/// then the first artwork of each headline movement, dropping repeats.
pub fn explore(pool: &[ArtworkRecord], limit: usize) -> Vec<ExplorationPick<'_>> {
    let by_era = EXPLORE_ANCHOR_YEARS.iter().filter_map(|&anchor| {
        pool.iter().find(|r| {
            r.year
                .value()
                .is_some_and(|y| y.abs_diff(anchor) <= EXPLORE_WINDOW_YEARS)
        })
    });
    let by_movement = EXPLORE_MOVEMENTS
        .iter()
        .filter_map(|&movement| pool.iter().find(|r| eq_ignore_case(&r.movement, movement)));

    let mut picks: Vec<ExplorationPick<'_>> = Vec::new();
    for artwork in by_era.chain(by_movement) {
        if picks.len() >= limit {
            break;
        }
        if picks.iter().any(|p| p.artwork.title == artwork.title) {
            continue;
        }
        picks.push(ExplorationPick {
            artwork,
            label: exploration_label(artwork.year.value()),
        });
    }
    picks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::models::Year;

    fn artwork(title: &str, artist: &str, year: Option<i32>, movement: &str) -> ArtworkRecord {
        ArtworkRecord {
            title: title.to_string(),
            artist: artist.to_string(),
            year: year.map(Year::from_int).unwrap_or_default(),
            movement: movement.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_by_artist_newest_first_unknown_last() {
        let pool = vec![
            artwork("Old", "Monet", Some(1872), "Impressionism"),
            artwork("Undated", "monet", None, "Impressionism"),
            artwork("New", "Monet", Some(1906), "Impressionism"),
            artwork("Other", "Degas", Some(1880), "Impressionism"),
        ];
        let titles: Vec<&str> = by_artist("MONET", &pool, None, 10)
            .iter()
            .map(|r| r.title.as_str())
            .collect();
        assert_eq!(titles, vec!["New", "Old", "Undated"]);
    }

    #[test]
    fn test_by_artist_excludes_title() {
        let pool = vec![
            artwork("A", "Monet", Some(1872), ""),
            artwork("B", "Monet", Some(1906), ""),
        ];
        let found = by_artist("Monet", &pool, Some("B"), 10);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "A");
    }

    #[test]
    fn test_by_period_window_and_order() {
        let pool = vec![
            artwork("Edge", "", Some(1550), ""),
            artwork("Close", "", Some(1503), ""),
            artwork("Outside", "", Some(1551), ""),
            artwork("Unknown", "", None, ""),
        ];
        let titles: Vec<&str> = by_period(1500, &pool, 10)
            .iter()
            .map(|r| r.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Close", "Edge"]);
    }

    #[test]
    fn test_by_movement_limit() {
        let pool = vec![
            artwork("A", "", Some(1907), "Cubism"),
            artwork("B", "", Some(1937), "cubism"),
            artwork("C", "", Some(1912), "Cubism"),
        ];
        let found = by_movement("Cubism", &pool, None, 2);
        let titles: Vec<&str> = found.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["B", "C"]);
    }

    #[test]
    fn test_explore_dedupes() {
        let pool = vec![
            artwork("Renaissance piece", "", Some(1503), "Renaissance"),
            artwork("Modern piece", "", Some(1937), "Cubism"),
        ];
        let picks = explore(&pool, 10);
        let titles: Vec<&str> = picks.iter().map(|p| p.artwork.title.as_str()).collect();
        // 1500 and 1600 anchors both find the 1503 piece; 1900 and 2000 the 1937 piece
        assert_eq!(titles, vec!["Renaissance piece", "Modern piece"]);
        assert_eq!(picks[0].label, "Renaissance-era artwork");
        assert_eq!(picks[1].label, "Modern artwork");
    }

    #[test]
    fn test_exploration_labels() {
        assert_eq!(exploration_label(Some(1888)), "19th-century masterpiece");
        assert_eq!(exploration_label(Some(1434)), "Classical artwork");
        assert_eq!(exploration_label(None), "Classical artwork");
    }
}
