// Per-factor similarity functions: artist, period, movement.
//
// Each factor returns a value in [0, 1] and treats missing data as 0.0.
// They are step functions on purpose: a reader can tell from the score
// alone which bucket two artworks fell into.

/// Name variants that refer to the same artist (all lowercase).
const ARTIST_ALIASES: &[&[&str]] = &[
    &["leonardo da vinci", "leonardo", "da vinci", "vinci"],
    &["vincent van gogh", "van gogh", "gogh"],
    &["pablo picasso", "picasso"],
    &["claude monet", "monet"],
    &["salvador dali", "salvador dalí", "dali", "dalí"],
];

/// Groups of closely related art movements (all lowercase).
const RELATED_MOVEMENTS: &[&[&str]] = &[
    &["impressionism", "post-impressionism", "neo-impressionism"],
    &["cubism", "futurism", "constructivism"],
    &["surrealism", "dada", "expressionism"],
    &["renaissance", "mannerism", "baroque"],
    &["modernism", "contemporary", "postmodernism"],
];

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// True if both (normalized) names appear together in one of `groups`.
fn in_same_group(a: &str, b: &str, groups: &[&[&str]]) -> bool {
    groups
        .iter()
        .any(|group| group.contains(&a) && group.contains(&b))
}

/// 1.0 for the same artist name, 0.9 for known aliases of one artist, else 0.0.
pub fn artist_similarity(a: &str, b: &str) -> f64 {
    let (a, b) = (normalize(a), normalize(b));
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    if a == b {
        1.0
    } else if in_same_group(&a, &b, ARTIST_ALIASES) {
        0.9
    } else {
        0.0
    }
}

/// Step-function closeness of two creation years.
///
/// | year gap    | score |
/// |-------------|-------|
/// | ≤ 10        | 0.9   |
/// | ≤ 100       | 0.7   |
/// | ≤ 1000      | 0.3   |
/// | > 1000      | 0.1   |
///
/// Either year unknown → 0.0.
pub fn period_similarity(a: Option<i32>, b: Option<i32>) -> f64 {
    let (Some(a), Some(b)) = (a, b) else {
        return 0.0;
    };
    match a.abs_diff(b) {
        0..=10 => 0.9,
        11..=100 => 0.7,
        101..=1000 => 0.3,
        _ => 0.1,
    }
}

/// 1.0 for the same movement, 0.8 for related movements, else 0.0.
pub fn movement_similarity(a: &str, b: &str) -> f64 {
    let (a, b) = (normalize(a), normalize(b));
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    if a == b {
        1.0
    } else if in_same_group(&a, &b, RELATED_MOVEMENTS) {
        0.8
    } else {
        0.0
    }
}
