// Data models: the artwork record and its normalized year.
//
// Records come from two places: the built-in table and JSON corpus files.
// Source tables disagree on how years are written (1888, "1888",
// "1503-1519", "c. 1665"), so the year is normalized once, at
// construction, into an optional integer plus the original label.

use std::fmt;
use std::sync::OnceLock;

use regex_lite::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::warn;

/// One artwork known to the recommender.
///
/// Every field except `title` may be missing in a corpus file; missing
/// attributes become empty strings or lists and simply contribute nothing
/// to similarity scores.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtworkRecord {
    pub title: String,
    pub artist: String,
    pub year: Year,
    pub movement: String,
    /// Medium and support, e.g. "Oil on canvas"
    pub style: String,
    pub technique: String,
    pub colors: Vec<String>,
    pub subjects: Vec<String>,
    pub mood: String,
    /// One-line summary
    pub description: String,
    /// Longer narrative used for theme similarity
    pub story: String,
    pub image_url: String,
    pub museum: String,
}

impl ArtworkRecord {
    /// The synthetic document fed to the corpus embedding vectorizer.
    pub fn feature_text(&self) -> String {
        let colors = self.colors.join(" ");
        let subjects = self.subjects.join(" ");
        [
            self.title.as_str(),
            self.artist.as_str(),
            self.movement.as_str(),
            self.style.as_str(),
            colors.as_str(),
            subjects.as_str(),
            self.technique.as_str(),
            self.mood.as_str(),
            self.description.as_str(),
        ]
        .join(" ")
    }

    /// Free text compared by the theme factor: the story, or the
    /// description when no story was written.
    pub fn theme_text(&self) -> &str {
        if self.story.trim().is_empty() {
            &self.description
        } else {
            &self.story
        }
    }
}

/// A creation year normalized to an integer, with the original label kept
/// for display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Year {
    value: Option<i32>,
    label: String,
}

fn digits_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\d+").expect("valid year pattern"))
}

impl Year {
    /// A year with no known value.
    pub fn unknown() -> Self {
        Self::default()
    }

    /// Zero is treated as unknown; older tables used 0 as "no year".
    pub fn from_int(year: i32) -> Self {
        if year == 0 {
            return Self::unknown();
        }
        Self {
            value: Some(year),
            label: year.to_string(),
        }
    }

    /// Parse a year label, taking the first run of digits.
    ///
    /// Ranges resolve to their start ("1503-1519" → 1503) and prefixes are
    /// skipped ("c. 1665" → 1665). A label with no digits keeps the label
    /// but has no value.
    pub fn parse(label: &str) -> Self {
        let label = label.trim();
        let value = digits_pattern()
            .find(label)
            .and_then(|m| m.as_str().parse::<i32>().ok())
            .filter(|&y| y != 0);

        if value.is_none() && !label.is_empty() {
            warn!(label, "Year label has no numeric component, treating as unknown");
        }

        Self {
            value,
            label: label.to_string(),
        }
    }

    pub fn value(&self) -> Option<i32> {
        self.value
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl From<i32> for Year {
    fn from(year: i32) -> Self {
        Self::from_int(year)
    }
}

impl From<&str> for Year {
    fn from(label: &str) -> Self {
        Self::parse(label)
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.label.is_empty() {
            write!(f, "unknown")
        } else {
            write!(f, "{}", self.label)
        }
    }
}

impl Serialize for Year {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.label)
    }
}

/// Years arrive as JSON numbers, strings, or null.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawYear {
    Int(i64),
    Text(String),
}

impl<'de> Deserialize<'de> for Year {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<RawYear>::deserialize(deserializer)?;
        Ok(match raw {
            None => Year::unknown(),
            Some(RawYear::Int(n)) => match i32::try_from(n) {
                Ok(y) => Year::from_int(y),
                Err(_) => {
                    warn!(year = n, "Year out of range, treating as unknown");
                    Year::unknown()
                }
            },
            Some(RawYear::Text(s)) => Year::parse(&s),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_forms() {
        assert_eq!(Year::parse("1888").value(), Some(1888));
        assert_eq!(Year::parse("1503-1519").value(), Some(1503));
        assert_eq!(Year::parse("c. 1665").value(), Some(1665));
        assert_eq!(Year::parse("unknown").value(), None);
        assert_eq!(Year::parse("").value(), None);
        assert_eq!(Year::from_int(0).value(), None);
    }

    #[test]
    fn test_year_keeps_label() {
        let year = Year::parse("1503-1519");
        assert_eq!(year.label(), "1503-1519");
        assert_eq!(year.to_string(), "1503-1519");
        assert_eq!(Year::unknown().to_string(), "unknown");
    }

    #[test]
    fn test_deserialize_mixed_years() {
        let records: Vec<ArtworkRecord> = serde_json::from_str(
            r#"[
                {"title": "A", "year": 1503},
                {"title": "B", "year": "1495-1498"},
                {"title": "C", "year": null},
                {"title": "D"}
            ]"#,
        )
        .unwrap();
        let years: Vec<Option<i32>> = records.iter().map(|r| r.year.value()).collect();
        assert_eq!(years, vec![Some(1503), Some(1495), None, None]);
    }

    #[test]
    fn test_theme_text_falls_back_to_description() {
        let mut record = ArtworkRecord {
            description: "a vase of flowers".to_string(),
            ..Default::default()
        };
        assert_eq!(record.theme_text(), "a vase of flowers");
        record.story = "sunflowers in the studio at Arles".to_string();
        assert_eq!(record.theme_text(), "sunflowers in the studio at Arles");
    }
}
