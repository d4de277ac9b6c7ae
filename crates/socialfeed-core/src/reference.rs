//! Typed annotations over ranges of a post's message.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The kind of entity a [`Reference`] points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceType {
    Url,
    User,
    Hashtag,
    Video,
    Media,
}

impl std::fmt::Display for ReferenceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReferenceType::Url => write!(f, "url"),
            ReferenceType::User => write!(f, "user"),
            ReferenceType::Hashtag => write!(f, "hashtag"),
            ReferenceType::Video => write!(f, "video"),
            ReferenceType::Media => write!(f, "media"),
        }
    }
}

/// Half-open character range `[start, end)` into a post's message.
///
/// Serializes as a two-element array, the same shape providers use for
/// entity `indices`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "[usize; 2]", into = "[usize; 2]")]
pub struct TextRange {
    start: usize,
    end: usize,
}

impl TextRange {
    /// Returns `None` when `start > end`.
    #[must_use]
    pub fn new(start: usize, end: usize) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    #[must_use]
    pub fn start(&self) -> usize {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> usize {
        self.end
    }
}

impl TryFrom<[usize; 2]> for TextRange {
    type Error = String;

    fn try_from([start, end]: [usize; 2]) -> Result<Self, Self::Error> {
        Self::new(start, end).ok_or_else(|| format!("range start {start} is after end {end}"))
    }
}

impl From<TextRange> for [usize; 2] {
    fn from(range: TextRange) -> Self {
        [range.start, range.end]
    }
}

/// A typed annotation (URL, mention, hashtag, media) anchored to a range of
/// the message.
///
/// `data` holds the provider's raw entity object untouched, so render layers
/// can reach provider-specific fields (`expanded_url`, `screen_name`, ...)
/// without the model having to know about them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reference {
    pub range: TextRange,
    pub kind: ReferenceType,
    pub data: Map<String, Value>,
}

impl Reference {
    /// Returns a string field from the raw entity data, if present.
    #[must_use]
    pub fn data_str(&self, key: &str) -> Option<&str> {
        self.data.get(key).and_then(Value::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_range_rejects_inverted_bounds() {
        assert!(TextRange::new(5, 4).is_none());
    }

    #[test]
    fn text_range_allows_empty_range() {
        let range = TextRange::new(3, 3).unwrap();
        assert_eq!(range.start(), range.end());
    }

    #[test]
    fn text_range_accessors() {
        let range = TextRange::new(2, 9).unwrap();
        assert_eq!(range.start(), 2);
        assert_eq!(range.end(), 9);
    }

    #[test]
    fn text_range_serializes_as_pair() {
        let range = TextRange::new(4, 11).unwrap();
        assert_eq!(serde_json::to_value(range).unwrap(), serde_json::json!([4, 11]));
        let parsed: TextRange = serde_json::from_value(serde_json::json!([4, 11])).unwrap();
        assert_eq!(parsed, range);
        assert!(serde_json::from_value::<TextRange>(serde_json::json!([11, 4])).is_err());
    }

    #[test]
    fn reference_type_display() {
        assert_eq!(ReferenceType::Url.to_string(), "url");
        assert_eq!(ReferenceType::User.to_string(), "user");
        assert_eq!(ReferenceType::Media.to_string(), "media");
    }

    #[test]
    fn data_str_reads_raw_fields() {
        let mut data = Map::new();
        data.insert("screen_name".to_string(), Value::from("rustlang"));
        data.insert("id".to_string(), Value::from(42));
        let reference = Reference {
            range: TextRange::new(0, 9).unwrap(),
            kind: ReferenceType::User,
            data,
        };
        assert_eq!(reference.data_str("screen_name"), Some("rustlang"));
        assert_eq!(reference.data_str("id"), None);
        assert_eq!(reference.data_str("missing"), None);
    }
}
