use std::collections::HashMap;

use socialfeed_core::ReferenceType;

/// Maps Twitter entity categories to [`ReferenceType`]s.
///
/// The default table is the fixed set Twitter documents; categories outside
/// it are rejected by the factory rather than dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityTypeMap {
    entries: HashMap<String, ReferenceType>,
}

impl Default for EntityTypeMap {
    fn default() -> Self {
        Self::empty()
            .with_category("urls", ReferenceType::Url)
            .with_category("user_mentions", ReferenceType::User)
            .with_category("hashtags", ReferenceType::Hashtag)
            .with_category("video", ReferenceType::Video)
            .with_category("media", ReferenceType::Media)
            .with_category("photo", ReferenceType::Media)
            .with_category("animated_gif", ReferenceType::Media)
    }
}

impl EntityTypeMap {
    /// A map that resolves nothing.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Adds or replaces the mapping for `category`.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>, kind: ReferenceType) -> Self {
        self.entries.insert(category.into(), kind);
        self
    }

    #[must_use]
    pub fn resolve(&self, category: &str) -> Option<ReferenceType> {
        self.entries.get(category).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
