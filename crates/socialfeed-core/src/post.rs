use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::reference::Reference;

/// An image or video attachment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Media {
    /// Location of the media asset itself.
    pub url: String,
    /// Outbound link the media expands to, if the provider supplies one.
    pub link: Option<String>,
}

impl Media {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            link: None,
        }
    }

    #[must_use]
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }
}

/// The originator of a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Provider-assigned id, kept as a string so 64-bit ids survive intact.
    pub identifier: String,
    pub name: String,
    pub username: String,
    /// Canonical profile URL, e.g. `"https://twitter.com/rustlang"`.
    pub link: String,
    pub profile_picture: Option<Media>,
    pub followers_count: u64,
}

/// A normalized microblog status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tweet {
    pub identifier: String,
    pub created_at: DateTime<Utc>,
    /// Display text, already clipped to the provider's display range.
    pub message: String,
    pub author: Author,
    /// Copy of the author's follower count, kept on the post for display.
    pub followers_count: u64,
    pub media: Vec<Media>,
    pub references: Vec<Reference>,
}

/// A normalized post from any supported platform.
///
/// Every variant exposes the same accessor set, so a [`crate::Feed`] and its
/// consumers never need to match on the platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "platform", rename_all = "lowercase")]
pub enum Post {
    Twitter(Tweet),
}

impl Post {
    #[must_use]
    pub fn identifier(&self) -> &str {
        match self {
            Post::Twitter(t) => &t.identifier,
        }
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        match self {
            Post::Twitter(t) => t.created_at,
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Post::Twitter(t) => &t.message,
        }
    }

    #[must_use]
    pub fn author(&self) -> &Author {
        match self {
            Post::Twitter(t) => &t.author,
        }
    }

    #[must_use]
    pub fn followers_count(&self) -> u64 {
        match self {
            Post::Twitter(t) => t.followers_count,
        }
    }

    #[must_use]
    pub fn media(&self) -> &[Media] {
        match self {
            Post::Twitter(t) => &t.media,
        }
    }

    #[must_use]
    pub fn references(&self) -> &[Reference] {
        match self {
            Post::Twitter(t) => &t.references,
        }
    }

    /// Short platform name, e.g. `"twitter"`.
    #[must_use]
    pub fn platform(&self) -> &'static str {
        match self {
            Post::Twitter(_) => "twitter",
        }
    }
}

impl From<Tweet> for Post {
    fn from(tweet: Tweet) -> Self {
        Post::Twitter(tweet)
    }
}
