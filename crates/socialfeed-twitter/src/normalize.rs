//! Normalization from raw Twitter statuses to [`socialfeed_core::Tweet`].
//!
//! Text clipping is delegated to [`crate::text`]; entity categories are
//! resolved through the factory's [`EntityTypeMap`].

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{Map, Value};
use socialfeed_core::{AppConfig, Author, Media, Post, PostFactory, Reference, TextRange, Tweet};

use crate::error::NormalizeError;
use crate::text::clip_to_width;
use crate::type_map::EntityTypeMap;
use crate::types::{status_id, RawStatus, RawUser, StatusContent};

/// Profile links are built as `<base>/<screen_name>`.
pub const DEFAULT_BASE_URL: &str = "https://twitter.com";

/// Builds [`Post::Twitter`] values from raw v1.1 status objects.
///
/// Holds only immutable configuration, so one factory can be shared across
/// threads and `create` calls can run in parallel.
#[derive(Debug, Clone)]
pub struct TweetFactory {
    base_url: String,
    type_map: EntityTypeMap,
}

impl Default for TweetFactory {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl TweetFactory {
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            type_map: EntityTypeMap::default(),
        }
    }

    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(&config.twitter_base_url)
    }

    /// Replaces the entity category table.
    #[must_use]
    pub fn with_type_map(mut self, type_map: EntityTypeMap) -> Self {
        self.type_map = type_map;
        self
    }

    /// Normalizes an already-deserialized status.
    ///
    /// For a retweet, message, references and media come from the embedded
    /// original status; the id, timestamp and author stay the wrapper's. The
    /// embedded status only needs its text and entity fields.
    ///
    /// # Errors
    ///
    /// Returns [`NormalizeError::MalformedPayload`] if an id is missing, the
    /// date cannot be parsed, the status has no text, or an entity is
    /// malformed. Returns [`NormalizeError::UnknownEntityCategory`] for an
    /// entity whose category is not in the type map.
    pub fn normalize(&self, status: &RawStatus) -> Result<Tweet, NormalizeError> {
        let identifier = status
            .identifier()
            .ok_or_else(|| NormalizeError::malformed(None, "missing status id"))?;
        let id = identifier.as_str();

        let author = self.build_author(&status.user, id)?;
        let created_at = parse_created_at(&status.created_at).ok_or_else(|| {
            NormalizeError::malformed(
                Some(id),
                format!("unparsable created_at \"{}\"", status.created_at),
            )
        })?;

        let retweet = status.content.retweeted_status.as_deref();
        let source = retweet.unwrap_or(&status.content);
        let (message, cutoff) = resolve_message(source, id)?;
        let references = self.collect_references(source, cutoff, id)?;
        let media = collect_media(source, id)?;

        tracing::debug!(
            post_id = id,
            retweet = retweet.is_some(),
            references = references.len(),
            media = media.len(),
            "normalized tweet"
        );

        Ok(Tweet {
            identifier,
            created_at,
            message,
            followers_count: author.followers_count,
            author,
            media,
            references,
        })
    }

    fn build_author(&self, user: &RawUser, post_id: &str) -> Result<Author, NormalizeError> {
        let identifier = user
            .identifier()
            .ok_or_else(|| NormalizeError::malformed(Some(post_id), "missing user.id"))?;

        Ok(Author {
            identifier,
            name: user.name.clone(),
            username: user.screen_name.clone(),
            link: format!("{}/{}", self.base_url, user.screen_name),
            profile_picture: user.profile_image_url.as_deref().map(Media::new),
            followers_count: user.followers_count,
        })
    }

    /// Walks `entities` then `extended_entities` of `source`, category by
    /// category, in payload order.
    fn collect_references(
        &self,
        source: &StatusContent,
        cutoff: Option<usize>,
        post_id: &str,
    ) -> Result<Vec<Reference>, NormalizeError> {
        let mut references = Vec::new();

        if let Some(entities) = &source.entities {
            for (category, list) in entities {
                self.scan_category(category, list, cutoff, false, post_id, &mut references)?;
            }
        }

        if let Some(extended) = &source.extended_entities {
            for (category, list) in extended {
                self.scan_category(category, list, cutoff, true, post_id, &mut references)?;
            }
        }

        Ok(references)
    }

    /// Appends one reference per entity of a category.
    ///
    /// Entities are assumed sorted by start offset: the scan stops at the
    /// first entity that starts past `cutoff`. Extended entities carry their
    /// own `type`, which takes precedence over the category key.
    fn scan_category(
        &self,
        category: &str,
        list: &Value,
        cutoff: Option<usize>,
        typed_entities: bool,
        post_id: &str,
        out: &mut Vec<Reference>,
    ) -> Result<(), NormalizeError> {
        let entities = match list {
            Value::Null => return Ok(()),
            Value::Array(items) => items,
            _ => {
                return Err(NormalizeError::malformed(
                    Some(post_id),
                    format!("entity category \"{category}\" is not a list"),
                ))
            }
        };

        for entity in entities {
            let data = entity.as_object().ok_or_else(|| {
                NormalizeError::malformed(
                    Some(post_id),
                    format!("entity in \"{category}\" is not an object"),
                )
            })?;
            let range = parse_indices(data).ok_or_else(|| {
                NormalizeError::malformed(
                    Some(post_id),
                    format!("entity in \"{category}\" has invalid indices"),
                )
            })?;

            if cutoff.is_some_and(|limit| range.start() > limit) {
                break;
            }

            let type_key = if typed_entities {
                data.get("type").and_then(Value::as_str).unwrap_or(category)
            } else {
                category
            };
            let kind = self.type_map.resolve(type_key).ok_or_else(|| {
                NormalizeError::UnknownEntityCategory {
                    post_id: post_id.to_string(),
                    category: type_key.to_string(),
                }
            })?;

            out.push(Reference {
                range,
                kind,
                data: data.clone(),
            });
        }

        Ok(())
    }
}

impl PostFactory for TweetFactory {
    type Error = NormalizeError;

    fn create(&self, payload: &Value) -> Result<Post, NormalizeError> {
        let status = RawStatus::deserialize(payload).map_err(|e| NormalizeError::MalformedPayload {
            post_id: status_id(payload),
            reason: e.to_string(),
        })?;
        self.normalize(&status).map(Post::from)
    }
}

/// Parses Twitter's `created_at` format (`"Wed Oct 10 20:19:24 +0000 2018"`),
/// falling back to RFC 3339.
///
/// Returns `None` if the string matches neither format.
#[must_use]
pub fn parse_created_at(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_str(s, "%a %b %d %H:%M:%S %z %Y")
        .or_else(|_| DateTime::parse_from_rfc3339(s))
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Picks the display message of `source` and the offset past which entities
/// are not displayed.
///
/// Extended statuses with a display range are clipped to it and a non-zero
/// range end becomes the cutoff. Everything else is used verbatim with no
/// cutoff.
fn resolve_message(
    source: &StatusContent,
    post_id: &str,
) -> Result<(String, Option<usize>), NormalizeError> {
    match (&source.full_text, source.display_text_range) {
        (Some(full_text), Some([lo, hi])) => {
            if lo > hi {
                return Err(NormalizeError::malformed(
                    Some(post_id),
                    format!("display_text_range [{lo}, {hi}] is inverted"),
                ));
            }
            let cutoff = (hi > 0).then_some(hi);
            Ok((clip_to_width(full_text, lo, hi - lo), cutoff))
        }
        (Some(full_text), None) => Ok((full_text.clone(), None)),
        (None, _) => source
            .text
            .clone()
            .map(|text| (text, None))
            .ok_or_else(|| NormalizeError::malformed(Some(post_id), "status has no text")),
    }
}

/// Reads an entity's `indices` pair into a [`TextRange`].
fn parse_indices(entity: &Map<String, Value>) -> Option<TextRange> {
    match entity.get("indices")?.as_array()?.as_slice() {
        [start, end] => {
            let start = usize::try_from(start.as_u64()?).ok()?;
            let end = usize::try_from(end.as_u64()?).ok()?;
            TextRange::new(start, end)
        }
        _ => None,
    }
}

/// Collects attachment media.
///
/// Prefers the source status's own `entities.media` and falls back to the
/// `entities.media` of a status the source itself embeds.
fn collect_media(source: &StatusContent, post_id: &str) -> Result<Vec<Media>, NormalizeError> {
    let fallback = source
        .retweeted_status
        .as_deref()
        .and_then(|rt| rt.entity_list("media"));
    let Some(list) = source.entity_list("media").or(fallback) else {
        return Ok(Vec::new());
    };

    let entries = list.as_array().ok_or_else(|| {
        NormalizeError::malformed(Some(post_id), "entities.media is not a list")
    })?;

    entries
        .iter()
        .map(|entry| -> Result<Media, NormalizeError> {
            let url = entry
                .get("media_url")
                .and_then(Value::as_str)
                .ok_or_else(|| {
                    NormalizeError::malformed(Some(post_id), "media entry has no media_url")
                })?;
            let media = Media::new(url);
            Ok(match entry.get("expanded_url").and_then(Value::as_str) {
                Some(link) => media.with_link(link),
                None => media,
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
