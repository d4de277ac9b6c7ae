//! Twitter v1.1 status payload types.
//!
//! Only the fields the factory reads are modelled. Entity maps stay as raw
//! JSON objects: their category keys are open-ended and each entity is
//! carried verbatim into [`socialfeed_core::Reference::data`].

use serde::Deserialize;
use serde_json::{Map, Value};

/// Entity category → list of raw entity objects, in payload order.
pub type EntityMap = Map<String, Value>;

/// A numeric id as Twitter sends it: usually a JSON number, sometimes a string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Number(u64),
    Text(String),
}

impl std::fmt::Display for RawId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RawId::Number(n) => write!(f, "{n}"),
            RawId::Text(s) => f.write_str(s),
        }
    }
}

/// A status object from `statuses/lookup`, `statuses/show` or a timeline.
#[derive(Debug, Clone, Deserialize)]
pub struct RawStatus {
    #[serde(default)]
    pub id: Option<RawId>,
    /// String form of `id`; preferred because it survives JSON number limits.
    #[serde(default)]
    pub id_str: Option<String>,
    /// e.g. `"Wed Oct 10 20:19:24 +0000 2018"`.
    pub created_at: String,
    pub user: RawUser,
    #[serde(flatten)]
    pub content: StatusContent,
}

impl RawStatus {
    /// The status id, preferring `id_str`. Blank ids count as absent.
    #[must_use]
    pub fn identifier(&self) -> Option<String> {
        pick_identifier(self.id_str.as_deref(), self.id.as_ref())
    }
}

/// The text and entity fields of a status.
///
/// An embedded `retweeted_status` is read with this type alone, so its header
/// fields (`id`, `created_at`, `user`) are never required.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatusContent {
    /// Legacy (possibly truncated) text.
    #[serde(default)]
    pub text: Option<String>,
    /// Untruncated text, present with `tweet_mode=extended`.
    #[serde(default)]
    pub full_text: Option<String>,
    /// `[lo, hi)` slice of `full_text` shown to users.
    #[serde(default)]
    pub display_text_range: Option<[usize; 2]>,
    #[serde(default)]
    pub retweeted_status: Option<Box<StatusContent>>,
    #[serde(default)]
    pub entities: Option<EntityMap>,
    #[serde(default)]
    pub extended_entities: Option<EntityMap>,
}

impl StatusContent {
    /// `entities.<category>`, treating an explicit `null` as absent.
    #[must_use]
    pub fn entity_list(&self, category: &str) -> Option<&Value> {
        self.entities
            .as_ref()
            .and_then(|e| e.get(category))
            .filter(|v| !v.is_null())
    }
}

/// The embedded `user` object of a status.
#[derive(Debug, Clone, Deserialize)]
pub struct RawUser {
    #[serde(default)]
    pub id: Option<RawId>,
    #[serde(default)]
    pub id_str: Option<String>,
    pub name: String,
    pub screen_name: String,
    #[serde(default)]
    pub profile_image_url: Option<String>,
    #[serde(default)]
    pub followers_count: u64,
}

impl RawUser {
    #[must_use]
    pub fn identifier(&self) -> Option<String> {
        pick_identifier(self.id_str.as_deref(), self.id.as_ref())
    }
}

fn pick_identifier(id_str: Option<&str>, id: Option<&RawId>) -> Option<String> {
    id_str
        .map(str::to_string)
        .or_else(|| id.map(ToString::to_string))
        .filter(|s| !s.trim().is_empty())
}

/// Reads the id of a raw status without fully deserializing it.
///
/// Used to attach context to errors and to match lookup results against
/// requested ids.
#[must_use]
pub fn status_id(payload: &Value) -> Option<String> {
    let id_str = payload.get("id_str").and_then(Value::as_str);
    let id = match payload.get("id") {
        Some(Value::Number(n)) => n.as_u64().map(RawId::Number),
        Some(Value::String(s)) => Some(RawId::Text(s.clone())),
        _ => None,
    };
    pick_identifier(id_str, id.as_ref())
}

/// Parses a JSON document holding either an array of statuses or a single
/// status object.
///
/// # Errors
///
/// Returns the underlying `serde_json::Error` if the document is not valid
/// JSON, or a custom error if it is neither an array nor an object.
pub fn parse_statuses(json: &str) -> Result<Vec<Value>, serde_json::Error> {
    match serde_json::from_str::<Value>(json)? {
        Value::Array(items) => Ok(items),
        obj @ Value::Object(_) => Ok(vec![obj]),
        _ => Err(serde::de::Error::custom(
            "expected an array of statuses or a single status object",
        )),
    }
}
