use thiserror::Error;

/// Errors raised while normalizing a single status payload.
///
/// Both variants abort normalization of that one status; batch callers
/// decide whether to skip it or stop (see [`crate::BatchPolicy`]).
#[derive(Debug, Error)]
pub enum NormalizeError {
    /// A required field is missing, mistyped, or unparsable.
    #[error("malformed status {}: {reason}", .post_id.as_deref().unwrap_or("<unknown>"))]
    MalformedPayload {
        post_id: Option<String>,
        reason: String,
    },

    /// An entity category outside the [`crate::EntityTypeMap`].
    #[error("unknown entity category \"{category}\" in status {post_id}")]
    UnknownEntityCategory { post_id: String, category: String },
}

impl NormalizeError {
    pub(crate) fn malformed(post_id: Option<&str>, reason: impl Into<String>) -> Self {
        NormalizeError::MalformedPayload {
            post_id: post_id.map(str::to_string),
            reason: reason.into(),
        }
    }

    /// Identifier of the status that failed, when it could be read.
    #[must_use]
    pub fn post_id(&self) -> Option<&str> {
        match self {
            NormalizeError::MalformedPayload { post_id, .. } => post_id.as_deref(),
            NormalizeError::UnknownEntityCategory { post_id, .. } => Some(post_id),
        }
    }
}

/// Errors returned by [`crate::StatusesLookupProvider`].
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// The status client failed to produce a payload.
    #[error("status client error: {0}")]
    Client(String),

    #[error(transparent)]
    Normalize(#[from] NormalizeError),
}
