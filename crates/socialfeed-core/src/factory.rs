use serde_json::Value;

use crate::post::Post;

/// Converts one raw provider payload into a normalized [`Post`].
///
/// Implementations must be pure: each call depends only on the payload and
/// the factory's immutable configuration, so calls can run in parallel.
pub trait PostFactory {
    type Error: std::error::Error + Send + Sync + 'static;

    /// # Errors
    ///
    /// Returns `Self::Error` when the payload lacks a required field or
    /// carries a value the factory cannot interpret.
    fn create(&self, payload: &Value) -> Result<Post, Self::Error>;
}
