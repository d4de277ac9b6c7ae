//! Twitter (v1.1 statuses API) support for socialfeed.
//!
//! [`TweetFactory`] turns raw status objects into normalized
//! [`socialfeed_core::Post`] values: it follows retweets to the original
//! status, clips extended text to its display range, and maps entities to
//! typed references. [`StatusesLookupProvider`] drives a batch of statuses
//! fetched by an external [`StatusClient`] into a [`socialfeed_core::Feed`].

pub mod batch;
pub mod error;
pub mod normalize;
pub mod provider;
pub mod text;
pub mod type_map;
pub mod types;

pub use batch::{normalize_batch, BatchOutcome, BatchPolicy};
pub use error::{NormalizeError, ProviderError};
pub use normalize::{parse_created_at, TweetFactory, DEFAULT_BASE_URL};
pub use provider::{LookupParameters, StatusClient, StatusesLookupProvider, MAX_LOOKUP_IDS};
pub use type_map::EntityTypeMap;
pub use types::{parse_statuses, status_id, RawStatus, RawUser, StatusContent};
