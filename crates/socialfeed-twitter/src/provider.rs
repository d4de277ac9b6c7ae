//! Orchestration of a `statuses/lookup` request: parameter resolution,
//! one client call, normalization of every returned status.
//!
//! Fetching itself stays behind [`StatusClient`]; this crate ships no HTTP
//! implementation.

use std::collections::HashSet;
use std::future::Future;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use socialfeed_core::{PostFactory, ResultSet};

use crate::batch::{normalize_batch, BatchPolicy};
use crate::error::{NormalizeError, ProviderError};
use crate::normalize::TweetFactory;

/// Twitter accepts at most this many ids per `statuses/lookup` call.
pub const MAX_LOOKUP_IDS: usize = 100;

/// Source of raw status payloads, typically an API client.
pub trait StatusClient {
    /// Returns the raw statuses for `ids`. Unknown ids are simply absent
    /// from the result.
    fn lookup(
        &self,
        ids: &[String],
    ) -> impl Future<Output = Result<Vec<Value>, ProviderError>> + Send;
}

/// Parameters of a statuses lookup.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LookupParameters {
    pub ids: Vec<String>,
}

impl LookupParameters {
    #[must_use]
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }

    /// Validates the parameters: `ids` is required, entries are trimmed,
    /// blank entries are rejected, duplicates are dropped keeping the first
    /// occurrence, and at most [`MAX_LOOKUP_IDS`] ids remain.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::MissingParameter`] if `ids` is empty and
    /// [`ProviderError::InvalidParameter`] for blank ids or too many ids.
    pub fn resolve(self) -> Result<Self, ProviderError> {
        if self.ids.is_empty() {
            return Err(ProviderError::MissingParameter("ids"));
        }

        let mut seen = HashSet::new();
        let mut ids = Vec::with_capacity(self.ids.len());
        for raw in self.ids {
            let id = raw.trim();
            if id.is_empty() {
                return Err(ProviderError::InvalidParameter {
                    name: "ids",
                    reason: "blank id".to_string(),
                });
            }
            if seen.insert(id.to_string()) {
                ids.push(id.to_string());
            }
        }

        if ids.len() > MAX_LOOKUP_IDS {
            return Err(ProviderError::InvalidParameter {
                name: "ids",
                reason: format!("{} ids requested, at most {MAX_LOOKUP_IDS} allowed", ids.len()),
            });
        }

        Ok(Self { ids })
    }
}

/// Looks up statuses by id and normalizes them into a feed.
#[derive(Debug)]
pub struct StatusesLookupProvider<C, F = TweetFactory> {
    client: C,
    factory: F,
    policy: BatchPolicy,
}

impl<C, F> StatusesLookupProvider<C, F>
where
    C: StatusClient,
    F: PostFactory<Error = NormalizeError>,
{
    #[must_use]
    pub fn new(client: C, factory: F) -> Self {
        Self {
            client,
            factory,
            policy: BatchPolicy::default(),
        }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: BatchPolicy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        "twitter_status_lookup_api"
    }

    /// Resolves `parameters`, fetches the statuses and builds the feed.
    ///
    /// # Errors
    ///
    /// Returns a parameter error before any fetch, the client's error if the
    /// lookup fails, or [`ProviderError::Normalize`] when a status fails to
    /// normalize under [`BatchPolicy::Abort`].
    pub async fn get(
        &self,
        parameters: LookupParameters,
    ) -> Result<ResultSet<LookupParameters>, ProviderError> {
        let parameters = parameters.resolve()?;
        let statuses = self.client.lookup(&parameters.ids).await?;
        let outcome = normalize_batch(&self.factory, &statuses, self.policy)?;

        tracing::info!(
            provider = self.name(),
            requested = parameters.ids.len(),
            returned = statuses.len(),
            posts = outcome.feed.len(),
            skipped = outcome.skipped,
            "statuses lookup complete"
        );

        Ok(ResultSet {
            feed: outcome.feed,
            parameters,
        })
    }
}
