//! Assembling a [`Feed`] from a list of raw payloads.

use serde_json::Value;
use socialfeed_core::{Feed, PostFactory};

/// What to do when one payload in a batch fails to normalize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BatchPolicy {
    /// Stop at the first failure and return its error.
    #[default]
    Abort,
    /// Log the failure and continue with the next payload.
    SkipInvalid,
}

impl BatchPolicy {
    #[must_use]
    pub fn from_skip_invalid(skip_invalid: bool) -> Self {
        if skip_invalid {
            BatchPolicy::SkipInvalid
        } else {
            BatchPolicy::Abort
        }
    }
}

/// Result of normalizing a batch.
#[derive(Debug)]
pub struct BatchOutcome {
    pub feed: Feed,
    /// Payloads dropped under [`BatchPolicy::SkipInvalid`].
    pub skipped: usize,
}

/// Normalizes `payloads` in order and collects the posts into a feed.
///
/// # Errors
///
/// Under [`BatchPolicy::Abort`], returns the first factory error.
pub fn normalize_batch<F: PostFactory>(
    factory: &F,
    payloads: &[Value],
    policy: BatchPolicy,
) -> Result<BatchOutcome, F::Error> {
    let mut feed = Feed::new();
    let mut skipped = 0;

    for (position, payload) in payloads.iter().enumerate() {
        match factory.create(payload) {
            Ok(post) => {
                feed.add_post(post);
            }
            Err(e) if policy == BatchPolicy::SkipInvalid => {
                tracing::warn!(position, error = %e, "skipping status that failed to normalize");
                skipped += 1;
            }
            Err(e) => return Err(e),
        }
    }

    Ok(BatchOutcome { feed, skipped })
}
