use std::path::PathBuf;

use serde_json::Value;
use socialfeed_twitter::{parse_statuses, status_id, ProviderError, StatusClient};

/// Serves lookups from a JSON file of raw statuses, in file order.
///
/// The file is re-read on every lookup.
#[derive(Debug)]
pub struct FileStatusClient {
    path: PathBuf,
}

impl FileStatusClient {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl StatusClient for FileStatusClient {
    async fn lookup(&self, ids: &[String]) -> Result<Vec<Value>, ProviderError> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| ProviderError::Client(format!("{}: {e}", self.path.display())))?;
        let statuses = parse_statuses(&raw)
            .map_err(|e| ProviderError::Client(format!("{}: {e}", self.path.display())))?;

        let total = statuses.len();
        let matched: Vec<Value> = statuses
            .into_iter()
            .filter(|s| status_id(s).is_some_and(|id| ids.contains(&id)))
            .collect();

        tracing::debug!(
            path = %self.path.display(),
            total,
            matched = matched.len(),
            "served lookup from file"
        );
        Ok(matched)
    }
}
