use clap::ValueEnum;
use socialfeed_core::{Feed, Post};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One tab-separated line per post.
    Summary,
    /// The whole feed as pretty-printed JSON.
    Json,
}

/// Renders `feed` in the requested format.
///
/// # Errors
///
/// Returns `serde_json::Error` if JSON serialization fails.
pub fn render(feed: &Feed, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(feed),
        OutputFormat::Summary => Ok(feed.iter().map(summary_line).collect::<Vec<_>>().join("\n")),
    }
}

fn summary_line(post: &Post) -> String {
    let message = post.message().split_whitespace().collect::<Vec<_>>().join(" ");
    format!(
        "{}\t{}\t@{}\t{}\trefs={}\tmedia={}\t{}",
        post.identifier(),
        post.platform(),
        post.author().username,
        post.created_at().to_rfc3339(),
        post.references().len(),
        post.media().len(),
        message
    )
}
