#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Runtime settings shared by the library crates and the CLI.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    /// Default tracing filter, used when `RUST_LOG` is unset.
    pub log_level: String,
    /// Base URL that author profile links are built from, without a trailing `/`.
    pub twitter_base_url: String,
    /// When `true`, batch normalization skips malformed statuses instead of
    /// aborting on the first one.
    pub skip_invalid: bool,
}
