mod client;
mod output;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use socialfeed_core::{load_app_config, AppConfig, Environment};
use socialfeed_twitter::{
    normalize_batch, parse_statuses, BatchPolicy, LookupParameters, StatusesLookupProvider,
    TweetFactory,
};
use tracing_subscriber::EnvFilter;

use crate::client::FileStatusClient;
use crate::output::{render, OutputFormat};

#[derive(Debug, Parser)]
#[command(name = "socialfeed")]
#[command(about = "Normalize raw social network payloads into a feed")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Normalize every status in a JSON file (array or single object).
    Normalize {
        file: PathBuf,
        #[command(flatten)]
        opts: BatchOpts,
    },
    /// Run a statuses lookup against a JSON file standing in for the API.
    Lookup {
        file: PathBuf,
        /// Comma-separated status ids.
        #[arg(long, value_delimiter = ',', required = true)]
        ids: Vec<String>,
        #[command(flatten)]
        opts: BatchOpts,
    },
}

#[derive(Debug, clap::Args)]
struct BatchOpts {
    /// Skip statuses that fail to normalize instead of aborting.
    #[arg(long)]
    skip_invalid: bool,
    #[arg(long, value_enum, default_value_t = OutputFormat::Summary)]
    format: OutputFormat,
}

impl BatchOpts {
    fn policy(&self, config: &AppConfig) -> BatchPolicy {
        BatchPolicy::from_skip_invalid(self.skip_invalid || config.skip_invalid)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_app_config()?;
    init_tracing(&config);

    let factory = TweetFactory::from_config(&config);

    let (feed, format) = match cli.command {
        Commands::Normalize { file, opts } => {
            let raw = tokio::fs::read_to_string(&file)
                .await
                .with_context(|| format!("reading {}", file.display()))?;
            let statuses = parse_statuses(&raw)
                .with_context(|| format!("parsing {}", file.display()))?;
            let outcome = normalize_batch(&factory, &statuses, opts.policy(&config))?;
            tracing::info!(
                posts = outcome.feed.len(),
                skipped = outcome.skipped,
                "normalized statuses"
            );
            (outcome.feed, opts.format)
        }
        Commands::Lookup { file, ids, opts } => {
            let provider = StatusesLookupProvider::new(FileStatusClient::new(file), factory)
                .with_policy(opts.policy(&config));
            let result = provider.get(LookupParameters::new(ids)).await?;
            (result.feed, opts.format)
        }
    };

    println!("{}", render(&feed, format)?);
    Ok(())
}

/// Production logs carry no ANSI colours; only development logs show targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LogFormat {
    ansi: bool,
    target: bool,
}

impl LogFormat {
    fn for_env(env: &Environment) -> Self {
        Self {
            ansi: !matches!(env, Environment::Production),
            target: matches!(env, Environment::Development),
        }
    }
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    let format = LogFormat::for_env(&config.env);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(format.ansi)
        .with_target(format.target)
        .with_writer(std::io::stderr)
        .init();
}
