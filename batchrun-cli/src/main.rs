//! batchrun CLI
//!
//! Submits jobs to a batch service and watches them until they finish.

mod commands;
mod config;
mod poller;
mod render;
mod workflow;

#[cfg(test)]
mod testing;

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use colored::*;
use commands::{Commands, handle_command};
use config::{Config, DEFAULT_ENDPOINT, DEFAULT_REGION, DEFAULT_TIMEOUT_SECS};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "batchrun")]
#[command(about = "Submit batch jobs and wait for them to finish", long_about = None)]
struct Cli {
    /// Batch service URL
    #[arg(long, global = true, env = "BATCHRUN_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Region the requests are scoped to
    #[arg(long, global = true, env = "BATCHRUN_REGION", default_value = DEFAULT_REGION)]
    region: String,

    /// Bearer token for the batch service
    #[arg(long, global = true, env = "BATCHRUN_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Timeout of each HTTP request in seconds
    #[arg(long, global = true, env = "BATCHRUN_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    fn config(&self) -> Config {
        Config::new(&self.endpoint, &self.region)
            .with_token(self.token.clone())
            .with_timeout(Duration::from_secs(self.timeout_secs))
    }
}

/// Logs go to stderr; `RUST_LOG` overrides the default filter
fn init_logging(verbose: bool) {
    let default = if verbose {
        "batchrun=debug,batchrun_client=debug"
    } else {
        "batchrun=warn,batchrun_client=warn"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.config();
    config.validate()?;

    handle_command(cli.command, &config).await
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", "Error:".red().bold(), format!("{:#}", err).red());
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_submit_flags() {
        let cli = Cli::try_parse_from([
            "batchrun",
            "submit",
            "--name",
            "nightly-etl",
            "--queue",
            "batch-default",
            "--jobdef",
            "etl:3",
            "--max-checks",
            "10",
            "--dry-run",
        ])
        .unwrap();

        match cli.command {
            Commands::Submit(args) => {
                assert_eq!(args.name.as_deref(), Some("nightly-etl"));
                assert_eq!(args.queue.as_deref(), Some("batch-default"));
                assert_eq!(args.jobdef.as_deref(), Some("etl:3"));
                assert!(args.dry_run);
                assert_eq!(args.poll.max_checks, 10);
                assert_eq!(args.poll.max_failures, 5);
            }
            _ => panic!("expected submit"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "batchrun",
            "list",
            "queues",
            "--region",
            "us-east-1",
            "--timeout-secs",
            "5",
            "-v",
        ])
        .unwrap();

        let config = cli.config();
        assert_eq!(config.region, "us-east-1");
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert!(cli.verbose);
    }

    #[test]
    fn test_watch_requires_job_id() {
        assert!(Cli::try_parse_from(["batchrun", "watch"]).is_err());
    }
}
