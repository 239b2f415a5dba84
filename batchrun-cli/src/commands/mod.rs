//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod list;
mod submit;
mod watch;

pub use list::ListCommands;
pub use submit::SubmitArgs;
pub use watch::WatchArgs;

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::config::Config;
use crate::poller::PollConfig;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Submit a job and wait until it finishes
    Submit(SubmitArgs),
    /// Wait for an already submitted job to finish
    Watch(WatchArgs),
    /// List job definitions and job queues
    List {
        #[command(subcommand)]
        command: ListCommands,
    },
}

/// Polling budgets shared by `submit` and `watch`
#[derive(Debug, Clone, Args)]
pub struct PollArgs {
    /// Maximum number of status checks, 0 uses the default
    #[arg(long, default_value_t = PollConfig::DEFAULT_MAX_CHECKS)]
    pub max_checks: u32,

    /// Maximum consecutive failed status checks, 0 uses the default
    #[arg(long, default_value_t = PollConfig::DEFAULT_MAX_FAILURES)]
    pub max_failures: u32,
}

impl PollArgs {
    pub fn poll_config(&self) -> PollConfig {
        PollConfig::new(self.max_checks, self.max_failures)
    }
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
///
/// # Arguments
/// * `command` - The command to execute
/// * `config` - The CLI configuration
///
/// # Returns
/// Result indicating success or failure
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    let client = config.client()?;

    match command {
        Commands::Submit(args) => submit::handle_submit(args, &client).await,
        Commands::Watch(args) => watch::handle_watch(args, &client).await,
        Commands::List { command } => list::handle_list_command(command, &client).await,
    }
}
