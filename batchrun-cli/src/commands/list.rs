//! List command handlers

use anyhow::{Context, Result};
use batchrun_client::JobService;
use clap::Subcommand;

use crate::render;

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List active job definitions with their revisions
    Jobdefs,
    /// List job queues
    Queues,
}

/// Handle list commands
///
/// # Arguments
/// * `command` - The list command to execute
/// * `service` - The job service to query
pub async fn handle_list_command<S: JobService + ?Sized>(
    command: ListCommands,
    service: &S,
) -> Result<()> {
    match command {
        ListCommands::Jobdefs => {
            let summaries = service
                .list_active_job_definitions()
                .await
                .context("failed to list job definitions")?;
            render::print_definition_summaries(&summaries);
        }
        ListCommands::Queues => {
            let queues = service
                .list_job_queues()
                .await
                .context("failed to list job queues")?;
            render::print_job_queues(&queues);
        }
    }

    Ok(())
}
