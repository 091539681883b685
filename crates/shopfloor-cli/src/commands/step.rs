//! Step subcommands.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use shopfloor_core::Repository;

use crate::context::AppContext;
use crate::output;

#[derive(Args, Debug)]
pub struct StepCommand {
    #[command(subcommand)]
    pub command: StepSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum StepSubcommand {
    /// Mark a step as done by the registered user
    Close { step_id: i64 },

    /// Change who performed a step
    Reassign {
        step_id: i64,
        #[arg(long)]
        employee: i64,
    },
}

pub async fn handle(cmd: StepCommand, ctx: &AppContext) -> Result<()> {
    let product = match cmd.command {
        StepSubcommand::Close { step_id } => ctx
            .repository
            .close_step(step_id)
            .await
            .context("Failed to close step")?,
        StepSubcommand::Reassign { step_id, employee } => ctx
            .repository
            .change_step_performer(step_id, employee)
            .await
            .context("Failed to reassign step")?,
    };

    output::success("Step updated");
    output::product(&product);
    Ok(())
}
