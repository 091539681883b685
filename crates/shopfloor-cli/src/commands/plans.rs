//! Day plan subcommands.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Args, Subcommand};

use shopfloor_core::Repository;
use shopfloor_core::model::{DayPlanStepCreate, DayPlanStepUpdate};

use crate::context::AppContext;
use crate::output;

#[derive(Args, Debug)]
pub struct PlansCommand {
    #[command(subcommand)]
    pub command: PlansSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum PlansSubcommand {
    /// List plans for a date (defaults to today)
    List {
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Print the raw JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a step to an employee's plan
    Add {
        #[arg(long)]
        date: NaiveDate,
        #[arg(long)]
        employee: i64,
        /// Step definition id
        #[arg(long)]
        step: i64,
        #[arg(long)]
        quantity: u32,
    },

    /// Change a planned step
    Update {
        plan_step_id: i64,
        #[arg(long)]
        date: NaiveDate,
        #[arg(long)]
        employee: i64,
        /// Step definition id
        #[arg(long)]
        step: i64,
        #[arg(long)]
        quantity: u32,
    },

    /// Remove a planned step
    Remove { plan_step_id: i64 },
}

pub async fn handle(cmd: PlansCommand, ctx: &AppContext) -> Result<()> {
    let repo = &ctx.repository;

    let plans = match cmd.command {
        PlansSubcommand::List { date, json } => {
            let date = date.unwrap_or_else(|| Local::now().date_naive());
            let plans = repo.day_plans(date).await?;
            if json {
                return output::json_pretty(&plans);
            }
            plans
        }
        PlansSubcommand::Add {
            date,
            employee,
            step,
            quantity,
        } => repo
            .add_plan_step(&DayPlanStepCreate {
                plan_date: date,
                employee_id: employee,
                step_id: step,
                planned_quantity: quantity,
            })
            .await
            .context("Failed to add plan step")?,
        PlansSubcommand::Update {
            plan_step_id,
            date,
            employee,
            step,
            quantity,
        } => repo
            .update_plan_step(&DayPlanStepUpdate {
                step_id: plan_step_id,
                plan_date: date,
                step_definition_id: step,
                employee_id: employee,
                planned_quantity: quantity,
            })
            .await
            .context("Failed to update plan step")?,
        PlansSubcommand::Remove { plan_step_id } => repo
            .remove_plan_step(plan_step_id)
            .await
            .context("Failed to remove plan step")?,
    };

    output::day_plans(&plans);
    Ok(())
}
