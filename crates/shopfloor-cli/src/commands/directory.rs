//! Reference data listings.

use anyhow::Result;
use clap::Args;

use shopfloor_core::Repository;

use crate::context::AppContext;
use crate::output;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Print the raw JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn processes(args: ListArgs, ctx: &AppContext) -> Result<()> {
    let processes = ctx.repository.processes().await?;
    if args.json {
        return output::json_pretty(&processes);
    }

    for process in &processes {
        println!("{:>4}  {}", process.id, process.name);
        for step in &process.steps {
            println!("        {}. {}", step.order, step.template.name);
        }
    }
    Ok(())
}

pub async fn employees(args: ListArgs, ctx: &AppContext) -> Result<()> {
    let employees = ctx.repository.employees().await?;
    if args.json {
        return output::json_pretty(&employees);
    }

    for employee in &employees {
        println!(
            "{:>4}  {:<30} {}",
            employee.id,
            employee.name,
            employee.role.as_deref().unwrap_or("")
        );
    }
    Ok(())
}
