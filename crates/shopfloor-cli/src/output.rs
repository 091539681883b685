//! Output formatting helpers.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use shopfloor_core::Error;
use shopfloor_core::model::{DayPlan, Product, Step};

/// Print a success message.
pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

/// Print an error message.
pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Print a failed command. Domain errors show their user-facing message
/// followed by the full cause chain.
pub fn failure(err: &anyhow::Error) {
    match err.downcast_ref::<Error>() {
        Some(domain) => {
            error(&domain.user_message());
            eprintln!("  {}", format!("{:#}", err).dimmed());
            if let Error::Api(api) = domain {
                if api.is_auth_error() {
                    eprintln!("  Run `shopfloor login` to sign in again.");
                }
            }
        }
        None => error(&format!("{:#}", err)),
    }
}

/// Print a labeled field.
pub fn field(label: &str, value: &str) {
    println!("{}: {}", label.dimmed(), value);
}

/// Print a value as pretty-printed JSON.
pub fn json_pretty<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

/// Print a product and its steps.
pub fn product(product: &Product) {
    field("Serial", &product.serial_number);
    field("Id", &product.id.to_string());
    field("Process", &product.process.name);
    field("Created", &product.created_at);
    if let Some(current) = product.current_step() {
        field("Current step", current.name());
    }
    println!();
    for step in &product.steps {
        self::step(step);
    }
}

fn step(step: &Step) {
    let marker = if step.is_done() {
        "done".green()
    } else {
        "pending".yellow()
    };
    let performer = step
        .performed_by
        .as_ref()
        .map(|e| e.name.as_str())
        .unwrap_or("-");
    println!(
        "  {:>3}. {:<30} {:<8} {} [step {}]",
        step.step_definition.order,
        step.name(),
        marker,
        performer,
        step.id
    );
}

/// Print day plans with their planned and actual totals.
pub fn day_plans(plans: &[DayPlan]) {
    if plans.is_empty() {
        println!("{}", "No plans for this date".dimmed());
        return;
    }
    for plan in plans {
        println!(
            "{} ({}/{})",
            plan.employee.name.bold(),
            plan.actual_total(),
            plan.planned_total()
        );
        for step in &plan.steps {
            println!(
                "  [{}] {:<30} {}/{}",
                step.id,
                step.step_definition.template.name,
                step.actual_quantity,
                step.planned_quantity
            );
        }
    }
}
