//! Products and their process steps.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::directory::{Employee, Process};
use crate::types::SerialNumber;

/// A physical unit moving through a multi-step production process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub id: i64,
    pub serial_number: String,
    #[serde(rename = "work_process")]
    pub process: Process,
    pub created_at: String,
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl Product {
    /// The step an operator should look at first: the earliest step that
    /// is not done, or the last step once everything is done.
    pub fn current_step(&self) -> Option<&Step> {
        self.steps
            .iter()
            .find(|step| !step.is_done())
            .or_else(|| self.steps.last())
    }

    /// Find the step at a given position in the process.
    pub fn step_with_order(&self, order: u32) -> Option<&Step> {
        self.steps
            .iter()
            .find(|step| step.step_definition.order == order)
    }

    /// True once every step has been closed.
    pub fn is_complete(&self) -> bool {
        !self.steps.is_empty() && self.steps.iter().all(Step::is_done)
    }
}

/// Request body for creating a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductCreate {
    pub process_id: i64,
    pub serial_number: SerialNumber,
    pub created_at: DateTime<Utc>,
}

impl ProductCreate {
    /// A product created now on the given process.
    pub fn new(serial_number: SerialNumber, process_id: i64) -> Self {
        Self {
            process_id,
            serial_number,
            created_at: Utc::now(),
        }
    }
}

/// Lifecycle status a manager can put a product into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    /// Back in the regular flow (restored from scrap).
    Normal,
    /// Sent back for rework.
    Rework,
    /// Written off.
    Scrap,
}

/// One stage of a product's process, done or pending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub id: i64,
    pub product_id: i64,
    pub step_definition: StepDefinition,
    pub status: StepStatus,
    #[serde(default)]
    pub performed_by_id: Option<i64>,
    #[serde(default)]
    pub performed_by: Option<Employee>,
    #[serde(default)]
    pub performed_at: Option<String>,
}

impl Step {
    pub fn is_done(&self) -> bool {
        self.status == StepStatus::Done
    }

    pub fn name(&self) -> &str {
        &self.step_definition.template.name
    }
}

/// Step completion state. Anything the server sends besides `done` counts
/// as pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    #[serde(alias = "DONE", alias = "Done")]
    Done,
    #[serde(other)]
    Pending,
}

/// A step's position and template within a process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepDefinition {
    pub id: i64,
    #[serde(default)]
    pub order: u32,
    pub template: StepTemplate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepTemplate {
    pub name: String,
}
