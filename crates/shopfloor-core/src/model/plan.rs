//! Daily work plans.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::directory::Employee;
use super::product::StepDefinition;

/// One employee's plan for one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlan {
    pub id: i64,
    pub employee_id: i64,
    pub date: NaiveDate,
    pub employee: Employee,
    #[serde(default)]
    pub steps: Vec<DayPlanStep>,
}

impl DayPlan {
    pub fn planned_total(&self) -> u64 {
        self.steps.iter().map(|s| u64::from(s.planned_quantity)).sum()
    }

    pub fn actual_total(&self) -> u64 {
        self.steps.iter().map(|s| u64::from(s.actual_quantity)).sum()
    }
}

/// A planned quantity of one step definition inside a day plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlanStep {
    pub id: i64,
    pub daily_plan_id: i64,
    pub step_definition_id: i64,
    pub planned_quantity: u32,
    #[serde(default)]
    pub actual_quantity: u32,
    #[serde(default)]
    pub work_process: String,
    pub step_definition: StepDefinition,
}

/// Request body for adding a step to an employee's plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayPlanStepCreate {
    pub plan_date: NaiveDate,
    pub employee_id: i64,
    pub step_id: i64,
    pub planned_quantity: u32,
}

/// Request body for changing an existing plan step.
///
/// `step_id` is the id of the plan step being changed, not of the step
/// definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayPlanStepUpdate {
    pub step_id: i64,
    pub plan_date: NaiveDate,
    pub step_definition_id: i64,
    pub employee_id: i64,
    pub planned_quantity: u32,
}
