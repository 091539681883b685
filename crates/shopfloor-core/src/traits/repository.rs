//! Repository trait.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::Result;
use crate::classify::Lookup;
use crate::model::{
    DayPlan, DayPlanStepCreate, DayPlanStepUpdate, DeviceRequest, DeviceResponse, Employee,
    Process, Product, ProductCreate, ProductStatus, QrData,
};
use crate::types::SerialNumber;

/// Typed access to the work-tracking service.
///
/// Every method returns either the decoded value or a classified
/// [`Error`](crate::Error); nothing below this boundary leaks out.
#[async_trait]
pub trait Repository: Send + Sync {
    /// Look up a product by serial number. A 404 is [`Lookup::Absent`].
    async fn product(&self, serial: &SerialNumber) -> Result<Lookup<Product>>;

    /// Create a product on a process.
    async fn create_product(&self, product: &ProductCreate) -> Result<Product>;

    /// List all production processes.
    async fn processes(&self) -> Result<Vec<Process>>;

    /// List all employees.
    async fn employees(&self) -> Result<Vec<Employee>>;

    /// List day plans for a date.
    async fn day_plans(&self, date: NaiveDate) -> Result<Vec<DayPlan>>;

    /// Mark a product step as done by the current user.
    async fn close_step(&self, step_id: i64) -> Result<Product>;

    /// Move a product to another process.
    async fn change_product_process(&self, product_id: i64, process_id: i64) -> Result<Product>;

    /// Scrap, rework or restore a product.
    async fn change_product_status(&self, product_id: i64, status: ProductStatus)
    -> Result<Product>;

    /// Reassign who performed a step.
    async fn change_step_performer(&self, step_id: i64, employee_id: i64) -> Result<Product>;

    /// Add a step to an employee's day plan.
    async fn add_plan_step(&self, step: &DayPlanStepCreate) -> Result<Vec<DayPlan>>;

    /// Change a planned step.
    async fn update_plan_step(&self, step: &DayPlanStepUpdate) -> Result<Vec<DayPlan>>;

    /// Remove a planned step.
    async fn remove_plan_step(&self, plan_step_id: i64) -> Result<Vec<DayPlan>>;

    /// Bind this device to a user.
    async fn register_device(&self, device: &DeviceRequest) -> Result<DeviceResponse>;

    /// Fetch the registration QR payload for an employee.
    async fn employee_qr(&self, employee_id: i64) -> Result<QrData>;
}
