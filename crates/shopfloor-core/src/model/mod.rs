//! Wire and domain model types.
//!
//! Field names follow the server's snake_case JSON.

mod auth;
mod device;
mod directory;
mod plan;
mod product;
mod user;

pub use auth::{LoginRequest, LoginResponse};
pub use device::{DeviceInfo, DeviceRequest, DeviceResponse, QrData};
pub use directory::{Employee, Process};
pub use plan::{DayPlan, DayPlanStep, DayPlanStepCreate, DayPlanStepUpdate};
pub use product::{
    Product, ProductCreate, ProductStatus, Step, StepDefinition, StepStatus, StepTemplate,
};
pub use user::{Profile, UserData, UserRole};
