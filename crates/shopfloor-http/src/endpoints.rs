//! Endpoint paths, relative to the API root.

use shopfloor_core::SerialNumber;
use shopfloor_core::model::ProductStatus;

pub const LOGIN: &str = "auth/login_json";
pub const PRODUCTS: &str = "products/";
pub const PROCESSES: &str = "processes/";
pub const EMPLOYEES: &str = "employees/";
pub const DAILY_PLANS: &str = "daily-plans";
pub const PLAN_STEPS: &str = "daily-plans/steps";
pub const CLOSE_STEP: &str = "products_steps/";
pub const CHANGE_PRODUCT_PROCESS: &str = "products/change_product_process";
pub const NEW_DEVICE: &str = "users/new-device";

pub fn product(serial: &SerialNumber) -> String {
    format!("products/{}", serial)
}

pub fn product_status(product_id: i64, status: ProductStatus) -> String {
    let action = match status {
        ProductStatus::Scrap => "send_to_scrap",
        ProductStatus::Rework => "send_to_rework",
        ProductStatus::Normal => "restore_from_scrap",
    };
    format!("products/{}/{}", product_id, action)
}

pub fn step_performer(step_id: i64) -> String {
    format!("products_steps/{}/change_performer", step_id)
}

pub fn plan_step(plan_step_id: i64) -> String {
    format!("{}/{}", PLAN_STEPS, plan_step_id)
}

pub fn employee_qr(employee_id: i64) -> String {
    format!("employees/{}/qr", employee_id)
}
