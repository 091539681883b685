//! One method per endpoint, returning raw exchanges.

use chrono::NaiveDate;

use shopfloor_core::model::{
    DayPlanStepCreate, DayPlanStepUpdate, DeviceRequest, ProductCreate, ProductStatus,
};
use shopfloor_core::{Exchange, Result, SerialNumber};

use crate::endpoints;
use crate::request::ApiRequest;
use crate::transport::AuthedTransport;

/// Typed endpoint calls over an [`AuthedTransport`].
///
/// Results are left unclassified. Methods that take a body return
/// `Result<Exchange>` because encoding the body can fail before anything
/// is sent.
#[derive(Debug)]
pub struct ApiClient {
    transport: AuthedTransport,
}

impl ApiClient {
    pub fn new(transport: AuthedTransport) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &AuthedTransport {
        &self.transport
    }

    pub async fn get_product(&self, serial: &SerialNumber) -> Exchange {
        self.transport
            .execute(&ApiRequest::get(endpoints::product(serial)))
            .await
    }

    pub async fn post_product(&self, product: &ProductCreate) -> Result<Exchange> {
        let request = ApiRequest::post(endpoints::PRODUCTS).with_json(product)?;
        Ok(self.transport.execute(&request).await)
    }

    pub async fn get_processes(&self) -> Exchange {
        self.transport
            .execute(&ApiRequest::get(endpoints::PROCESSES))
            .await
    }

    pub async fn get_employees(&self) -> Exchange {
        self.transport
            .execute(&ApiRequest::get(endpoints::EMPLOYEES))
            .await
    }

    pub async fn get_day_plans(&self, date: NaiveDate) -> Exchange {
        let request = ApiRequest::get(endpoints::DAILY_PLANS)
            .with_query("plan_date", date.format("%Y-%m-%d"));
        self.transport.execute(&request).await
    }

    pub async fn post_step(&self, step_id: i64) -> Exchange {
        let request = ApiRequest::post(endpoints::CLOSE_STEP).with_query("step_id", step_id);
        self.transport.execute(&request).await
    }

    pub async fn change_product_process(&self, product_id: i64, process_id: i64) -> Exchange {
        let request = ApiRequest::post(endpoints::CHANGE_PRODUCT_PROCESS)
            .with_query("product_id", product_id)
            .with_query("new_process_id", process_id);
        self.transport.execute(&request).await
    }

    pub async fn change_product_status(&self, product_id: i64, status: ProductStatus) -> Exchange {
        self.transport
            .execute(&ApiRequest::post(endpoints::product_status(product_id, status)))
            .await
    }

    pub async fn change_step_performer(&self, step_id: i64, employee_id: i64) -> Exchange {
        let request = ApiRequest::post(endpoints::step_performer(step_id))
            .with_query("new_employee_id", employee_id);
        self.transport.execute(&request).await
    }

    pub async fn post_plan_step(&self, step: &DayPlanStepCreate) -> Result<Exchange> {
        let request = ApiRequest::post(endpoints::PLAN_STEPS).with_json(step)?;
        Ok(self.transport.execute(&request).await)
    }

    pub async fn update_plan_step(&self, step: &DayPlanStepUpdate) -> Result<Exchange> {
        let request = ApiRequest::post(endpoints::plan_step(step.step_id)).with_json(step)?;
        Ok(self.transport.execute(&request).await)
    }

    pub async fn delete_plan_step(&self, plan_step_id: i64) -> Exchange {
        self.transport
            .execute(&ApiRequest::delete(endpoints::plan_step(plan_step_id)))
            .await
    }

    pub async fn post_device(&self, device: &DeviceRequest) -> Result<Exchange> {
        let request = ApiRequest::post(endpoints::NEW_DEVICE).with_json(device)?;
        Ok(self.transport.execute(&request).await)
    }

    pub async fn get_employee_qr(&self, employee_id: i64) -> Exchange {
        self.transport
            .execute(&ApiRequest::get(endpoints::employee_qr(employee_id)))
            .await
    }
}
