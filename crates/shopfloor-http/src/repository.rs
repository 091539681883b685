//! HTTP-backed repository.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::{debug, instrument};

use shopfloor_core::model::{
    DayPlan, DayPlanStepCreate, DayPlanStepUpdate, DeviceRequest, DeviceResponse, Employee,
    Process, Product, ProductCreate, ProductStatus, QrData,
};
use shopfloor_core::{
    CredentialStore, LoginExchange, Lookup, Repository, Result, SerialNumber, classify,
    classify_lookup,
};

use crate::api::ApiClient;
use crate::auth::Authenticator;
use crate::client::HttpClient;
use crate::config::ClientConfig;
use crate::login::HttpLoginExchange;
use crate::transport::AuthedTransport;

/// [`Repository`] over the REST API.
///
/// Every call goes through the authenticated transport and is classified
/// exactly once, here.
#[derive(Debug)]
pub struct HttpRepository {
    api: ApiClient,
}

impl HttpRepository {
    /// Wire up a repository with the HTTP login exchange.
    pub fn new(config: &ClientConfig, store: Arc<dyn CredentialStore>) -> Result<Self> {
        let login = Arc::new(HttpLoginExchange::new(config)?);
        Self::with_login(config, store, login)
    }

    /// Wire up a repository with a custom login exchange.
    pub fn with_login(
        config: &ClientConfig,
        store: Arc<dyn CredentialStore>,
        login: Arc<dyn LoginExchange>,
    ) -> Result<Self> {
        let auth = Authenticator::new(store, login, config.refresh_guard);
        let transport = AuthedTransport::new(HttpClient::new(config)?, auth);
        Ok(Self {
            api: ApiClient::new(transport),
        })
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }
}

#[async_trait]
impl Repository for HttpRepository {
    #[instrument(skip(self, serial), fields(%serial))]
    async fn product(&self, serial: &SerialNumber) -> Result<Lookup<Product>> {
        let lookup = classify_lookup(&self.api.get_product(serial).await)?;
        if lookup.is_absent() {
            debug!("Product not found");
        }
        Ok(lookup)
    }

    #[instrument(skip_all, fields(serial = %product.serial_number))]
    async fn create_product(&self, product: &ProductCreate) -> Result<Product> {
        classify(&self.api.post_product(product).await?)
    }

    async fn processes(&self) -> Result<Vec<Process>> {
        classify(&self.api.get_processes().await)
    }

    async fn employees(&self) -> Result<Vec<Employee>> {
        classify(&self.api.get_employees().await)
    }

    #[instrument(skip(self))]
    async fn day_plans(&self, date: NaiveDate) -> Result<Vec<DayPlan>> {
        classify(&self.api.get_day_plans(date).await)
    }

    #[instrument(skip(self))]
    async fn close_step(&self, step_id: i64) -> Result<Product> {
        classify(&self.api.post_step(step_id).await)
    }

    #[instrument(skip(self))]
    async fn change_product_process(&self, product_id: i64, process_id: i64) -> Result<Product> {
        classify(&self.api.change_product_process(product_id, process_id).await)
    }

    #[instrument(skip(self))]
    async fn change_product_status(
        &self,
        product_id: i64,
        status: ProductStatus,
    ) -> Result<Product> {
        classify(&self.api.change_product_status(product_id, status).await)
    }

    #[instrument(skip(self))]
    async fn change_step_performer(&self, step_id: i64, employee_id: i64) -> Result<Product> {
        classify(&self.api.change_step_performer(step_id, employee_id).await)
    }

    #[instrument(skip_all, fields(employee_id = step.employee_id))]
    async fn add_plan_step(&self, step: &DayPlanStepCreate) -> Result<Vec<DayPlan>> {
        classify(&self.api.post_plan_step(step).await?)
    }

    #[instrument(skip_all, fields(plan_step_id = step.step_id))]
    async fn update_plan_step(&self, step: &DayPlanStepUpdate) -> Result<Vec<DayPlan>> {
        classify(&self.api.update_plan_step(step).await?)
    }

    #[instrument(skip(self))]
    async fn remove_plan_step(&self, plan_step_id: i64) -> Result<Vec<DayPlan>> {
        classify(&self.api.delete_plan_step(plan_step_id).await)
    }

    #[instrument(skip_all, fields(user_id = device.user_id))]
    async fn register_device(&self, device: &DeviceRequest) -> Result<DeviceResponse> {
        classify(&self.api.post_device(device).await?)
    }

    #[instrument(skip(self))]
    async fn employee_qr(&self, employee_id: i64) -> Result<QrData> {
        classify(&self.api.get_employee_qr(employee_id).await)
    }
}
