//! Shared fixtures for the HTTP tests.

#![allow(dead_code)]

use std::sync::Arc;

use serde_json::{Value, json};
use shopfloor_core::{BaseUrl, CredentialStore, Credentials, SessionToken};
use shopfloor_http::{ClientConfig, HttpRepository, RefreshGuard};
use shopfloor_store::MemoryCredentialStore;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const API: &str = "/api/v1";

/// Client configuration pointing at the mock server.
pub fn config(server: &MockServer) -> ClientConfig {
    ClientConfig::new(BaseUrl::new(format!("{}{}/", server.uri(), API)).unwrap())
}

pub fn api_path(endpoint: &str) -> String {
    format!("{}/{}", API, endpoint)
}

/// A store holding credentials and, optionally, a cached token.
pub fn registered_store(token: Option<&str>) -> Arc<MemoryCredentialStore> {
    let store = MemoryCredentialStore::with_credentials(&Credentials::new(
        "worker@example.com",
        "Ab3!xyz9",
    ));
    if let Some(token) = token {
        store.save_token(&SessionToken::new(token)).unwrap();
    }
    Arc::new(store)
}

pub fn repository(
    server: &MockServer,
    store: Arc<MemoryCredentialStore>,
    guard: RefreshGuard,
) -> HttpRepository {
    HttpRepository::new(&config(server).with_refresh_guard(guard), store).unwrap()
}

/// Mount a login endpoint issuing `token`, expected to be hit `times` times.
pub async fn mount_login(server: &MockServer, token: &str, times: u64) {
    Mock::given(method("POST"))
        .and(path(api_path("auth/login_json")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": token,
            "token_type": "bearer"
        })))
        .expect(times)
        .named("login")
        .mount(server)
        .await;
}

pub fn unauthorized() -> ResponseTemplate {
    ResponseTemplate::new(401).set_body_json(json!({"detail": "Not authenticated"}))
}

pub fn product_json(serial: &str) -> Value {
    json!({
        "id": 1,
        "serial_number": serial,
        "work_process": {"id": 7, "name": "Assembly", "description": "", "steps": []},
        "created_at": "2025-03-01T08:00:00",
        "steps": [
            {
                "id": 100,
                "product_id": 1,
                "step_definition": {"id": 10, "order": 1, "template": {"name": "Frame"}},
                "status": "done",
                "performed_by_id": 2,
                "performed_by": {"id": 2, "name": "Ivanova"},
                "performed_at": "2025-03-01T09:00:00"
            },
            {
                "id": 101,
                "product_id": 1,
                "step_definition": {"id": 11, "order": 2, "template": {"name": "Wiring"}},
                "status": "pending",
                "performed_by_id": null,
                "performed_by": null,
                "performed_at": null
            }
        ]
    })
}
