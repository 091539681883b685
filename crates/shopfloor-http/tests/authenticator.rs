//! Token attachment and refresh behaviour against a mock server.

mod common;

use std::sync::Arc;
use std::time::Duration;

use futures_util::future::join_all;
use serde_json::json;
use shopfloor_core::error::ApiError;
use shopfloor_core::{CredentialStore, Error, Repository, SessionToken};
use shopfloor_http::RefreshGuard;
use shopfloor_store::MemoryCredentialStore;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{api_path, mount_login, registered_store, repository, unauthorized};

fn authorization_headers(requests: &[wiremock::Request], endpoint: &str) -> Vec<Option<String>> {
    requests
        .iter()
        .filter(|r| r.url.path() == api_path(endpoint))
        .map(|r| {
            r.headers
                .get("authorization")
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        })
        .collect()
}

#[tokio::test]
async fn cached_token_is_attached() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(api_path("processes/")))
        .and(header("authorization", "Bearer T0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let repo = repository(&server, registered_store(Some("T0")), RefreshGuard::ChainLength);
    assert_eq!(repo.processes().await.unwrap(), vec![]);
}

#[tokio::test]
async fn no_header_without_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(api_path("employees/")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let repo = repository(&server, Arc::new(MemoryCredentialStore::new()), RefreshGuard::ChainLength);
    repo.employees().await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(authorization_headers(&requests, "employees/"), vec![None]);
}

#[tokio::test]
async fn expired_token_is_refreshed_once_and_retried() {
    let server = MockServer::start().await;
    mount_login(&server, "T1", 1).await;

    Mock::given(method("GET"))
        .and(path(api_path("processes/")))
        .and(header("authorization", "Bearer T1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 7, "name": "Assembly", "description": "", "steps": []}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(api_path("processes/")))
        .respond_with(unauthorized())
        .mount(&server)
        .await;

    let store = registered_store(Some("T0"));
    let repo = repository(&server, store.clone(), RefreshGuard::ChainLength);

    let processes = repo.processes().await.unwrap();

    assert_eq!(processes[0].name, "Assembly");
    assert_eq!(store.token().unwrap(), Some(SessionToken::new("T1")));
}

#[tokio::test]
async fn second_rejection_is_not_refreshed_again() {
    let server = MockServer::start().await;
    mount_login(&server, "T1", 1).await;

    Mock::given(method("GET"))
        .and(path(api_path("processes/")))
        .respond_with(unauthorized())
        .expect(2)
        .mount(&server)
        .await;

    let repo = repository(&server, registered_store(Some("T0")), RefreshGuard::ChainLength);

    let err = repo.processes().await.unwrap_err();
    assert_eq!(
        err,
        Error::Api(ApiError::new(401, None, Some("Not authenticated".to_string())))
    );

    let requests = server.received_requests().await.unwrap();
    assert_eq!(
        authorization_headers(&requests, "processes/"),
        vec![Some("Bearer T0".to_string()), Some("Bearer T1".to_string())]
    );
}

#[tokio::test]
async fn unauthenticated_first_request_logs_in_and_retries_with_new_token() {
    let server = MockServer::start().await;
    mount_login(&server, "T1", 1).await;

    Mock::given(method("GET"))
        .and(path(api_path("employees/")))
        .respond_with(unauthorized())
        .expect(2)
        .mount(&server)
        .await;

    let repo = repository(&server, registered_store(None), RefreshGuard::ChainLength);

    let err = repo.employees().await.unwrap_err();
    assert_eq!(err.status(), Some(401));

    let requests = server.received_requests().await.unwrap();
    assert_eq!(
        authorization_headers(&requests, "employees/"),
        vec![None, Some("Bearer T1".to_string())]
    );
}

#[tokio::test]
async fn header_guard_refuses_when_token_was_sent() {
    let server = MockServer::start().await;
    mount_login(&server, "T1", 0).await;

    Mock::given(method("GET"))
        .and(path(api_path("processes/")))
        .respond_with(unauthorized())
        .expect(1)
        .mount(&server)
        .await;

    let repo = repository(
        &server,
        registered_store(Some("T0")),
        RefreshGuard::AuthorizationHeader,
    );

    assert_eq!(repo.processes().await.unwrap_err().status(), Some(401));
}

#[tokio::test]
async fn header_guard_refreshes_unauthenticated_request() {
    let server = MockServer::start().await;
    mount_login(&server, "T1", 1).await;

    Mock::given(method("GET"))
        .and(path(api_path("processes/")))
        .and(header("authorization", "Bearer T1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(api_path("processes/")))
        .respond_with(unauthorized())
        .expect(1)
        .mount(&server)
        .await;

    let repo = repository(&server, registered_store(None), RefreshGuard::AuthorizationHeader);
    repo.processes().await.unwrap();
}

#[tokio::test]
async fn missing_credentials_surface_the_401() {
    let server = MockServer::start().await;
    mount_login(&server, "T1", 0).await;

    Mock::given(method("GET"))
        .and(path(api_path("processes/")))
        .respond_with(unauthorized())
        .expect(1)
        .mount(&server)
        .await;

    let repo = repository(&server, Arc::new(MemoryCredentialStore::new()), RefreshGuard::ChainLength);

    let err = repo.processes().await.unwrap_err();
    assert_eq!(err.status(), Some(401));
    assert_eq!(err.user_message(), "Not authorized");
}

#[tokio::test]
async fn failed_login_surfaces_the_original_401() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(api_path("auth/login_json")))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({"detail": "Incorrect username or password"})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(api_path("processes/")))
        .respond_with(unauthorized())
        .expect(1)
        .mount(&server)
        .await;

    let store = registered_store(Some("T0"));
    let repo = repository(&server, store.clone(), RefreshGuard::ChainLength);

    let err = repo.processes().await.unwrap_err();
    assert_eq!(
        err,
        Error::Api(ApiError::new(401, None, Some("Not authenticated".to_string())))
    );
    assert_eq!(store.token().unwrap(), Some(SessionToken::new("T0")));
}

#[tokio::test]
async fn concurrent_rejections_share_one_login() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(api_path("auth/login_json")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"access_token": "T1", "token_type": "bearer"}))
                .set_delay(Duration::from_millis(200)),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(api_path("processes/")))
        .and(header("authorization", "Bearer T1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(5)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(api_path("processes/")))
        .respond_with(unauthorized())
        .mount(&server)
        .await;

    let repo = repository(&server, registered_store(Some("T0")), RefreshGuard::ChainLength);

    let results = join_all((0..5).map(|_| repo.processes())).await;
    assert!(results.iter().all(|r| r.is_ok()));
}
