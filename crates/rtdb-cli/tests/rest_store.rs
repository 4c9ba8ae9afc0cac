//! CLI integration tests against a mock REST database.

mod common;

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{run_cli_failure, run_cli_success};

fn mock_db_url(server: &MockServer) -> String {
    format!("http://127.0.0.1:{}", server.address().port())
}

#[tokio::test]
async fn test_validate_over_rest() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/1.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "first_name": "Ada",
            "last_name": "Lovelace"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let url = mock_db_url(&server);
    let stdout = tokio::task::spawn_blocking(move || run_cli_success(&["validate"], &url))
        .await
        .unwrap();

    assert!(stdout.contains("Lovelace"));
}

#[tokio::test]
async fn test_auth_flag_is_forwarded() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/4.json"))
        .and(query_param("auth", "secret-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "first_name": "Katherine"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let url = mock_db_url(&server);
    let stdout = tokio::task::spawn_blocking(move || {
        run_cli_success(&["get-document", "4", "--auth", "secret-token"], &url)
    })
    .await
    .unwrap();

    assert!(stdout.contains("Katherine"));
}

#[tokio::test]
async fn test_permission_denied_is_reported() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/1.json"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": "Permission denied"
        })))
        .mount(&server)
        .await;

    let url = mock_db_url(&server);
    let stderr = tokio::task::spawn_blocking(move || run_cli_failure(&["get-document", "1"], &url))
        .await
        .unwrap();

    assert!(stderr.contains("Failed to get document 1"));
    assert!(stderr.contains("Permission denied"));
}
