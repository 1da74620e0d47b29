use axum::body::Bytes;
use axum::http::StatusCode;
use serde_json::{Value, json};

use crate::helpers::{create_user, john, server_for, test_server, test_state};

// ── Lifecycle ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_run_full_user_lifecycle() {
    let server = test_server().await;

    let created = server.post("/api/Users").json(&john()).await;
    created.assert_status(StatusCode::CREATED);
    assert_eq!(
        created.header("location").to_str().unwrap(),
        "/api/Users/1"
    );
    let mut expected = john();
    expected["id"] = json!(1);
    assert_eq!(created.json::<Value>(), expected);

    let fetched = server.get("/api/Users/1").await;
    fetched.assert_status_ok();
    assert_eq!(fetched.json::<Value>(), expected);

    let patched = server
        .patch("/api/Users/1")
        .json(&json!([{"op": "replace", "path": "active", "value": true}]))
        .await;
    patched.assert_status_ok();
    assert_eq!(patched.json::<Value>()["active"], json!(true));

    let refetched = server.get("/api/Users/1").await;
    assert_eq!(refetched.json::<Value>()["active"], json!(true));

    server
        .delete("/api/Users/1")
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let gone = server.get("/api/Users/1").await;
    gone.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(gone.json::<Value>()["kind"], "USER_NOT_FOUND");
}

#[tokio::test]
async fn should_ignore_client_supplied_id() {
    let server = test_server().await;
    let mut payload = john();
    payload["id"] = json!(42);
    let id = create_user(&server, payload).await;
    assert_eq!(id, 1);
    server
        .get("/api/Users/42")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_return_not_found_when_deleting_missing_user() {
    let server = test_server().await;
    server
        .delete("/api/Users/7")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

// ── ByEmployeeId ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_find_user_by_employee_id() {
    let server = test_server().await;
    let id = create_user(&server, john()).await;

    let response = server.get("/api/Users/ByEmployeeId/1000000").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["id"], json!(id));

    server
        .get("/api/Users/ByEmployeeId/9999999")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_fail_when_employee_id_is_shared() {
    let server = test_server().await;
    create_user(&server, john()).await;
    create_user(&server, john()).await;

    let response = server.get("/api/Users/ByEmployeeId/1000000").await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.json::<Value>()["kind"], "INTERNAL");
}

// ── Validation ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_reject_create_without_required_fields() {
    let server = test_server().await;
    let response = server
        .post("/api/Users")
        .json(&json!({"employeeId": "1000000", "active": false}))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert_eq!(body["kind"], "VALIDATION_FAILED");
    assert_eq!(body["errors"]["firstName"], json!(["FirstName is required"]));
    assert_eq!(body["errors"]["email"], json!(["Email is required"]));
}

#[tokio::test]
async fn should_reject_malformed_body() {
    let server = test_server().await;
    let response = server
        .post("/api/Users")
        .bytes(Bytes::from_static(b"{\"employeeId\":"))
        .content_type("application/json")
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["kind"], "INVALID_REQUEST");
}

#[tokio::test]
async fn should_reject_patch_on_unknown_path() {
    let server = test_server().await;
    let id = create_user(&server, john()).await;

    let response = server
        .patch(&format!("/api/Users/{id}"))
        .json(&json!([{"op": "replace", "path": "nickname", "value": "JD"}]))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["errors"]["nickname"],
        json!(["The target location specified by path 'nickname' was not found."])
    );
}

#[tokio::test]
async fn should_not_persist_patch_removing_required_field() {
    let server = test_server().await;
    let id = create_user(&server, john()).await;

    server
        .patch(&format!("/api/Users/{id}"))
        .json(&json!([{"op": "remove", "path": "/email"}]))
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    let fetched = server.get(&format!("/api/Users/{id}")).await;
    assert_eq!(fetched.json::<Value>()["email"], "j@x.com");
}

#[tokio::test]
async fn should_return_not_found_when_patching_missing_user() {
    let server = test_server().await;
    server
        .patch("/api/Users/3")
        .json(&json!([{"op": "replace", "path": "active", "value": true}]))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

// ── Middleware ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_echo_request_id() {
    let server = test_server().await;
    let response = server.get("/healthz").await;
    response.assert_status_ok();
    assert!(!response.header("x-request-id").is_empty());
}

#[tokio::test]
async fn should_reject_non_numeric_user_id() {
    let server = test_server().await;
    let response = server.get("/api/Users/abc").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["kind"], "INVALID_REQUEST");

    server
        .delete("/api/Users/abc")
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn should_report_ready_when_database_answers() {
    let server = test_server().await;
    server.get("/readyz").await.assert_status_ok();
}

#[tokio::test]
async fn should_report_unavailable_when_database_is_closed() {
    let state = test_state().await;
    let server = server_for(state.clone());
    state.db.close().await.unwrap();
    server
        .get("/readyz")
        .await
        .assert_status(StatusCode::SERVICE_UNAVAILABLE);
}
