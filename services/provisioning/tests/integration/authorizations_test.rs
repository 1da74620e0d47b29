use axum::http::StatusCode;
use serde_json::{Value, json};

use provisioning::domain::repository::AuthorizationRepository;

use crate::helpers::{create_user, john, server_for, test_server, test_state};

#[tokio::test]
async fn should_grant_authorization_without_exposing_row_id() {
    let server = test_server().await;
    let response = server
        .post("/api/Users/Authorizations/Add")
        .json(&json!({"roleId": 2, "userId": 1}))
        .await;
    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.json::<Value>(), json!({"roleId": 2, "userId": 1}));
}

#[tokio::test]
async fn should_reject_grant_without_role() {
    let server = test_server().await;
    let response = server
        .post("/api/Users/Authorizations/Add")
        .json(&json!({"userId": 1}))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["kind"], "VALIDATION_FAILED");
}

#[tokio::test]
async fn should_persist_grants_and_revoke_only_matching_role() {
    let state = test_state().await;
    let server = server_for(state.clone());
    let user_id = create_user(&server, john()).await;
    for role_id in [2, 3] {
        server
            .post("/api/Users/Authorizations/Add")
            .json(&json!({"roleId": role_id, "userId": user_id}))
            .await
            .assert_status(StatusCode::CREATED);
    }

    let repo = state.authorization_repo();
    let user_id = i32::try_from(user_id).unwrap();
    let granted = repo.list_by_user(user_id).await.unwrap();
    let roles: Vec<i32> = granted.iter().map(|a| a.role_id).collect();
    assert_eq!(roles, [2, 3]);

    server
        .delete("/api/Users/Authorizations/Delete")
        .add_query_param("userId", user_id)
        .add_query_param("roleId", 2)
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let remaining = repo.list_by_user(user_id).await.unwrap();
    let roles: Vec<i32> = remaining.iter().map(|a| a.role_id).collect();
    assert_eq!(roles, [3]);
}

#[tokio::test]
async fn should_leave_store_untouched_revoking_absent_role() {
    let state = test_state().await;
    let server = server_for(state.clone());
    let user_id = create_user(&server, john()).await;
    server
        .post("/api/Users/Authorizations/Add")
        .json(&json!({"roleId": 2, "userId": user_id}))
        .await
        .assert_status(StatusCode::CREATED);

    server
        .delete("/api/Users/Authorizations/Delete")
        .add_query_param("userId", user_id)
        .add_query_param("roleId", 9)
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let user_id = i32::try_from(user_id).unwrap();
    let remaining = state.authorization_repo().list_by_user(user_id).await.unwrap();
    assert_eq!(remaining.len(), 1);
}

#[tokio::test]
async fn should_succeed_revoking_absent_authorization() {
    let server = test_server().await;
    let user_id = create_user(&server, john()).await;

    server
        .delete("/api/Users/Authorizations/Delete")
        .add_query_param("UserId", user_id)
        .add_query_param("RoleId", 9)
        .await
        .assert_status(StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn should_return_not_found_revoking_for_missing_user() {
    let server = test_server().await;
    let response = server
        .delete("/api/Users/Authorizations/Delete")
        .add_query_param("userId", 5)
        .add_query_param("roleId", 2)
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["kind"], "USER_NOT_FOUND");
}

#[tokio::test]
async fn should_reject_revoke_without_query() {
    let server = test_server().await;
    let response = server.delete("/api/Users/Authorizations/Delete").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["kind"], "INVALID_REQUEST");
}
