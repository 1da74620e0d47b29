use axum_test::TestServer;
use sea_orm::{ConnectOptions, Database};
use sea_orm_migration::MigratorTrait;
use serde_json::{Value, json};

use provisioning::router::build_router;
use provisioning::state::AppState;
use provisioning_migration::Migrator;

/// Application state over a fresh, migrated in-memory database.
///
/// A single pooled connection keeps every request on the same in-memory
/// database.
pub async fn test_state() -> AppState {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    let db = Database::connect(options).await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    AppState { db }
}

/// Full router over [`test_state`].
pub async fn test_server() -> TestServer {
    server_for(test_state().await)
}

/// Full router sharing `state`'s pool, so tests can inspect the store directly.
pub fn server_for(state: AppState) -> TestServer {
    TestServer::new(build_router(state)).unwrap()
}

pub fn john() -> Value {
    json!({
        "employeeId": "1000000",
        "firstName": "John",
        "lastName": "Doe",
        "email": "j@x.com",
        "active": false,
    })
}

/// Create a user and return its generated id.
pub async fn create_user(server: &TestServer, payload: Value) -> i64 {
    let response = server.post("/api/Users").json(&payload).await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<Value>()["id"].as_i64().unwrap()
}

/// Create an access key and return its generated id.
pub async fn create_access_key(server: &TestServer, display_name: &str) -> i64 {
    let response = server
        .post("/api/AccessKeys")
        .json(&json!({"displayName": display_name, "type": "Employee", "isActive": true}))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<Value>()["id"].as_i64().unwrap()
}
