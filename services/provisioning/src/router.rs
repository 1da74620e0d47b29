use axum::{
    Router,
    routing::{delete, get, patch, post},
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use provisioning_core::health::healthz;
use provisioning_core::middleware::{propagate_request_id_layer, request_id_layer};

use crate::handlers::{
    access_keys::{create_access_key, get_access_key, patch_access_key},
    health::readyz,
    roles::{create_role, list_roles},
    users::{
        assign_access_key, create_user, delete_user, get_user, get_user_by_employee_id,
        grant_authorization, list_access_keys, patch_user, revoke_access_key,
        revoke_authorization,
    },
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Access keys
        .route("/api/AccessKeys", post(create_access_key))
        .route("/api/AccessKeys/{id}", get(get_access_key))
        .route("/api/AccessKeys/{id}", patch(patch_access_key))
        // Roles
        .route("/api/Roles", get(list_roles))
        .route("/api/Roles", post(create_role))
        // Users
        .route("/api/Users", post(create_user))
        .route(
            "/api/Users/ByEmployeeId/{employee_id}",
            get(get_user_by_employee_id),
        )
        .route("/api/Users/{id}", get(get_user))
        .route("/api/Users/{id}", patch(patch_user))
        .route("/api/Users/{id}", delete(delete_user))
        // Authorizations
        .route("/api/Users/Authorizations/Add", post(grant_authorization))
        .route(
            "/api/Users/Authorizations/Delete",
            delete(revoke_authorization),
        )
        // Access key assignments
        .route("/api/Users/AccessKeys", get(list_access_keys))
        .route("/api/Users/AccessKeys/Add", post(assign_access_key))
        .route("/api/Users/AccessKeys/Delete", delete(revoke_access_key))
        .layer(
            ServiceBuilder::new()
                .layer(request_id_layer())
                .layer(TraceLayer::new_for_http())
                .layer(propagate_request_id_layer()),
        )
        .with_state(state)
}
