use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::Value;

use provisioning_core::patch::conform;

use crate::domain::types::{NewRole, Role};
use crate::error::ProvisioningError;
use crate::handlers::json_body;
use crate::state::AppState;
use crate::usecase::role::{CreateRoleUseCase, ListRolesUseCase};

// ── GET /api/Roles ───────────────────────────────────────────────────────────

pub async fn list_roles(State(state): State<AppState>) -> Result<Json<Vec<Role>>, ProvisioningError> {
    let usecase = ListRolesUseCase {
        repo: state.role_repo(),
    };
    Ok(Json(usecase.execute().await?))
}

// ── POST /api/Roles ──────────────────────────────────────────────────────────

pub async fn create_role(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Role>), ProvisioningError> {
    let input: NewRole = conform(json_body(body)?)?;
    let usecase = CreateRoleUseCase {
        repo: state.role_repo(),
    };
    let role = usecase.execute(input).await?;
    Ok((StatusCode::CREATED, Json(role)))
}
