use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::{StatusCode, header},
    response::IntoResponse,
};
use serde_json::Value;

use provisioning_core::patch::{PatchOperation, conform};

use crate::domain::types::{AccessKey, NewAccessKey};
use crate::error::ProvisioningError;
use crate::handlers::{json_body, path_param};
use crate::state::AppState;
use crate::usecase::access_key::{
    CreateAccessKeyUseCase, GetAccessKeyUseCase, PatchAccessKeyUseCase,
};

// ── GET /api/AccessKeys/{id} ─────────────────────────────────────────────────

pub async fn get_access_key(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<AccessKey>, ProvisioningError> {
    let id = path_param(id)?;
    let usecase = GetAccessKeyUseCase {
        access_keys: state.access_key_repo(),
    };
    Ok(Json(usecase.execute(id).await?))
}

// ── POST /api/AccessKeys ─────────────────────────────────────────────────────

pub async fn create_access_key(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, ProvisioningError> {
    let input: NewAccessKey = conform(json_body(body)?)?;
    let usecase = CreateAccessKeyUseCase {
        access_keys: state.access_key_repo(),
    };
    let key = usecase.execute(input).await?;
    let location = format!("/api/AccessKeys/{}", key.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(key)))
}

// ── PATCH /api/AccessKeys/{id} ───────────────────────────────────────────────

pub async fn patch_access_key(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    body: Result<Json<Vec<PatchOperation>>, JsonRejection>,
) -> Result<Json<AccessKey>, ProvisioningError> {
    let id = path_param(id)?;
    let operations = json_body(body)?;
    let usecase = PatchAccessKeyUseCase {
        access_keys: state.access_key_repo(),
    };
    Ok(Json(usecase.execute(id, &operations).await?))
}
