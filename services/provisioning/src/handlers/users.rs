use axum::{
    Json,
    extract::{
        Path, RawQuery, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::{StatusCode, header},
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::Value;

use provisioning_core::patch::{PatchOperation, conform};

use crate::domain::types::{
    AccessKey, AccessKeyAssignment, NewAccessKeyAssignment, NewRoleAuthorization, NewUser,
    RoleAuthorization, User,
};
use crate::error::ProvisioningError;
use crate::handlers::{json_body, parse_query, path_param};
use crate::state::AppState;
use crate::usecase::access_key::{
    AssignAccessKeyUseCase, ListAssignedAccessKeysUseCase, RevokeAccessKeyUseCase,
};
use crate::usecase::authorization::{GrantAuthorizationUseCase, RevokeAuthorizationUseCase};
use crate::usecase::user::{
    CreateUserUseCase, DeleteUserUseCase, GetUserByEmployeeIdUseCase, GetUserUseCase,
    PatchUserUseCase,
};

// ── Query params ─────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UserQuery {
    #[serde(rename = "userId", alias = "UserId")]
    pub user_id: i32,
}

#[derive(Deserialize)]
pub struct RevokeAuthorizationQuery {
    #[serde(rename = "userId", alias = "UserId")]
    pub user_id: i32,
    #[serde(rename = "roleId", alias = "RoleId")]
    pub role_id: i32,
}

#[derive(Deserialize)]
pub struct RevokeAccessKeyQuery {
    #[serde(rename = "userId", alias = "UserId")]
    pub user_id: i32,
    #[serde(rename = "AccessKeyId", alias = "accessKeyId")]
    pub access_key_id: i32,
}

// ── GET /api/Users/ByEmployeeId/{employee_id} ────────────────────────────────

pub async fn get_user_by_employee_id(
    State(state): State<AppState>,
    employee_id: Result<Path<String>, PathRejection>,
) -> Result<Json<User>, ProvisioningError> {
    let employee_id = path_param(employee_id)?;
    let usecase = GetUserByEmployeeIdUseCase {
        repo: state.user_repo(),
    };
    Ok(Json(usecase.execute(&employee_id).await?))
}

// ── GET /api/Users/{id} ──────────────────────────────────────────────────────

pub async fn get_user(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<User>, ProvisioningError> {
    let id = path_param(id)?;
    let usecase = GetUserUseCase {
        repo: state.user_repo(),
    };
    Ok(Json(usecase.execute(id).await?))
}

// ── PATCH /api/Users/{id} ────────────────────────────────────────────────────

pub async fn patch_user(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    body: Result<Json<Vec<PatchOperation>>, JsonRejection>,
) -> Result<Json<User>, ProvisioningError> {
    let id = path_param(id)?;
    let operations = json_body(body)?;
    let usecase = PatchUserUseCase {
        repo: state.user_repo(),
    };
    Ok(Json(usecase.execute(id, &operations).await?))
}

// ── POST /api/Users ──────────────────────────────────────────────────────────

pub async fn create_user(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, ProvisioningError> {
    let input: NewUser = conform(json_body(body)?)?;
    let usecase = CreateUserUseCase {
        repo: state.user_repo(),
    };
    let user = usecase.execute(input).await?;
    let location = format!("/api/Users/{}", user.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(user)))
}

// ── DELETE /api/Users/{id} ───────────────────────────────────────────────────

pub async fn delete_user(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<StatusCode, ProvisioningError> {
    let id = path_param(id)?;
    let usecase = DeleteUserUseCase {
        repo: state.user_repo(),
    };
    usecase.execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── POST /api/Users/Authorizations/Add ───────────────────────────────────────

pub async fn grant_authorization(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<RoleAuthorization>), ProvisioningError> {
    let input: NewRoleAuthorization = conform(json_body(body)?)?;
    let usecase = GrantAuthorizationUseCase {
        authorizations: state.authorization_repo(),
    };
    let authorization = usecase.execute(input).await?;
    Ok((StatusCode::CREATED, Json(authorization)))
}

// ── DELETE /api/Users/Authorizations/Delete?userId=&roleId= ──────────────────

pub async fn revoke_authorization(
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
) -> Result<StatusCode, ProvisioningError> {
    let query: RevokeAuthorizationQuery = parse_query(raw_query)?;
    let usecase = RevokeAuthorizationUseCase {
        users: state.user_repo(),
        authorizations: state.authorization_repo(),
    };
    usecase.execute(query.user_id, query.role_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── GET /api/Users/AccessKeys?userId= ────────────────────────────────────────

pub async fn list_access_keys(
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
) -> Result<Json<Vec<AccessKey>>, ProvisioningError> {
    let query: UserQuery = parse_query(raw_query)?;
    let usecase = ListAssignedAccessKeysUseCase {
        users: state.user_repo(),
        assignments: state.assignment_repo(),
        access_keys: state.access_key_repo(),
    };
    Ok(Json(usecase.execute(query.user_id).await?))
}

// ── POST /api/Users/AccessKeys/Add ───────────────────────────────────────────

pub async fn assign_access_key(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<AccessKeyAssignment>), ProvisioningError> {
    let input: NewAccessKeyAssignment = conform(json_body(body)?)?;
    let usecase = AssignAccessKeyUseCase {
        assignments: state.assignment_repo(),
    };
    let assignment = usecase.execute(input).await?;
    Ok((StatusCode::CREATED, Json(assignment)))
}

// ── DELETE /api/Users/AccessKeys/Delete?userId=&AccessKeyId= ─────────────────

pub async fn revoke_access_key(
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
) -> Result<StatusCode, ProvisioningError> {
    let query: RevokeAccessKeyQuery = parse_query(raw_query)?;
    let usecase = RevokeAccessKeyUseCase {
        users: state.user_repo(),
        assignments: state.assignment_repo(),
    };
    usecase.execute(query.user_id, query.access_key_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
