pub mod access_keys;
pub mod health;
pub mod roles;
pub mod users;

use axum::Json;
use axum::extract::Path;
use axum::extract::rejection::{JsonRejection, PathRejection};
use serde::de::DeserializeOwned;

use crate::error::ProvisioningError;

/// Parse a raw query string; a missing string is treated as empty so that
/// required parameters surface as a 400.
pub(crate) fn parse_query<T: DeserializeOwned>(
    raw_query: Option<String>,
) -> Result<T, ProvisioningError> {
    serde_qs::from_str(raw_query.as_deref().unwrap_or_default())
        .map_err(|e| ProvisioningError::InvalidRequest(e.to_string()))
}

/// Unwrap a JSON body, reporting malformed input in the service error shape.
pub(crate) fn json_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, ProvisioningError> {
    body.map(|Json(value)| value)
        .map_err(|rejection| ProvisioningError::InvalidRequest(rejection.body_text()))
}

/// Unwrap a path parameter, reporting a malformed segment in the service error shape.
pub(crate) fn path_param<T>(path: Result<Path<T>, PathRejection>) -> Result<T, ProvisioningError> {
    path.map(|Path(value)| value)
        .map_err(|rejection| ProvisioningError::InvalidRequest(rejection.body_text()))
}
