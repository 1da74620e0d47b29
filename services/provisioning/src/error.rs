use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use provisioning_core::patch::{PatchError, ValidationErrors};

/// Provisioning service error variants.
#[derive(Debug, thiserror::Error)]
pub enum ProvisioningError {
    #[error("user not found")]
    UserNotFound,
    #[error("access key not found")]
    AccessKeyNotFound,
    #[error("validation failed")]
    Validation(ValidationErrors),
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl ProvisioningError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::AccessKeyNotFound => "ACCESS_KEY_NOT_FOUND",
            Self::Validation(_) => "VALIDATION_FAILED",
            Self::InvalidRequest(_) => "INVALID_REQUEST",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl From<ValidationErrors> for ProvisioningError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors)
    }
}

impl From<PatchError> for ProvisioningError {
    fn from(error: PatchError) -> Self {
        match error {
            PatchError::Invalid(errors) => Self::Validation(errors),
            PatchError::NotAnObject => Self::InvalidRequest("expected a JSON object".to_owned()),
            PatchError::Json(e) => Self::Internal(anyhow::Error::new(e).context("patch document")),
        }
    }
}

impl IntoResponse for ProvisioningError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::UserNotFound | Self::AccessKeyNotFound => StatusCode::NOT_FOUND,
            Self::Validation(_) | Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %format!("{e:#}"), kind = "INTERNAL", "internal error");
        }
        let mut body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        if let Self::Validation(ref errors) = self {
            body["errors"] = serde_json::json!(errors);
        }
        (status, axum::Json(body)).into_response()
    }
}
