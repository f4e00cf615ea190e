use axum::{
    extract::rejection::JsonRejection,
    response::{IntoResponse, Response},
    Json,
};
use http::StatusCode;
use serde_json::json;
use tracing::{debug, error};

pub type ApiResult<T, E = ApiError> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Resource not found: {0}")]
    ResourceNotFound(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::ResourceNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<filmorate_dal::Error> for ApiError {
    fn from(value: filmorate_dal::Error) -> Self {
        match value {
            filmorate_dal::Error::RecordNotFound { .. } => {
                ApiError::ResourceNotFound(value.to_string())
            }
            e if e.is_validation() => ApiError::InvalidRequest(e.to_string()),
            e => ApiError::InternalError(e.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(value: JsonRejection) -> Self {
        ApiError::InvalidRequest(value.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("Request failed: {self}");
        } else {
            debug!("Request rejected: {self}");
        }
        (status, Json(json!({"error": self.to_string()}))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dal_error_status() {
        let err: ApiError = filmorate_dal::Error::MissingId.into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);

        let err: ApiError = filmorate_dal::Error::Validation("name: empty".into()).into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert!(err.to_string().contains("name: empty"));

        let err: ApiError = filmorate_dal::Error::RecordNotFound {
            entity: "Film",
            id: 7,
        }
        .into();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            err.to_string(),
            "Resource not found: Film with id 7 not found"
        );
    }
}
