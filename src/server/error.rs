//! HTTP error mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::error::Error;

/// Wrapper turning workspace errors into HTTP responses.
///
/// Write failures on the primary store surface as 500s, a missing
/// record as 404, bad input as 400. Read-path degradation never gets
/// here; list handlers cannot fail.
#[derive(Debug)]
pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(e: Error) -> Self {
        Self(e)
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Machine-readable error code.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            Error::RecordNotFound { .. } | Error::RecordNotFoundSimilar { .. } => {
                StatusCode::NOT_FOUND
            }
            Error::InvalidStatus(_)
            | Error::InvalidStage(_)
            | Error::InvalidPriority(_)
            | Error::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = ErrorBody {
            code: self.0.error_code().as_str().to_string(),
            message: self.0.to_string(),
        };

        if status.is_server_error() {
            tracing::error!(status = %status, code = %body.code, error = %body.message, "server error");
        } else {
            tracing::warn!(status = %status, code = %body.code, error = %body.message, "client error");
        }

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Kind;

    #[test]
    fn test_not_found_maps_to_404() {
        let err = ApiError(Error::RecordNotFound {
            kind: Kind::Tasks,
            id: "task-missing".to_string(),
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_validation_maps_to_400() {
        let err = ApiError(Error::InvalidArgument("energy must be 1-10".to_string()));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_write_failure_maps_to_500() {
        let err = ApiError(Error::StoreWrite {
            kind: Kind::Tasks,
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
