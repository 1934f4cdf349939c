use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use serde_json::json;
use uuid::Uuid;

/// Field-level detail attached to validation failures.
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
    #[serde(rename = "type")]
    pub error_type: String,
}

impl FieldError {
    pub fn new(
        field: impl Into<String>,
        message: impl Into<String>,
        error_type: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            error_type: error_type.into(),
        }
    }
}

/// Error taxonomy for the whole API. Every variant renders as the standard
/// envelope `{error, message, status_code, request_id}`; validation errors
/// additionally carry a `details` list.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Forbidden(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("Validation failed")]
    Validation(Vec<FieldError>),
    #[error("Database error occurred")]
    Database(#[source] sqlx::Error),
    #[error("Internal server error")]
    Internal(String),
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn validation(details: Vec<FieldError>) -> Self {
        Self::Validation(details)
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(e: sqlx::Error) -> Self {
        // Uniqueness and foreign-key violations surface as Conflict, not 500
        if let sqlx::Error::Database(ref db_err) = e {
            if matches!(db_err.code().as_deref(), Some("23505") | Some("23503")) {
                tracing::warn!(
                    "Database constraint violation: constraint={:?}, message={}",
                    db_err.constraint(),
                    db_err.message()
                );
                return Self::Conflict("Database constraint violation".to_string());
            }
        }
        Self::Database(e)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Database(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        // Correlation id: returned to the caller and attached to the log line
        let request_id = Uuid::new_v4();

        match self {
            ApiError::Database(e) => {
                tracing::error!(%request_id, error = %e, "database error");
            }
            ApiError::Internal(detail) => {
                tracing::error!(%request_id, detail = %detail, "internal error");
            }
            other => {
                tracing::warn!(%request_id, status = %status, "{}", other);
            }
        }

        // Storage and logic failures never leak detail to the caller
        let message = match self {
            ApiError::Database(_) => "Database error occurred".to_string(),
            ApiError::Internal(_) => "Internal server error".to_string(),
            other => other.to_string(),
        };

        let mut body = json!({
            "error": true,
            "message": message,
            "status_code": status.as_u16(),
            "request_id": request_id,
        });
        if let ApiError::Validation(details) = self {
            body["details"] = json!(details);
        }

        HttpResponse::build(status).json(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_envelope_carries_field_details() {
        let err = ApiError::validation(vec![FieldError::new("email", "invalid email", "format")]);
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);

        let response = err.error_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn taxonomy_maps_to_expected_status_codes() {
        assert_eq!(
            ApiError::not_found("x").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::forbidden("x").status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ApiError::unauthorized("x").status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(ApiError::conflict("x").status_code(), StatusCode::CONFLICT);
        assert_eq!(
            ApiError::Internal("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn row_not_found_is_a_database_error_not_a_panic() {
        let err: ApiError = sqlx::Error::RowNotFound.into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
