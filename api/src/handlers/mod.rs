pub mod crud;
pub mod health;

// Common response types
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use common::errors::StoreError;
use common::outcome::Outcome;

/// Standard API error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
    pub trace_id: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            details: None,
            trace_id: uuid::Uuid::new_v4().to_string(),
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn status(&self) -> StatusCode {
        match self.error.as_str() {
            "unauthorized" => StatusCode::UNAUTHORIZED,
            "not_found" => StatusCode::NOT_FOUND,
            "id_mismatch" | "validation_error" => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}

/// Confirmation body for successful mutations
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Convert an operation result into its HTTP response.
///
/// Success bodies are the record or collection itself; every other
/// classification maps to exactly one status code. Faults surface the
/// underlying error text to the caller.
pub fn respond<T: Serialize>(result: Result<Outcome<T>, StoreError>) -> Response {
    match result {
        Ok(Outcome::Ok(value)) => (StatusCode::OK, Json(value)).into_response(),
        Ok(Outcome::NotFound(message)) => {
            ErrorResponse::new("not_found", message).into_response()
        }
        Ok(Outcome::IdMismatch { .. }) => {
            ErrorResponse::new("id_mismatch", "ID mismatch.").into_response()
        }
        Ok(Outcome::Invalid(errors)) => {
            ErrorResponse::new("validation_error", "Validation failed.")
                .with_details(serde_json::json!(errors))
                .into_response()
        }
        Err(fault) => {
            tracing::error!(error = %fault, "Store operation failed");
            ErrorResponse::new(
                "internal_error",
                format!("Internal Server Error: {}", fault),
            )
            .into_response()
        }
    }
}

/// Like [`respond`], for mutations: success carries a confirmation
/// message instead of a record.
pub fn respond_message(result: Result<Outcome<()>, StoreError>, success: String) -> Response {
    respond(result.map(|outcome| outcome.map(|()| MessageResponse { message: success })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::errors::ConfigError;
    use common::validation::FieldError;

    #[test]
    fn test_ok_maps_to_200() {
        let response = respond(Ok(Outcome::Ok(vec![1, 2, 3])));
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let response = respond::<()>(Ok(Outcome::NotFound(
            "No customer records found.".to_string(),
        )));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_id_mismatch_maps_to_400() {
        let response = respond::<()>(Ok(Outcome::IdMismatch { path: 5, payload: 7 }));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_validation_failure_maps_to_400() {
        let response = respond::<()>(Ok(Outcome::Invalid(vec![FieldError::new(
            "email",
            "Invalid email address.",
        )])));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_fault_maps_to_500() {
        let fault = StoreError::Configuration(ConfigError::MissingConnectionString(
            "restaurants".to_string(),
        ));
        let response = respond::<()>(Err(fault));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_mutation_success_carries_message() {
        let response = respond_message(
            Ok(Outcome::Ok(())),
            "Customer created successfully.".to_string(),
        );
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn test_error_response_details_attached() {
        let response = ErrorResponse::new("validation_error", "Validation failed.")
            .with_details(serde_json::json!([{"field": "email"}]));
        assert!(response.details.is_some());
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_unknown_code_defaults_to_500() {
        let response = ErrorResponse::new("internal_error", "boom");
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
