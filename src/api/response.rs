//! Response types for the Shift Extraction Engine API.
//!
//! This module defines the preview response, the error response structures
//! and the mapping from engine errors to HTTP statuses.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::ExtractError;

/// Response body for the `/preview` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewResponse {
    /// The sheet that was previewed.
    pub sheet: String,
    /// All sheet names in the workbook, for sheet selection.
    pub sheet_names: Vec<String>,
    /// The first rows of the sheet as text.
    pub rows: Vec<Vec<String>>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates a 400 response for a request the engine cannot act on.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(self.error),
        )
            .into_response()
    }
}

impl From<ExtractError> for ApiErrorResponse {
    fn from(error: ExtractError) -> Self {
        let message = error.to_string();
        match error {
            ExtractError::ConfigNotFound { .. }
            | ExtractError::ConfigParseError { .. }
            | ExtractError::InvalidConfig { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
            },
            ExtractError::InvalidName { .. } => ApiErrorResponse::bad_request(
                ApiError::with_details(
                    "INVALID_NAME",
                    message,
                    "A non-blank name is required to search the timesheet",
                ),
            ),
            ExtractError::SheetNotFound { sheet } => {
                ApiErrorResponse::bad_request(ApiError::with_details(
                    "SHEET_NOT_FOUND",
                    message,
                    format!("The workbook has no sheet named '{}'", sheet),
                ))
            }
            ExtractError::EmptyWorkbook => {
                ApiErrorResponse::bad_request(ApiError::new("EMPTY_WORKBOOK", message))
            }
        }
    }
}
