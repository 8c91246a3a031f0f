//! HTTP request handlers for the Shift Extraction Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::{ExtractError, ExtractResult};
use crate::export::{CSV_FILE_NAME, to_csv_string};
use crate::extraction::extract_from_workbook;
use crate::models::ExtractionResult;

use super::request::{ExtractRequest, PreviewRequest};
use super::response::{ApiError, ApiErrorResponse, PreviewResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/extract", post(extract_handler))
        .route("/extract/csv", post(extract_csv_handler))
        .route("/preview", post(preview_handler))
        .with_state(state)
}

/// Handler for POST /extract endpoint.
///
/// Returns the extracted shifts and totals as JSON.
async fn extract_handler(
    State(state): State<AppState>,
    payload: Result<Json<ExtractRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing extraction request");

    let request = match parse_payload(payload, correlation_id) {
        Ok(request) => request,
        Err(error) => return error.into_response(),
    };

    match perform_extraction(&state, request, correlation_id) {
        Ok(result) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            Json(result),
        )
            .into_response(),
        Err(err) => failure(err, correlation_id),
    }
}

/// Handler for POST /extract/csv endpoint.
///
/// Returns the extracted shifts as a CSV attachment.
async fn extract_csv_handler(
    State(state): State<AppState>,
    payload: Result<Json<ExtractRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing CSV export request");

    let request = match parse_payload(payload, correlation_id) {
        Ok(request) => request,
        Err(error) => return error.into_response(),
    };

    match perform_extraction(&state, request, correlation_id) {
        Ok(result) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", CSV_FILE_NAME),
                ),
            ],
            to_csv_string(&result.records),
        )
            .into_response(),
        Err(err) => failure(err, correlation_id),
    }
}

/// Handler for POST /preview endpoint.
///
/// Returns the first rows of the selected sheet, as text.
async fn preview_handler(
    State(state): State<AppState>,
    payload: Result<Json<PreviewRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match parse_payload(payload, correlation_id) {
        Ok(request) => request,
        Err(error) => return error.into_response(),
    };

    let sheet = match request.workbook.select(request.sheet.as_deref()) {
        Ok(sheet) => sheet,
        Err(err) => return failure(err, correlation_id),
    };
    let rows = request.rows.unwrap_or(state.config().preview_rows);

    info!(
        correlation_id = %correlation_id,
        sheet = %sheet.name,
        rows,
        "Previewing sheet"
    );

    let response = PreviewResponse {
        sheet: sheet.name.clone(),
        sheet_names: request
            .workbook
            .sheet_names()
            .into_iter()
            .map(str::to_string)
            .collect(),
        rows: sheet.rows.preview(rows),
    };
    (StatusCode::OK, Json(response)).into_response()
}

/// Runs an extraction for a parsed request, falling back to the configured
/// default name.
fn perform_extraction(
    state: &AppState,
    request: ExtractRequest,
    correlation_id: Uuid,
) -> ExtractResult<ExtractionResult> {
    let config = state.config();
    let name = request
        .name
        .unwrap_or_else(|| config.default_name.clone());

    let result = extract_from_workbook(&request.workbook, request.sheet.as_deref(), &name, config)?;

    if result.found {
        info!(
            correlation_id = %correlation_id,
            name = %result.name,
            sheet = ?result.sheet,
            shift_count = result.totals.shift_count,
            total_hours = %result.totals.total_hours,
            duration_us = result.duration_us,
            "Extraction completed successfully"
        );
    } else {
        warn!(
            correlation_id = %correlation_id,
            name = %result.name,
            sheet = ?result.sheet,
            "Name not found in sheet"
        );
    }

    Ok(result)
}

/// Unwraps a JSON payload or converts the rejection into a 400 response.
fn parse_payload<T>(
    payload: Result<Json<T>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<T, ApiErrorResponse> {
    let rejection = match payload {
        Ok(Json(request)) => return Ok(request),
        Err(rejection) => rejection,
    };

    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    Err(ApiErrorResponse::bad_request(error))
}

fn failure(err: ExtractError, correlation_id: Uuid) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Request failed"
    );
    ApiErrorResponse::from(err).into_response()
}
