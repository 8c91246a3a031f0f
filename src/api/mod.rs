//! HTTP API module for the Shift Extraction Engine.
//!
//! This module provides the REST API endpoints for extracting a person's
//! shifts from an uploaded workbook, exporting them as CSV and previewing
//! a sheet.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ExtractRequest, PreviewRequest};
pub use response::{ApiError, ApiErrorResponse, PreviewResponse};
pub use state::AppState;
