//! Request types for the Shift Extraction Engine API.
//!
//! This module defines the JSON request structures for the `/extract`,
//! `/extract/csv` and `/preview` endpoints.

use serde::{Deserialize, Serialize};

use crate::models::Workbook;

/// Request body for the `/extract` and `/extract/csv` endpoints.
///
/// # Example
///
/// ```
/// use shift_extractor::api::ExtractRequest;
///
/// let json = r#"{
///     "name": "宇都宮美香",
///     "workbook": { "sheets": [ { "name": "1月", "rows": [["宇都宮美香", "9-18"]] } ] }
/// }"#;
/// let request: ExtractRequest = serde_json::from_str(json).unwrap();
/// assert_eq!(request.sheet, None);
/// assert_eq!(request.workbook.sheets.len(), 1);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractRequest {
    /// The name to search for; the configured default when omitted.
    #[serde(default)]
    pub name: Option<String>,
    /// The sheet to scan; the first sheet when omitted.
    #[serde(default)]
    pub sheet: Option<String>,
    /// The uploaded workbook.
    pub workbook: Workbook,
}

/// Request body for the `/preview` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewRequest {
    /// The sheet to preview; the first sheet when omitted.
    #[serde(default)]
    pub sheet: Option<String>,
    /// Number of rows to return; the configured preview size when omitted.
    #[serde(default)]
    pub rows: Option<usize>,
    /// The uploaded workbook.
    pub workbook: Workbook,
}
