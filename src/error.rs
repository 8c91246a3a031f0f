//! Error types for the Shift Extraction Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Note that the extraction core itself never fails on cell contents: an
//! unparseable time string or a missing date is expressed as the absence of
//! a record or field. These errors cover configuration and request problems.

use thiserror::Error;

/// The main error type for the Shift Extraction Engine.
///
/// # Example
///
/// ```
/// use shift_extractor::error::ExtractError;
///
/// let error = ExtractError::SheetNotFound {
///     sheet: "March".to_string(),
/// };
/// assert_eq!(error.to_string(), "Sheet not found: March");
/// ```
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but holds an unusable value.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The offending field.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// The target name was empty or blank.
    #[error("Invalid target name: {message}")]
    InvalidName {
        /// A description of what made the name invalid.
        message: String,
    },

    /// The requested sheet does not exist in the workbook.
    #[error("Sheet not found: {sheet}")]
    SheetNotFound {
        /// The requested sheet name.
        sheet: String,
    },

    /// The workbook contains no sheets at all.
    #[error("Workbook contains no sheets")]
    EmptyWorkbook,
}

/// A type alias for Results that return ExtractError.
pub type ExtractResult<T> = Result<T, ExtractError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = ExtractError::ConfigNotFound {
            path: "/missing/scanner.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/scanner.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = ExtractError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_config_displays_field_and_message() {
        let error = ExtractError::InvalidConfig {
            field: "date_row_offsets".to_string(),
            message: "must not be empty".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid configuration field 'date_row_offsets': must not be empty"
        );
    }

    #[test]
    fn test_invalid_name_displays_message() {
        let error = ExtractError::InvalidName {
            message: "name must not be blank".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid target name: name must not be blank"
        );
    }

    #[test]
    fn test_empty_workbook_display() {
        assert_eq!(
            ExtractError::EmptyWorkbook.to_string(),
            "Workbook contains no sheets"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<ExtractError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_sheet_not_found() -> ExtractResult<()> {
            Err(ExtractError::SheetNotFound {
                sheet: "Sheet9".to_string(),
            })
        }

        fn propagates_error() -> ExtractResult<()> {
            returns_sheet_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
