//! Configuration loading and management for the Shift Extraction Engine.
//!
//! This module provides functionality to load the scanner configuration from
//! a YAML file: the default target name, the date-inference row offsets and
//! digit bound, and the preview size.
//!
//! # Example
//!
//! ```no_run
//! use shift_extractor::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/scanner.yaml").unwrap();
//! println!("Offsets: {:?}", config.config().date_row_offsets);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    DEFAULT_DATE_ROW_OFFSETS, DEFAULT_MAX_DATE_DIGITS, DEFAULT_NAME, DEFAULT_PREVIEW_ROWS,
    ScannerConfig,
};
