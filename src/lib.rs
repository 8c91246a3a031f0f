//! Shift Extraction Engine
//!
//! This crate extracts one person's work shifts from an irregularly laid out
//! spreadsheet timesheet. It finds every cell containing the person's name,
//! infers the day number from the rows above, normalizes the time range in
//! the adjacent cell (including shifts that cross midnight) and totals the
//! hours worked.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod export;
pub mod extraction;
pub mod models;
