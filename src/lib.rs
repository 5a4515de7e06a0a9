//! Export Metrics library crate.
//!
//! This crate exposes the financial calculators used by the export
//! dashboard (ROI, profitability, break-even and export margin) as
//! plain functions in [`calculator`], along with the form coercion,
//! display formatting, batch engine and HTTP API built around them.
//! External applications may call `calculator::compute_roi` and
//! friends directly or embed the API via `api::build_router`.

pub mod models;
pub mod rating;
pub mod calculator;
pub mod forms;
pub mod display;
pub mod engine;
pub mod error;
pub mod config;
pub mod api;

pub use error::MetricsError;
