//! # Huizen Common
//!
//! Shared building blocks for the `huizen` workspace.
//!
//! * **[`models`]**: The [`Room`](models::room::Room) and [`House`](models::house::House) entities.
//! * **[`decimal`]**: Staged rounding and display formatting for money and measurements.
//! * **[`error`]**: The error type returned when a model rejects its input.
//! * **[`config`]**: Runtime options shared between the CLI and the core.

pub mod config;
pub mod decimal;
pub mod error;
pub mod models;

pub use error::{HuizenError, Result};
