//! # Huizen Core
//!
//! * **[`report`]**: Renders the textual summary of a [`House`](huizen_common::models::house::House).
//! * **[`catalog`]**: The houses this program reports on.

pub mod catalog;
pub mod report;
