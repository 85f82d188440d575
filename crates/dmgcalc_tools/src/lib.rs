//! # Damage Calculator Tools
//!
//! Command-line tools for development:
//! - Scenario forecasting
//! - Text display adapter
//! - Data validators

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod panel;
pub mod report;
pub mod resolver;
pub mod scenario;
pub mod validate;
