#![forbid(unsafe_code)]

//! Core domain model and business logic for the Vitals BMI tracker.
//!
//! This crate provides:
//! - Domain types (profile, history records, categories, targets)
//! - BMI engine and metric/imperial conversion
//! - Persistence gateway over a pluggable key-value store
//! - Daily water counter, health guidance and derived report views

pub mod types;
pub mod error;
pub mod config;
pub mod logging;
pub mod bmi;
pub mod units;
pub mod validation;
pub mod store;
pub mod gateway;
pub mod water;
pub mod guidance;
pub mod report;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use config::Config;
pub use bmi::{category_of, compute_bmi, target_weight};
pub use units::{imperial_to_metric, metric_to_imperial};
pub use validation::{validate_measurements, FieldErrors};
pub use store::{FileStore, KeyValueStore, MemoryStore};
pub use gateway::{default_profile, VitalsGateway, HISTORY_CAPACITY};
pub use guidance::{tips_for, NUTRITION_GUIDE};
pub use report::{gauge_percent, trend_points, ShareSummary, TrendPoint};
