//! # fraudscan-core
//!
//! Foundation crate for the fraudscan engine.
//! Defines the category taxonomy, case and result models, traits, errors and config.
//! Every other crate in the workspace depends on this.

pub mod category;
pub mod config;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use category::Category;
pub use config::FraudScanConfig;
pub use errors::{FraudScanError, FraudScanResult};
pub use models::{DetectionResult, FraudCase};
