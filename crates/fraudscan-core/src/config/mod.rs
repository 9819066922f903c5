//! Configuration for fraudscan.
//! TOML-based, resolved as: env > config file > compiled defaults.

pub mod defaults;
pub mod detection_config;
pub mod fraudscan_config;
pub mod observability_config;

pub use detection_config::DetectionConfig;
pub use fraudscan_config::FraudScanConfig;
pub use observability_config::ObservabilityConfig;
