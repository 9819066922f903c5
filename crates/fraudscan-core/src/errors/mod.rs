//! Error handling for fraudscan.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;

pub use config_error::ConfigError;

/// Top-level error for every fallible fraudscan operation.
#[derive(Debug, thiserror::Error)]
pub enum FraudScanError {
    /// A category name arriving from outside the type system did not match
    /// any known category.
    #[error("invalid category: {name}")]
    InvalidCategory { name: String },

    /// The input could not be read as text.
    #[error("malformed input: {reason}")]
    MalformedInput { reason: String },

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

pub type FraudScanResult<T> = Result<T, FraudScanError>;
