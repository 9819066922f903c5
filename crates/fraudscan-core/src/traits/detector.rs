use crate::errors::FraudScanResult;
use crate::models::DetectionResult;

/// Fraud-signal detection over free text.
pub trait IDetector: Send + Sync {
    /// Scan `text` and return matched keywords, categories and related cases.
    fn detect(&self, text: &str) -> FraudScanResult<DetectionResult>;
}
