pub mod detection_result;
pub mod fraud_case;

pub use detection_result::DetectionResult;
pub use fraud_case::FraudCase;
