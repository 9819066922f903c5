pub mod case_matcher;
pub mod detector;

pub use case_matcher::ICaseMatcher;
pub use detector::IDetector;
