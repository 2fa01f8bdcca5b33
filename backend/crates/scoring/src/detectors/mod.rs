pub mod metadata;
pub mod ml;
pub mod text;

use crate::input::AnalysisInput;
use crate::signal::DetectorSignal;

pub use metadata::MetadataRiskDetector;
pub use ml::NullModelDetector;
pub use text::TextRiskDetector;

/// One evidence channel. Implementations read only their own slice of the
/// input and must not keep state between calls.
pub trait Detector: Send + Sync {
    fn label(&self) -> &'static str;
    fn detect(&self, input: &AnalysisInput) -> DetectorSignal;
}
