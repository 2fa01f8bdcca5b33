pub mod config;
pub mod detectors;
pub mod engine;
pub mod input;
pub mod patterns;
pub mod signal;

pub use config::ScoringPolicy;
pub use detectors::{Detector, MetadataRiskDetector, NullModelDetector, TextRiskDetector};
pub use engine::{AnalysisResult, RiskLevel, ScamIntelligenceSystem, Verdict};
pub use input::AnalysisInput;
pub use patterns::PatternLibrary;
pub use signal::DetectorSignal;
