//! complyx-common — Shared domain types used across all Complyx crates.

pub mod assessment;
pub mod analysis;

// Re-export commonly used types
pub use assessment::{AssessmentAnswer, AssessmentResponses, Question, QuestionSection, ResponseValue};
pub use analysis::{AnalysisResult, LlmAnalysis, RegulationFinding};
