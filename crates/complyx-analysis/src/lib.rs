//! complyx-analysis — the assessment-analysis pipeline.
//!
//! Control flow: context builder → prompt → completion backend → JSON
//! extraction → validated parse → finding dedup → allow-list partition.
//! Any failure on the LLM path is absorbed by the rule-based fallback;
//! callers always receive a completed `AnalysisResult`.

pub mod catalog;
pub mod context;
pub mod prompt;
pub mod extract;
pub mod dedupe;
pub mod fallback;
pub mod engine;
pub mod error;

pub use engine::AnalysisEngine;
pub use error::AnalysisError;
