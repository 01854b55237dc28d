use complyx_llm::LlmError;
use thiserror::Error;

/// Failures on the LLM analysis path. None of these reach the caller:
/// the engine catches them and substitutes the rule-based fallback.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("LLM backend error: {0}")]
    Llm(#[from] LlmError),

    #[error("Malformed LLM response: {0}")]
    MalformedResponse(String),
}
