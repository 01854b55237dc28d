//! Analysis output types: the per-regulation findings parsed from the LLM
//! response and the uniform `AnalysisResult` every caller receives, whether
//! the LLM path or the rule-based fallback produced it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One regulation's applicability assessment.
///
/// Parsed straight from LLM output, so every field except `code` is
/// defaulted: a missing collection becomes empty rather than a parse error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegulationFinding {
    pub code: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub confidence: f64,
    #[serde(default)]
    pub triggers: Vec<String>,
    #[serde(default)]
    pub reasoning: String,
    #[serde(default)]
    pub priority: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub key_obligations: Vec<String>,
    #[serde(default)]
    pub thresholds_met: Option<Vec<String>>,
    #[serde(default)]
    pub next_steps: Vec<String>,
}

/// The parsed LLM analysis object. Fields the pipeline consumes are typed;
/// anything else the model returned is preserved in `extra` and passed
/// through to the caller untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LlmAnalysis {
    #[serde(default)]
    pub applicable_regulations: Vec<RegulationFinding>,
    #[serde(default, alias = "summary")]
    pub executive_summary: String,
    #[serde(default)]
    pub risk_level: Option<String>,
    #[serde(default)]
    pub regulatory_summary: Option<Value>,
    #[serde(default)]
    pub risk_assessment: Option<Value>,
    #[serde(default)]
    pub immediate_actions: Vec<Value>,
    #[serde(default)]
    pub recommendations: Vec<Value>,
    /// True when the rule-based fallback produced this analysis. Logged,
    /// never surfaced to the end user as an error.
    #[serde(default)]
    pub fallback_used: bool,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// The engine's output contract, identical on the LLM and fallback paths.
/// Created once per submit action and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub llm_analysis: LlmAnalysis,
    /// Codes of all findings, unique, first-seen order.
    pub applicable_regulations: Vec<String>,
    /// Codes the product has dedicated workflow support for.
    pub supported_regulations: Vec<String>,
    /// Remaining codes, still surfaced to the caller.
    pub unsupported_regulations: Vec<String>,
    pub summary: String,
    pub risk_level: String,
    pub recommendations: Vec<Value>,
    pub processed_at: DateTime<Utc>,
}
