//! Versioned prompt constants and composition.
//!
//! The catalog serialization, response schema, and scoring rubric are fixed
//! text kept separate from the per-request context so prompt construction
//! is testable without a network call.

use crate::catalog::CATALOG;

/// Bumped whenever the instructions, schema, or rubric text change, and
/// logged with every analysis so result provenance survives prompt edits.
pub const PROMPT_VERSION: &str = "v3";

pub const SYSTEM_INSTRUCTION: &str =
    "You are a regulatory-compliance analyst for EU regulations. \
     Respond with a single JSON object and nothing else: no prose, \
     no markdown, no code fences.";

/// The exact JSON shape the model must return. Fields the pipeline does
/// not consume are passed through to the caller untouched.
pub const RESPONSE_SCHEMA: &str = r#"Return JSON with exactly this structure:
{
  "applicable_regulations": [
    {
      "code": "GDPR",
      "name": "General Data Protection Regulation",
      "confidence": 0.0,
      "triggers": ["..."],
      "reasoning": "...",
      "priority": "high|medium|low",
      "category": "...",
      "key_obligations": ["..."],
      "thresholds_met": ["..."],
      "next_steps": ["..."]
    }
  ],
  "regulatory_summary": {},
  "risk_assessment": {},
  "risk_level": "high|medium|low",
  "executive_summary": "...",
  "immediate_actions": ["..."],
  "recommendations": [
    { "priority": "...", "action": "...", "regulation": "...", "timeline": "..." }
  ]
}"#;

/// Confidence bands are instructions to the model, not code-enforced bounds.
pub const CONFIDENCE_RUBRIC: &str = "\
Score confidence per regulation using these bands:
  >= 0.95      clear trigger meeting all thresholds
  0.85 - 0.94  strong indicators
  0.70 - 0.84  moderate confidence
  0.50 - 0.69  possible, needs investigation
  <  0.50      unlikely to apply (omit or mark low priority)";

/// Serialize the regulation catalog as the prompt's reference table.
pub fn catalog_block() -> String {
    let mut out = String::from("Regulation catalog to assess against:\n");
    for desc in CATALOG {
        out.push_str(&format!(
            "\n{} — {} [{}]\n  keyword hints: {}\n  threshold hints: {}\n",
            desc.code,
            desc.name,
            desc.category,
            desc.keywords.join("; "),
            desc.thresholds.join("; "),
        ));
    }
    out
}

/// Compose the full analysis prompt around the per-request context.
pub fn build_analysis_prompt(context: &str) -> String {
    format!(
        "Determine which EU regulations apply to the organisation described \
         by the assessment below.\n\n{context}\n\n{catalog}\n\n{rubric}\n\n{schema}",
        context = context,
        catalog = catalog_block(),
        rubric = CONFIDENCE_RUBRIC,
        schema = RESPONSE_SCHEMA,
    )
}
