//! Rule-based fallback analyzer.
//!
//! The last line of defense when the LLM path fails: fixed trigger-question
//! sets evaluated against the raw answers. No external dependencies, no
//! failure modes — it always returns a completed result synchronously.

use crate::engine::finalize;
use complyx_common::{AnalysisResult, AssessmentResponses, LlmAnalysis, RegulationFinding};

struct FallbackRule {
    code: &'static str,
    name: &'static str,
    category: &'static str,
    confidence: f64,
    priority: &'static str,
    /// Question ids whose truthy answer triggers this regulation.
    trigger_questions: &'static [&'static str],
    reasoning: &'static str,
    key_obligations: &'static [&'static str],
    next_steps: &'static [&'static str],
}

const FALLBACK_RULES: &[FallbackRule] = &[
    FallbackRule {
        code: "GDPR",
        name: "General Data Protection Regulation",
        category: "data_protection",
        confidence: 0.9,
        priority: "high",
        trigger_questions: &["gdpr-scope", "gdpr-special", "gdpr-transfers", "eprivacy-marketing"],
        reasoning: "Assessment answers indicate processing of personal data within GDPR scope.",
        key_obligations: &[
            "Maintain records of processing activities",
            "Establish a lawful basis for each processing purpose",
            "Honour data subject rights requests",
        ],
        next_steps: &[
            "Run a data mapping exercise",
            "Review third-country transfer safeguards",
        ],
    },
    FallbackRule {
        code: "CSRD",
        name: "Corporate Sustainability Reporting Directive",
        category: "sustainability_reporting",
        confidence: 0.85,
        priority: "medium",
        trigger_questions: &["csrd-thresholds", "csrd-non-eu", "csrd-consolidated"],
        reasoning: "Assessment answers indicate the company meets CSRD reporting thresholds.",
        key_obligations: &[
            "Prepare sustainability reporting under ESRS",
            "Perform a double-materiality assessment",
        ],
        next_steps: &[
            "Confirm the first applicable reporting year",
            "Set up ESG data collection",
        ],
    },
    FallbackRule {
        code: "AI_ACT",
        name: "EU Artificial Intelligence Act",
        category: "ai_governance",
        confidence: 0.8,
        priority: "medium",
        trigger_questions: &["aia-deploy", "aia-highrisk", "aia-transparency"],
        reasoning: "Assessment answers indicate AI systems deployed within EU AI Act scope.",
        key_obligations: &[
            "Classify AI systems by risk tier",
            "Meet transparency obligations for user-facing AI",
        ],
        next_steps: &[
            "Inventory AI systems and their intended purpose",
            "Check annex III high-risk categories",
        ],
    },
];

/// Deterministic rule evaluation over the raw answers. Codes are distinct
/// by construction, so no deduplication pass is needed.
pub fn fallback_analyze(responses: &AssessmentResponses) -> AnalysisResult {
    let mut findings = Vec::new();

    for rule in FALLBACK_RULES {
        let triggers: Vec<String> = rule
            .trigger_questions
            .iter()
            .filter(|id| {
                responses
                    .get(**id)
                    .is_some_and(|answer| answer.value.is_truthy())
            })
            .map(|id| id.to_string())
            .collect();

        if triggers.is_empty() {
            continue;
        }

        findings.push(RegulationFinding {
            code: rule.code.to_string(),
            name: rule.name.to_string(),
            confidence: rule.confidence,
            triggers,
            reasoning: rule.reasoning.to_string(),
            priority: rule.priority.to_string(),
            category: Some(rule.category.to_string()),
            key_obligations: rule.key_obligations.iter().map(|s| s.to_string()).collect(),
            thresholds_met: None,
            next_steps: rule.next_steps.iter().map(|s| s.to_string()).collect(),
        });
    }

    let risk_level = match findings.len() {
        n if n > 2 => "high",
        n if n > 0 => "medium",
        _ => "low",
    };

    let analysis = LlmAnalysis {
        applicable_regulations: findings,
        executive_summary:
            "Rule-based assessment of regulation applicability from questionnaire answers."
                .to_string(),
        risk_level: Some(risk_level.to_string()),
        fallback_used: true,
        ..LlmAnalysis::default()
    };

    finalize(analysis)
}

#[cfg(test)]
mod tests {
    use super::*;
    use complyx_common::{AssessmentAnswer, ResponseValue};

    fn responses(pairs: &[(&str, bool)]) -> AssessmentResponses {
        pairs
            .iter()
            .map(|(id, v)| {
                (
                    id.to_string(),
                    AssessmentAnswer { value: ResponseValue::Flag(*v), answered_at: None },
                )
            })
            .collect()
    }

    #[test]
    fn test_empty_responses_low_risk_no_findings() {
        let result = fallback_analyze(&AssessmentResponses::new());
        assert!(result.applicable_regulations.is_empty());
        assert!(result.supported_regulations.is_empty());
        assert!(result.unsupported_regulations.is_empty());
        assert_eq!(result.risk_level, "low");
        assert!(result.llm_analysis.fallback_used);
    }

    #[test]
    fn test_gdpr_scope_triggers_single_high_finding() {
        let result = fallback_analyze(&responses(&[("gdpr-scope", true)]));
        assert_eq!(result.applicable_regulations, vec!["GDPR"]);
        let finding = &result.llm_analysis.applicable_regulations[0];
        assert_eq!(finding.confidence, 0.9);
        assert_eq!(finding.priority, "high");
        assert_eq!(finding.triggers, vec!["gdpr-scope"]);
        assert_eq!(result.risk_level, "medium");
    }

    #[test]
    fn test_false_answers_do_not_trigger() {
        let result = fallback_analyze(&responses(&[("gdpr-scope", false), ("aia-deploy", false)]));
        assert!(result.applicable_regulations.is_empty());
    }

    #[test]
    fn test_all_three_regulations_high_risk() {
        let result = fallback_analyze(&responses(&[
            ("gdpr-transfers", true),
            ("csrd-thresholds", true),
            ("aia-highrisk", true),
        ]));
        assert_eq!(result.applicable_regulations, vec!["GDPR", "CSRD", "AI_ACT"]);
        assert_eq!(result.risk_level, "high");
        // Every fallback code is on the allow-list
        assert_eq!(result.supported_regulations, result.applicable_regulations);
        assert!(result.unsupported_regulations.is_empty());
    }

    #[test]
    fn test_multiple_triggers_collected_in_rule_order() {
        let result =
            fallback_analyze(&responses(&[("eprivacy-marketing", true), ("gdpr-special", true)]));
        let finding = &result.llm_analysis.applicable_regulations[0];
        assert_eq!(finding.triggers, vec!["gdpr-special", "eprivacy-marketing"]);
    }

    #[test]
    fn test_unknown_question_ids_ignored() {
        let result = fallback_analyze(&responses(&[("made-up-question", true)]));
        assert!(result.applicable_regulations.is_empty());
        assert_eq!(result.risk_level, "low");
    }
}
