//! Analysis engine — orchestrates the LLM path and absorbs its failures.
//!
//! `analyze` never returns an error: any transport, provider, or parse
//! failure is logged and replaced by the rule-based fallback, so the
//! caller always receives the same result shape.

use crate::catalog::partition_supported;
use crate::context::build_context;
use crate::dedupe::dedupe_findings;
use crate::error::AnalysisError;
use crate::extract::extract_json_payload;
use crate::fallback::fallback_analyze;
use crate::prompt::{build_analysis_prompt, PROMPT_VERSION, SYSTEM_INSTRUCTION};
use chrono::Utc;
use complyx_common::{AnalysisResult, AssessmentResponses, LlmAnalysis, QuestionSection};
use complyx_llm::audit::AnalysisAuditEntry;
use complyx_llm::{LlmBackend, LlmRequest, Message};
use std::sync::Arc;
use std::time::Instant;

pub struct AnalysisEngine {
    backend: Arc<dyn LlmBackend>,
}

impl AnalysisEngine {
    pub fn new(backend: Arc<dyn LlmBackend>) -> Self {
        Self { backend }
    }

    /// Analyze one assessment submission. Infallible from the caller's
    /// perspective; the LLM/fallback distinction is visible only in the
    /// audit log and the `fallback_used` flag.
    pub async fn analyze(
        &self,
        responses: &AssessmentResponses,
        sections: &[QuestionSection],
    ) -> AnalysisResult {
        match self.analyze_with_llm(responses, sections).await {
            Ok(result) => result,
            Err(err) => {
                tracing::warn!(error = %err, "LLM analysis failed, using rule-based fallback");
                let result = fallback_analyze(responses);
                let entry = AnalysisAuditEntry::new(
                    self.backend.model_id().to_string(),
                    self.backend.provider().to_string(),
                    0,
                    0,
                    PROMPT_VERSION.to_string(),
                    true,
                    &result.summary,
                    0,
                );
                tracing::info!(
                    audit_id = %entry.id,
                    fallback_used = entry.fallback_used,
                    "analysis complete"
                );
                result
            }
        }
    }

    async fn analyze_with_llm(
        &self,
        responses: &AssessmentResponses,
        sections: &[QuestionSection],
    ) -> Result<AnalysisResult, AnalysisError> {
        let context = build_context(responses, sections);
        let prompt = build_analysis_prompt(&context);

        let started = Instant::now();
        let response = self
            .backend
            .complete(LlmRequest {
                messages: vec![Message::system(SYSTEM_INSTRUCTION), Message::user(prompt)],
                model: None,
                max_tokens: Some(self.backend.max_output_tokens()),
                temperature: Some(0.0),
            })
            .await?;
        let latency_ms = started.elapsed().as_millis() as u64;

        let payload = extract_json_payload(&response.content);
        let mut analysis: LlmAnalysis = serde_json::from_str(payload)
            .map_err(|e| AnalysisError::MalformedResponse(e.to_string()))?;

        analysis.applicable_regulations =
            dedupe_findings(std::mem::take(&mut analysis.applicable_regulations));
        analysis.fallback_used = false;

        let entry = AnalysisAuditEntry::new(
            response.model.clone(),
            self.backend.provider().to_string(),
            response.prompt_tokens,
            response.completion_tokens,
            PROMPT_VERSION.to_string(),
            false,
            &response.content,
            latency_ms,
        );
        tracing::info!(
            audit_id = %entry.id,
            model = %entry.model,
            latency_ms = entry.latency_ms,
            output_hash = %entry.output_hash,
            regulations = analysis.applicable_regulations.len(),
            "analysis complete"
        );

        Ok(finalize(analysis))
    }
}

/// Assemble the caller-facing result: collect finding codes, partition by
/// the allow-list, and lift summary/risk/recommendations out of the
/// analysis object. Shared by the LLM and fallback paths.
pub(crate) fn finalize(analysis: LlmAnalysis) -> AnalysisResult {
    let codes: Vec<String> = analysis
        .applicable_regulations
        .iter()
        .map(|f| f.code.clone())
        .collect();
    let (supported, unsupported) = partition_supported(&codes);

    AnalysisResult {
        applicable_regulations: codes,
        supported_regulations: supported,
        unsupported_regulations: unsupported,
        summary: analysis.executive_summary.clone(),
        risk_level: analysis
            .risk_level
            .clone()
            .unwrap_or_else(|| "medium".to_string()),
        recommendations: analysis.recommendations.clone(),
        processed_at: Utc::now(),
        llm_analysis: analysis,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use complyx_common::{AssessmentAnswer, Question, RegulationFinding, ResponseValue};
    use complyx_llm::{LlmError, LlmResponse};

    /// Backend returning a canned completion, or a canned failure.
    struct ScriptedBackend {
        content: Option<String>,
    }

    impl ScriptedBackend {
        fn returning(content: &str) -> Self {
            Self { content: Some(content.to_string()) }
        }

        fn failing() -> Self {
            Self { content: None }
        }
    }

    #[async_trait]
    impl LlmBackend for ScriptedBackend {
        async fn complete(&self, _req: LlmRequest) -> Result<LlmResponse, LlmError> {
            match &self.content {
                Some(content) => Ok(LlmResponse {
                    content: content.clone(),
                    model: "scripted".to_string(),
                    prompt_tokens: 100,
                    completion_tokens: 50,
                }),
                None => Err(LlmError::Unavailable("scripted outage".to_string())),
            }
        }

        fn model_id(&self) -> &str { "scripted" }
        fn provider(&self) -> &'static str { "scripted" }
        fn max_output_tokens(&self) -> u32 { 4096 }
    }

    fn bank() -> Vec<QuestionSection> {
        vec![QuestionSection {
            section: "Data Protection".to_string(),
            questions: vec![Question {
                id: "gdpr-scope".to_string(),
                text: "Do you process personal data of people in the EU?".to_string(),
                question_type: "boolean".to_string(),
                answer_type: None,
            }],
        }]
    }

    fn gdpr_responses() -> AssessmentResponses {
        let mut responses = AssessmentResponses::new();
        responses.insert(
            "gdpr-scope".to_string(),
            AssessmentAnswer { value: ResponseValue::Flag(true), answered_at: None },
        );
        responses
    }

    fn engine(backend: ScriptedBackend) -> AnalysisEngine {
        AnalysisEngine::new(Arc::new(backend))
    }

    #[tokio::test]
    async fn test_fenced_response_parsed_like_bare_json() {
        let body = r#"{"applicable_regulations": [{"code": "GDPR", "confidence": 0.92}],
                       "executive_summary": "GDPR applies.", "risk_level": "high"}"#;
        let fenced = format!("```json\n{body}\n```");

        let bare = engine(ScriptedBackend::returning(body))
            .analyze(&gdpr_responses(), &bank())
            .await;
        let wrapped = engine(ScriptedBackend::returning(&fenced))
            .analyze(&gdpr_responses(), &bank())
            .await;

        for result in [&bare, &wrapped] {
            assert!(!result.llm_analysis.fallback_used);
            assert_eq!(result.applicable_regulations, vec!["GDPR"]);
            assert_eq!(result.supported_regulations, vec!["GDPR"]);
            assert_eq!(result.summary, "GDPR applies.");
            assert_eq!(result.risk_level, "high");
        }
    }

    #[tokio::test]
    async fn test_duplicate_codes_deduped_in_result() {
        let body = r#"{"applicable_regulations": [
            {"code": "GDPR", "confidence": 0.8, "triggers": ["a"]},
            {"code": "GDPR", "confidence": 0.95, "triggers": ["b"]}
        ]}"#;
        let result = engine(ScriptedBackend::returning(body))
            .analyze(&gdpr_responses(), &bank())
            .await;
        assert_eq!(result.applicable_regulations, vec!["GDPR"]);
        let finding = &result.llm_analysis.applicable_regulations[0];
        assert_eq!(finding.confidence, 0.95);
        assert_eq!(finding.triggers, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_unsupported_code_partitioned() {
        let body = r#"{"applicable_regulations": [
            {"code": "GDPR", "confidence": 0.9},
            {"code": "NIS2", "confidence": 0.88}
        ]}"#;
        let result = engine(ScriptedBackend::returning(body))
            .analyze(&gdpr_responses(), &bank())
            .await;
        assert_eq!(result.applicable_regulations, vec!["GDPR", "NIS2"]);
        assert_eq!(result.supported_regulations, vec!["GDPR"]);
        assert_eq!(result.unsupported_regulations, vec!["NIS2"]);
    }

    #[tokio::test]
    async fn test_backend_outage_falls_back() {
        let result = engine(ScriptedBackend::failing())
            .analyze(&gdpr_responses(), &bank())
            .await;
        assert!(result.llm_analysis.fallback_used);
        assert_eq!(result.applicable_regulations, vec!["GDPR"]);
        let finding = &result.llm_analysis.applicable_regulations[0];
        assert_eq!(finding.confidence, 0.9);
        assert_eq!(finding.priority, "high");
        assert_eq!(result.risk_level, "medium");
    }

    #[tokio::test]
    async fn test_non_json_response_falls_back() {
        let result = engine(ScriptedBackend::returning("I am unable to produce JSON today."))
            .analyze(&gdpr_responses(), &bank())
            .await;
        assert!(result.llm_analysis.fallback_used);
        assert_eq!(result.applicable_regulations, vec!["GDPR"]);
    }

    #[tokio::test]
    async fn test_missing_regulations_field_is_empty_not_error() {
        let body = r#"{"executive_summary": "Nothing applies."}"#;
        let result = engine(ScriptedBackend::returning(body))
            .analyze(&gdpr_responses(), &bank())
            .await;
        assert!(!result.llm_analysis.fallback_used);
        assert!(result.applicable_regulations.is_empty());
        assert!(result.supported_regulations.is_empty());
        assert!(result.unsupported_regulations.is_empty());
    }

    #[test]
    fn test_empty_responses_produce_result_with_no_findings() {
        let body = r#"{"applicable_regulations": [], "executive_summary": "No answers given."}"#;
        let result = tokio_test::block_on(
            engine(ScriptedBackend::returning(body)).analyze(&AssessmentResponses::new(), &bank()),
        );
        assert!(result.applicable_regulations.is_empty());
        assert_eq!(result.summary, "No answers given.");
    }

    #[test]
    fn test_partition_covers_codes_exactly() {
        let analysis = LlmAnalysis {
            applicable_regulations: vec![
                RegulationFinding {
                    code: "AI_ACT".to_string(),
                    ..finding_stub()
                },
                RegulationFinding {
                    code: "DORA".to_string(),
                    ..finding_stub()
                },
            ],
            ..LlmAnalysis::default()
        };
        let result = finalize(analysis);
        let mut rejoined = result.supported_regulations.clone();
        rejoined.extend(result.unsupported_regulations.clone());
        rejoined.sort();
        let mut codes = result.applicable_regulations.clone();
        codes.sort();
        assert_eq!(rejoined, codes);
        assert_eq!(result.risk_level, "medium");
    }

    fn finding_stub() -> RegulationFinding {
        RegulationFinding {
            code: String::new(),
            name: String::new(),
            confidence: 0.5,
            triggers: Vec::new(),
            reasoning: String::new(),
            priority: "low".to_string(),
            category: None,
            key_obligations: Vec::new(),
            thresholds_met: None,
            next_steps: Vec::new(),
        }
    }
}
