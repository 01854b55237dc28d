//! Assessment submission endpoint.
//!
//! The route layer upstream validates the submission; here the engine is
//! invoked directly and always answers with a completed result — an LLM
//! outage degrades to the rule-based fallback, never to an error response.

use axum::extract::{Json, State};
use complyx_common::{AnalysisResult, AssessmentResponses, QuestionSection};
use serde::Deserialize;
use crate::state::SharedState;

#[derive(Debug, Deserialize)]
pub struct AnalysisRequest {
    pub responses: AssessmentResponses,
    pub questions: Vec<QuestionSection>,
}

pub async fn analyze_submit(
    State(state): State<SharedState>,
    Json(payload): Json<AnalysisRequest>,
) -> Json<AnalysisResult> {
    let result = state.engine.analyze(&payload.responses, &payload.questions).await;
    Json(result)
}
