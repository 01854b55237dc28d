//! Audit record for analysis runs.
//!
//! The audit log is the only place the LLM/fallback distinction is
//! observable; the caller-facing result shape is identical on both paths.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisAuditEntry {
    pub id: Uuid,
    pub model: String,
    pub backend: String,
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub prompt_version: String,
    pub fallback_used: bool,
    pub output_hash: String,
    pub latency_ms: u64,
    pub called_at: chrono::DateTime<Utc>,
}

impl AnalysisAuditEntry {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        model: String,
        backend: String,
        prompt_tokens: u32,
        completion_tokens: u32,
        prompt_version: String,
        fallback_used: bool,
        output: &str,
        latency_ms: u64,
    ) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(output.as_bytes());
        let output_hash = format!("{:x}", hasher.finalize());

        Self {
            id: Uuid::new_v4(),
            model,
            backend,
            prompt_tokens,
            completion_tokens,
            prompt_version,
            fallback_used,
            output_hash,
            latency_ms,
            called_at: Utc::now(),
        }
    }
}
