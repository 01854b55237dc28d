//! JSON extraction from raw completion text.
//!
//! Models asked for bare JSON still wrap it in a fenced code block often
//! enough that extraction tries the fence pattern first and falls back to
//! the raw text.

use regex::Regex;
use std::sync::OnceLock;

fn fence_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Matches ```json ... ``` and unlabeled ``` ... ``` fences.
    RE.get_or_init(|| Regex::new(r"```(?:json)?\s*([\s\S]*?)```").unwrap())
}

/// Return the JSON payload inside the first fenced block, or the trimmed
/// raw text when no fence is present. Validity is the parser's problem.
pub fn extract_json_payload(raw: &str) -> &str {
    if let Some(cap) = fence_regex().captures(raw) {
        if let Some(inner) = cap.get(1) {
            return inner.as_str().trim();
        }
    }
    raw.trim()
}
