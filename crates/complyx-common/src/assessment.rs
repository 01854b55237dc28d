//! Assessment input types: the answers a user gave and the question bank
//! they answered against. The question bank is owned by an external
//! collaborator; these types only mirror what the analysis engine consumes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A single answer value. Question types are mixed (yes/no toggles,
/// free text, numeric thresholds), so the wire value is untagged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseValue {
    Flag(bool),
    Number(f64),
    Text(String),
}

impl ResponseValue {
    /// Truthiness of an answer: booleans as themselves, numbers non-zero,
    /// strings non-empty.
    pub fn is_truthy(&self) -> bool {
        match self {
            ResponseValue::Flag(b) => *b,
            ResponseValue::Number(n) => *n != 0.0,
            ResponseValue::Text(s) => !s.is_empty(),
        }
    }
}

impl fmt::Display for ResponseValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseValue::Flag(b) => write!(f, "{b}"),
            ResponseValue::Number(n) => write!(f, "{n}"),
            ResponseValue::Text(s) => write!(f, "{s}"),
        }
    }
}

/// One recorded answer. `answered_at` is filled in by the route layer as
/// the user works through the questionnaire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentAnswer {
    pub value: ResponseValue,
    #[serde(default)]
    pub answered_at: Option<DateTime<Utc>>,
}

/// All answers of one assessment, keyed by question id.
/// Keys are unique per assessment; iteration order carries no meaning.
pub type AssessmentResponses = HashMap<String, AssessmentAnswer>;

/// A question from the static question bank. Read-only to the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub text: String,
    #[serde(rename = "type")]
    pub question_type: String,
    #[serde(default)]
    pub answer_type: Option<String>,
}

/// A named section of the question bank with its questions in display order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionSection {
    pub section: String,
    pub questions: Vec<Question>,
}
