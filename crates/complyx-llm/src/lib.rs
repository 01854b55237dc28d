//! complyx-llm — LLM completion backend abstraction.
//! One trait, three providers, and the audit record every call emits.

pub mod backend;
pub mod audit;

pub use backend::{LlmBackend, LlmError, LlmRequest, LlmResponse, Message};
