//! complyx-web — thin HTTP surface over the analysis engine.
//! Input validation, persistence, and authentication live with external
//! collaborators; this crate only exposes the engine and the catalog.

pub mod config;
pub mod state;
pub mod router;
pub mod handlers;
