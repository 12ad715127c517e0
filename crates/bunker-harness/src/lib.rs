// crates/bunker-harness/src/lib.rs
// ============================================================================
// Module: Bunker Harness Library
// Description: Contract-test harness for the Bunker authentication API.
// Purpose: Provide soft-assertion aggregation, request templating, and the
//          scenario flow shared by all login contract tests.
// Dependencies: reqwest, serde, serde_json, thiserror, url
// ============================================================================

//! ## Overview
//! This crate hosts the reusable pieces of the Bunker login contract-test
//! suite: an aggregator that runs every declared check and reports all
//! violations at once, an immutable request template shared across scenarios,
//! the bearer-header factory, wire models for the login endpoint, and the
//! transport boundary the scenarios call through.
//!
//! The harness owns no business logic. It exercises the login endpoint as an
//! external collaborator and treats its responses as untrusted input.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod assert;
pub mod auth;
pub mod models;
pub mod scenario;
pub mod telemetry;
pub mod template;
pub mod transport;
pub mod validation;

// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use assert::AggregationError;
pub use assert::Check;
pub use assert::CheckError;
pub use assert::RunError;
pub use assert::run_all;
pub use auth::AuthHeader;
pub use auth::bearer_header;
pub use models::ApiError;
pub use models::AuthRequest;
pub use models::SecurityToken;
pub use scenario::Scenario;
pub use scenario::ScenarioError;
pub use template::ContentType;
pub use template::RequestTemplate;
pub use template::RequestTemplateBuilder;
pub use transport::HttpTransport;
pub use transport::ResponseEnvelope;
pub use transport::Transport;
pub use transport::TransportError;
