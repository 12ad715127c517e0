// crates/bunker-harness/src/template.rs
// ============================================================================
// Module: Request Template
// Description: Immutable, shareable base configuration for login requests.
// Purpose: Isolate endpoint, content type, and tracing from per-scenario data.
// Dependencies: url
// ============================================================================

//! ## Overview
//! A [`RequestTemplate`] is built once at suite start and passed by
//! reference into each scenario. It never issues requests itself; the
//! transport consumes it together with a per-call body and header. Because
//! the value is immutable, concurrent scenarios share one instance without
//! synchronization.
//!
//! Building twice from identical configuration yields two independent,
//! value-equal instances that share no mutable state.

// ============================================================================
// SECTION: Imports
// ============================================================================

use url::Url;

use crate::telemetry::TraceHook;

// ============================================================================
// SECTION: Content Type
// ============================================================================

/// Content type carried by a request template.
///
/// # Invariants
/// - Variants are stable for template equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    /// `application/json`.
    Json,
    /// `application/x-www-form-urlencoded`.
    FormUrlEncoded,
}

impl ContentType {
    /// Returns the wire value of the content type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::FormUrlEncoded => "application/x-www-form-urlencoded",
        }
    }
}

// ============================================================================
// SECTION: Template
// ============================================================================

/// Immutable base configuration shared by all scenarios of a suite.
///
/// # Invariants
/// - Never mutated after [`RequestTemplateBuilder::build`].
/// - Trace hooks keep their declared order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTemplate {
    /// Endpoint every scenario posts to.
    base_endpoint: Url,
    /// Content type attached to every request.
    content_type: ContentType,
    /// Enabled trace hooks, in declared order.
    hooks: Vec<TraceHook>,
}

impl RequestTemplate {
    /// Returns the base endpoint.
    #[must_use]
    pub const fn base_endpoint(&self) -> &Url {
        &self.base_endpoint
    }

    /// Returns the content type.
    #[must_use]
    pub const fn content_type(&self) -> ContentType {
        self.content_type
    }

    /// Returns the enabled trace hooks in declared order.
    #[must_use]
    pub fn hooks(&self) -> &[TraceHook] {
        &self.hooks
    }

    /// Returns true when the given hook is enabled.
    #[must_use]
    pub fn hook_enabled(&self, hook: TraceHook) -> bool {
        self.hooks.contains(&hook)
    }
}

// ============================================================================
// SECTION: Builder
// ============================================================================

/// Builder for [`RequestTemplate`].
#[derive(Debug, Clone)]
pub struct RequestTemplateBuilder {
    /// Endpoint the built template will post to.
    base_endpoint: Url,
    /// Content type for the built template.
    content_type: ContentType,
    /// Trace hooks accumulated in declared order.
    hooks: Vec<TraceHook>,
}

impl RequestTemplateBuilder {
    /// Creates a builder for the given endpoint, defaulting to JSON content.
    #[must_use]
    pub fn new(base_endpoint: Url) -> Self {
        Self { base_endpoint, content_type: ContentType::Json, hooks: Vec::new() }
    }

    /// Sets the content type.
    #[must_use]
    pub fn content_type(mut self, content_type: ContentType) -> Self {
        self.content_type = content_type;
        self
    }

    /// Enables a trace hook; order of calls is preserved.
    #[must_use]
    pub fn trace_hook(mut self, hook: TraceHook) -> Self {
        self.hooks.push(hook);
        self
    }

    /// Builds the immutable template.
    #[must_use]
    pub fn build(self) -> RequestTemplate {
        RequestTemplate {
            base_endpoint: self.base_endpoint,
            content_type: self.content_type,
            hooks: self.hooks,
        }
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
