// crates/bunker-harness/src/telemetry.rs
// ============================================================================
// Module: Harness Telemetry
// Description: Observability hooks for request/response tracing.
// Purpose: Provide trace events around transport calls without hard deps.
// Dependencies: std
// ============================================================================

//! ## Overview
//! This module exposes a thin tracing interface invoked around each
//! transport call. It is intentionally dependency-light so suites can plug
//! in structured logging or a reporter without redesign; the harness itself
//! consumes no return value from a sink.
//!
//! Hook selection is declarative ([`TraceHook`]) so that request templates
//! carrying hooks stay value-comparable and freely shareable.

// ============================================================================
// SECTION: Hook Selection
// ============================================================================

/// Trace points a request template can enable.
///
/// # Invariants
/// - Variants are stable for labeling and template equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceHook {
    /// Emit a trace event before the request is sent.
    Request,
    /// Emit a trace event after the response is captured.
    Response,
}

impl TraceHook {
    /// Returns a stable label for the hook.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Request => "request",
            Self::Response => "response",
        }
    }
}

// ============================================================================
// SECTION: Trace Events
// ============================================================================

/// Snapshot of an outgoing request, emitted before the send.
#[derive(Debug, Clone, Copy)]
pub struct RequestTrace<'a> {
    /// Target endpoint.
    pub endpoint: &'a str,
    /// Content type of the request.
    pub content_type: &'a str,
    /// Authorization header value, when one is attached.
    pub authorization: Option<&'a str>,
    /// Serialized request body, when one is attached.
    pub body: Option<&'a str>,
}

/// Snapshot of a captured response, emitted after the send.
#[derive(Debug, Clone, Copy)]
pub struct ResponseTrace<'a> {
    /// HTTP status code.
    pub status: u16,
    /// Raw response body.
    pub body: &'a str,
}

// ============================================================================
// SECTION: Trace Sink
// ============================================================================

/// Receiver for trace events emitted around transport calls.
///
/// Sinks must tolerate concurrent scenarios; the harness never inspects a
/// sink's state.
pub trait TraceSink: Send + Sync {
    /// Receives a request trace before the send.
    fn on_request(&self, trace: &RequestTrace<'_>);

    /// Receives a response trace after the response is captured.
    fn on_response(&self, trace: &ResponseTrace<'_>);
}

/// Sink that records nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopTraceSink;

impl TraceSink for NoopTraceSink {
    fn on_request(&self, _trace: &RequestTrace<'_>) {}

    fn on_response(&self, _trace: &ResponseTrace<'_>) {}
}
