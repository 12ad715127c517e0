// crates/bunker-harness/src/transport.rs
// ============================================================================
// Module: Transport Boundary
// Description: HTTP send boundary between scenarios and the network.
// Purpose: Issue one POST per scenario and capture the raw response.
// Dependencies: reqwest, serde_json, thiserror
// ============================================================================

//! ## Overview
//! The [`Transport`] trait is the seam between the scenario flow and the
//! network. [`HttpTransport`] is the production implementation on top of
//! `reqwest`; scenario unit tests substitute canned implementations. The
//! transport never retries: a timeout or connection failure surfaces as a
//! [`TransportError`] and aborts the scenario at the point of detection.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use thiserror::Error;

use crate::auth::AuthHeader;
use crate::models::AuthRequest;
use crate::telemetry::NoopTraceSink;
use crate::telemetry::RequestTrace;
use crate::telemetry::ResponseTrace;
use crate::telemetry::TraceHook;
use crate::telemetry::TraceSink;
use crate::template::RequestTemplate;

// ============================================================================
// SECTION: Captured Response
// ============================================================================

/// Captured outcome of one request.
///
/// # Invariants
/// - Owned exclusively by one scenario invocation; never shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseEnvelope {
    /// HTTP status code.
    pub status: u16,
    /// Raw response body.
    pub body: String,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Transport-level failures.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
/// - Never retried and never aggregated into assertion reports.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network, TLS, or timeout failure from the HTTP client.
    #[error("http transport failure: {0}")]
    Http(#[from] reqwest::Error),
    /// Request body could not be serialized.
    #[error("request body encoding failed: {0}")]
    Encode(#[source] serde_json::Error),
}

// ============================================================================
// SECTION: Transport Trait
// ============================================================================

/// Send boundary consumed by the scenario flow.
pub trait Transport {
    /// Issues one request composed from the template, header, and body.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when the request cannot be composed or the
    /// network call fails.
    fn send(
        &self,
        template: &RequestTemplate,
        header: Option<&AuthHeader>,
        body: Option<&AuthRequest>,
    ) -> impl Future<Output = Result<ResponseEnvelope, TransportError>>;
}

// ============================================================================
// SECTION: HTTP Transport
// ============================================================================

/// Production transport on top of `reqwest`.
pub struct HttpTransport {
    /// Underlying HTTP client with its timeout applied.
    client: Client,
    /// Sink receiving the template's enabled trace events.
    sink: Arc<dyn TraceSink>,
}

impl HttpTransport {
    /// Creates a transport whose requests time out after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when the HTTP client cannot be built.
    pub fn new(timeout: Duration) -> Result<Self, TransportError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, sink: Arc::new(NoopTraceSink) })
    }

    /// Replaces the trace sink.
    #[must_use]
    pub fn with_sink(mut self, sink: Arc<dyn TraceSink>) -> Self {
        self.sink = sink;
        self
    }
}

impl Transport for HttpTransport {
    async fn send(
        &self,
        template: &RequestTemplate,
        header: Option<&AuthHeader>,
        body: Option<&AuthRequest>,
    ) -> Result<ResponseEnvelope, TransportError> {
        let payload = match body {
            Some(body) => Some(serde_json::to_string(body).map_err(TransportError::Encode)?),
            None => None,
        };

        let mut request = self
            .client
            .post(template.base_endpoint().clone())
            .header("Content-Type", template.content_type().as_str());
        if let Some(header) = header {
            request = request.header(header.name(), header.value());
        }
        if let Some(payload) = &payload {
            request = request.body(payload.clone());
        }

        if template.hook_enabled(TraceHook::Request) {
            self.sink.on_request(&RequestTrace {
                endpoint: template.base_endpoint().as_str(),
                content_type: template.content_type().as_str(),
                authorization: header.map(AuthHeader::value),
                body: payload.as_deref(),
            });
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        if template.hook_enabled(TraceHook::Response) {
            self.sink.on_response(&ResponseTrace { status, body: &body });
        }

        Ok(ResponseEnvelope { status, body })
    }
}
