// crates/bunker-harness/src/scenario.rs
// ============================================================================
// Module: Scenario Flow
// Description: Arrange/Act/Assert orchestration for login scenarios.
// Purpose: Issue one request, enforce the status precondition, decode the
//          status-appropriate shape, and route checks to the aggregator.
// Dependencies: serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! Each scenario moves through a linear flow with one branch:
//! `Init → Requested → { StatusMismatch | StatusMatched → Parsed →
//! Asserted }`. The status precondition is a hard check, evaluated before
//! any body parsing, because the body's schema is status-dependent and
//! decoding under the wrong schema is undefined. Field-level checks are
//! soft and run through [`crate::assert::run_all`] so every violation is
//! reported at once.
//!
//! A [`Scenario`] borrows the suite's shared [`RequestTemplate`]; all
//! per-invocation state stays local, so concurrent scenarios need no
//! synchronization.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::assert::Check;
use crate::assert::RunError;
use crate::assert::run_all;
use crate::auth::AuthHeader;
use crate::models::AuthRequest;
use crate::template::RequestTemplate;
use crate::transport::Transport;
use crate::transport::TransportError;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Failures surfaced by one scenario invocation.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
/// - Only [`ScenarioError::Checks`] carries aggregated soft failures; every
///   other variant aborts the scenario at the point of detection.
#[derive(Debug, Error)]
pub enum ScenarioError {
    /// Hard precondition: actual status differed from the expected status.
    #[error("expected status {expected}, got {actual}; body: {body}")]
    Status {
        /// Status the scenario declared.
        expected: u16,
        /// Status the endpoint returned.
        actual: u16,
        /// Raw body, kept for diagnosis; never parsed on this path.
        body: String,
    },
    /// Network or composition failure from the transport collaborator.
    #[error("transport failure: {0}")]
    Transport(#[from] TransportError),
    /// Body did not match the expected shape after the status matched.
    #[error("response decode failure: {0}")]
    Decode(#[from] serde_json::Error),
    /// Outcome of the soft-assertion run.
    #[error(transparent)]
    Checks(#[from] RunError),
}

// ============================================================================
// SECTION: Scenario
// ============================================================================

/// One scenario's view of the suite: shared template plus a transport.
pub struct Scenario<'a, T: Transport> {
    /// Template shared across the whole suite.
    template: &'a RequestTemplate,
    /// Transport collaborator issuing the request.
    transport: &'a T,
}

impl<'a, T: Transport> Scenario<'a, T> {
    /// Couples the shared template with a transport.
    #[must_use]
    pub const fn new(template: &'a RequestTemplate, transport: &'a T) -> Self {
        Self { template, transport }
    }

    /// Issues the request and decodes the response into `R`.
    ///
    /// The status precondition runs before any decode attempt; on mismatch
    /// the raw body is reported for diagnosis and parsing never happens.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError::Transport`] when the send fails,
    /// [`ScenarioError::Status`] when the returned status differs from
    /// `expected_status`, and [`ScenarioError::Decode`] when the body does
    /// not match `R` after the status matched.
    pub async fn execute<R: DeserializeOwned>(
        &self,
        header: Option<&AuthHeader>,
        body: Option<&AuthRequest>,
        expected_status: u16,
    ) -> Result<R, ScenarioError> {
        let envelope = self.transport.send(self.template, header, body).await?;
        if envelope.status != expected_status {
            return Err(ScenarioError::Status {
                expected: expected_status,
                actual: envelope.status,
                body: envelope.body,
            });
        }
        let parsed = serde_json::from_str(&envelope.body)?;
        Ok(parsed)
    }
}

// ============================================================================
// SECTION: Soft Verification
// ============================================================================

/// Runs the scenario's field-level checks through the aggregator.
///
/// # Errors
///
/// Returns [`ScenarioError::Checks`] when any check reported a violation or
/// a check hit a fatal fault.
pub fn verify<'c, I>(checks: I) -> Result<(), ScenarioError>
where
    I: IntoIterator<Item = Check<'c>>,
{
    run_all(checks)?;
    Ok(())
}

// ============================================================================
// SECTION: Tests
// ============================================================================
