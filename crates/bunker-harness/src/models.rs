// crates/bunker-harness/src/models.rs
// ============================================================================
// Module: Login Wire Models
// Description: Request and response shapes for the Bunker login endpoint.
// Purpose: Define the serialized contract the scenarios exercise.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Wire shapes for `POST /login`. The request body carries optional
//! credentials so scenarios can probe missing-field handling; absent fields
//! are omitted from the JSON entirely rather than serialized as `null`.
//! Responses come in two status-dependent variants: [`SecurityToken`] for
//! 200 and [`ApiError`] for 400/401. Variant selection is the scenario
//! flow's responsibility and happens only after the status precondition
//! passes.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Request Body
// ============================================================================

/// Credentials posted to the login endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AuthRequest {
    /// Account login; omitted from the JSON when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,
    /// Account password; omitted from the JSON when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl AuthRequest {
    /// Builds a body carrying both credentials.
    #[must_use]
    pub fn credentials(login: &str, password: &str) -> Self {
        Self { login: Some(login.to_string()), password: Some(password.to_string()) }
    }
}

// ============================================================================
// SECTION: Response Shapes
// ============================================================================

/// Success body returned with status 200.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityToken {
    /// Login the token was issued for.
    pub login: String,
    /// Access token.
    pub token: String,
    /// Refresh token.
    pub refresh_token: String,
    /// Token expiry timestamp.
    pub expired_at: String,
}

/// Error body returned with status 400 or 401.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// Short error class.
    pub error: String,
    /// Human-readable detail message.
    pub message: String,
    /// Status code repeated in the body.
    pub status: u16,
    /// Server-side timestamp of the failure.
    pub timestamp: String,
}

// ============================================================================
// SECTION: Tests
// ============================================================================
