// crates/bunker-harness/src/auth.rs
// ============================================================================
// Module: Auth Header Factory
// Description: Bearer authorization header construction for login scenarios.
// Purpose: Map a raw token string to its `Authorization` header value.
// Dependencies: std
// ============================================================================

//! ## Overview
//! The factory is deliberately validation-free: empty and malformed tokens
//! pass through verbatim so scenarios can probe how the endpoint handles
//! them. Token well-formedness is a separate concern, checked by
//! [`crate::validation::is_well_formed_token`] where a scenario asks for it.
//! The header is a plain value rather than a `reqwest` header type precisely
//! so no validation sneaks in at this layer.

// ============================================================================
// SECTION: Header Value
// ============================================================================

/// Canonical name of the authorization header.
pub const AUTHORIZATION: &str = "Authorization";

/// An `Authorization` header value paired with its canonical name.
///
/// # Invariants
/// - The value is exactly `Bearer ` followed by the token it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthHeader {
    /// Full header value, including the `Bearer ` prefix.
    value: String,
}

impl AuthHeader {
    /// Returns the header name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        AUTHORIZATION
    }

    /// Returns the full header value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

// ============================================================================
// SECTION: Factory
// ============================================================================

/// Builds a bearer authorization header from a raw token.
///
/// Deterministic and side-effect free; the token is not validated.
#[must_use]
pub fn bearer_header(token: &str) -> AuthHeader {
    AuthHeader { value: format!("Bearer {token}") }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
