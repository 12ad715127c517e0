// crates/bunker-harness/src/validation.rs
// ============================================================================
// Module: Token Validation
// Description: Syntactic well-formedness predicate for bearer tokens.
// Purpose: Check token shape without interpreting token semantics.
// Dependencies: std
// ============================================================================

//! ## Overview
//! The predicate pins the `b64token` grammar from RFC 6750: one or more
//! characters from ALPHA / DIGIT / `-._~+/`, followed by optional `=`
//! padding. JWT-style dotted tokens satisfy it. Nothing beyond syntax is
//! checked; expiry and signature semantics are out of scope for the harness.

// ============================================================================
// SECTION: Predicate
// ============================================================================

/// Returns true when the token matches RFC 6750 `b64token` syntax.
#[must_use]
pub fn is_well_formed_token(token: &str) -> bool {
    let core = token.trim_end_matches('=');
    if core.is_empty() {
        return false;
    }
    core.bytes().all(is_b64token_byte)
}

/// Returns true for bytes allowed in the `b64token` core.
const fn is_b64token_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'.' | b'_' | b'~' | b'+' | b'/')
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests;
