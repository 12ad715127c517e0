// system-tests/src/config/env.rs
// ============================================================================
// Module: System Test Environment
// Description: Environment-backed configuration for system tests.
// Purpose: Centralize env parsing with fail-closed validation.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Environment values are validated strictly; an unparsable override is an
//! error rather than a silently applied default, so misconfigured CI runs
//! fail at the first scenario instead of running with the wrong timeout.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::time::Duration;

// ============================================================================
// SECTION: Environment Constants
// ============================================================================

/// Environment keys for system test configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemTestEnv {
    /// Optional timeout override in seconds (positive integer).
    TimeoutSeconds,
}

impl SystemTestEnv {
    /// Returns the canonical environment variable name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TimeoutSeconds => "BUNKER_SYSTEM_TEST_TIMEOUT_SEC",
        }
    }
}

// ============================================================================
// SECTION: Timeout Resolution
// ============================================================================

/// Returns the effective timeout, honoring the environment override when set.
/// The override acts as a minimum to avoid shortening explicitly longer
/// test timeouts.
///
/// # Errors
///
/// Returns an error when the override is present but not a positive integer
/// number of seconds.
pub fn resolve_timeout(requested: Duration) -> Result<Duration, String> {
    match env::var(SystemTestEnv::TimeoutSeconds.as_str()) {
        Ok(raw) => {
            let override_timeout = parse_timeout_secs(&raw)
                .map_err(|err| format!("{} {err}", SystemTestEnv::TimeoutSeconds.as_str()))?;
            Ok(std::cmp::max(requested, override_timeout))
        }
        Err(_) => Ok(requested),
    }
}

/// Parses a timeout override into a duration.
pub(crate) fn parse_timeout_secs(raw: &str) -> Result<Duration, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("must be a positive integer number of seconds".to_string());
    }
    let secs: u64 =
        trimmed.parse().map_err(|_| "must be a positive integer number of seconds".to_string())?;
    if secs == 0 {
        return Err("must be greater than zero".to_string());
    }
    Ok(Duration::from_secs(secs))
}
