// crates/bunker-harness/src/assert.rs
// ============================================================================
// Module: Soft Assertion Aggregator
// Description: Ordered execution of independent checks with full reporting.
// Purpose: Run every declared check against a captured response and report
//          all contract violations in a single consolidated failure.
// Dependencies: thiserror, std
// ============================================================================

//! ## Overview
//! Many contract checks against one response are logically independent:
//! status, several body fields, timestamp format. Stopping at the first
//! violation hides the others and forces repeated runs to discover the full
//! defect surface. [`run_all`] therefore executes every check in declared
//! order and fails once, with every violation listed.
//!
//! The aggregation boundary catches assertion-style failures only. A check
//! that hits an environment or programming defect signals
//! [`CheckError::Fatal`], which aborts the run immediately so infrastructure
//! problems are never buried inside an assertion report.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::error::Error;
use std::fmt::Display;

use thiserror::Error;

// ============================================================================
// SECTION: Check Types
// ============================================================================

/// Result of executing a single check.
pub type CheckResult = Result<(), CheckError>;

/// A deferred, named unit of verification.
///
/// # Invariants
/// - A check's identity is its position in the declared sequence.
/// - Checks run at aggregation time, never at construction time.
pub type Check<'a> = Box<dyn FnOnce() -> CheckResult + 'a>;

/// Failure signaled by a single check.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
/// - Only [`CheckError::Assertion`] is ever aggregated.
#[derive(Debug, Error)]
pub enum CheckError {
    /// Soft contract violation; collected and reported with its siblings.
    #[error("{0}")]
    Assertion(String),
    /// Environment or programming defect; aborts the run immediately.
    #[error("fatal check error: {0}")]
    Fatal(#[source] Box<dyn Error + Send + Sync>),
}

impl CheckError {
    /// Builds a soft assertion failure from a message.
    #[must_use]
    pub fn assertion(message: impl Into<String>) -> Self {
        Self::Assertion(message.into())
    }

    /// Wraps a non-assertion error that must abort the run.
    #[must_use]
    pub fn fatal(source: impl Error + Send + Sync + 'static) -> Self {
        Self::Fatal(Box::new(source))
    }
}

// ============================================================================
// SECTION: Aggregation Errors
// ============================================================================

/// Consolidated report of every violated check in one aggregation run.
///
/// # Invariants
/// - Messages appear in the order the failing checks were declared.
/// - An instance is only constructed for a non-empty report.
#[derive(Debug, Error)]
#[error("{}", .messages.join("\n"))]
pub struct AggregationError {
    /// Failure messages in declaration order.
    messages: Vec<String>,
}

impl AggregationError {
    /// Returns the collected failure messages in declaration order.
    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}

/// Outcome of a full aggregation run.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum RunError {
    /// One or more checks reported a contract violation.
    #[error(transparent)]
    Aggregated(#[from] AggregationError),
    /// A check hit a non-assertion fault; re-raised unchanged.
    #[error("fatal check error: {0}")]
    Fatal(#[source] Box<dyn Error + Send + Sync>),
}

// ============================================================================
// SECTION: Aggregation
// ============================================================================

/// Runs every check in declared order, collecting soft failures.
///
/// Checks are never skipped, reordered, or short-circuited by a sibling's
/// assertion failure. A [`CheckError::Fatal`] aborts the run at the point of
/// detection and surfaces as [`RunError::Fatal`].
///
/// # Errors
///
/// Returns [`RunError::Aggregated`] when at least one check reported a
/// violation, with every message in declaration order, and
/// [`RunError::Fatal`] when a check hit a non-assertion fault.
pub fn run_all<'a, I>(checks: I) -> Result<(), RunError>
where
    I: IntoIterator<Item = Check<'a>>,
{
    let mut messages = Vec::new();
    for check in checks {
        match check() {
            Ok(()) => {}
            Err(CheckError::Assertion(message)) => messages.push(message),
            Err(CheckError::Fatal(source)) => return Err(RunError::Fatal(source)),
        }
    }
    if messages.is_empty() {
        Ok(())
    } else {
        Err(RunError::Aggregated(AggregationError { messages }))
    }
}

// ============================================================================
// SECTION: Check Constructors
// ============================================================================

/// Builds a check asserting that two values compare equal.
///
/// The comparison is deferred until the aggregator runs the check.
pub fn check_eq<'a, T, U>(label: &str, actual: &'a T, expected: &'a U) -> Check<'a>
where
    T: PartialEq<U> + Display + ?Sized,
    U: Display + ?Sized,
{
    let label = label.to_string();
    Box::new(move || {
        if actual == expected {
            Ok(())
        } else {
            Err(CheckError::assertion(format!(
                "{label}: expected `{expected}`, got `{actual}`"
            )))
        }
    })
}

/// Builds a check asserting that an already-evaluated condition holds.
pub fn check_true<'a>(label: &str, condition: bool) -> Check<'a> {
    let label = label.to_string();
    Box::new(move || {
        if condition {
            Ok(())
        } else {
            Err(CheckError::assertion(format!("{label}: expected condition to hold")))
        }
    })
}

/// Builds a check from a deferred predicate.
pub fn check_with<'a, F>(label: &str, predicate: F) -> Check<'a>
where
    F: FnOnce() -> bool + 'a,
{
    let label = label.to_string();
    Box::new(move || {
        if predicate() {
            Ok(())
        } else {
            Err(CheckError::assertion(format!("{label}: expected condition to hold")))
        }
    })
}

// ============================================================================
// SECTION: Tests
// ============================================================================
