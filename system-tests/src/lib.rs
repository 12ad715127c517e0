// system-tests/src/lib.rs
// ============================================================================
// Module: Bunker System Tests Library
// Description: Shared configuration and helpers for login contract scenarios.
// Purpose: Provide common utilities for the system-test binaries.
// Dependencies: std
// ============================================================================

//! ## Overview
//! This crate hosts shared configuration used by the Bunker system-test
//! binaries in `system-tests/tests`. The scenarios themselves live in the
//! test binaries; only environment-derived settings live here.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
