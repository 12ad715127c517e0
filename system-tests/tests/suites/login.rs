// system-tests/tests/suites/login.rs
// ============================================================================
// Module: Login Scenarios
// Description: Contract scenarios for the Bunker login endpoint.
// Purpose: Exercise success and failure responses field by field.
// Dependencies: helpers, bunker-harness
// ============================================================================

//! ## Overview
//! Each scenario follows the same flow: arrange a body and token, issue one
//! request through the shared template, enforce the expected status as a
//! hard precondition, then run every field check through the aggregator so
//! a single run reports all violations at once.

use std::error::Error;

use bunker_harness::Scenario;
use bunker_harness::assert::check_eq;
use bunker_harness::assert::check_true;
use bunker_harness::assert::check_with;
use bunker_harness::auth::bearer_header;
use bunker_harness::models::ApiError;
use bunker_harness::models::AuthRequest;
use bunker_harness::models::SecurityToken;
use bunker_harness::scenario::verify;
use bunker_harness::validation::is_well_formed_token;

use crate::helpers::fixtures::login_template;
use crate::helpers::fixtures::transport;
use crate::helpers::stub_server::KNOWN_LOGIN;
use crate::helpers::stub_server::KNOWN_PASSWORD;
use crate::helpers::stub_server::spawn_login_stub;

#[tokio::test(flavor = "multi_thread")]
async fn post_login_without_login_returns_bad_request() -> Result<(), Box<dyn Error>> {
    let stub = spawn_login_stub().await?;
    let template = login_template(stub.base_url())?;
    let transport = transport()?;
    let scenario = Scenario::new(&template, &transport);
    let header = bearer_header("token");
    let body = AuthRequest { login: None, password: Some("password".to_string()) };

    let response: ApiError = scenario.execute(Some(&header), Some(&body), 400).await?;

    verify(vec![
        check_eq("error", &response.error, "Bad Request"),
        check_eq("message", &response.message, "login is required"),
        check_eq("status", &response.status, &400_u16),
        check_true("timestamp present", !response.timestamp.is_empty()),
    ])?;
    stub.shutdown().await;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn post_login_without_password_returns_bad_request() -> Result<(), Box<dyn Error>> {
    let stub = spawn_login_stub().await?;
    let template = login_template(stub.base_url())?;
    let transport = transport()?;
    let scenario = Scenario::new(&template, &transport);
    let header = bearer_header("token");
    let body = AuthRequest { login: Some("login".to_string()), password: None };

    let response: ApiError = scenario.execute(Some(&header), Some(&body), 400).await?;

    verify(vec![
        check_eq("error", &response.error, "Bad Request"),
        check_eq("message", &response.message, "password is required"),
        check_eq("status", &response.status, &400_u16),
        check_true("timestamp present", !response.timestamp.is_empty()),
    ])?;
    stub.shutdown().await;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn post_login_without_body_returns_bad_request() -> Result<(), Box<dyn Error>> {
    let stub = spawn_login_stub().await?;
    let template = login_template(stub.base_url())?;
    let transport = transport()?;
    let scenario = Scenario::new(&template, &transport);
    let header = bearer_header("token");

    let response: ApiError = scenario.execute(Some(&header), None, 400).await?;

    verify(vec![
        check_eq("error", &response.error, "Bad Request"),
        check_eq("message", &response.message, "request body is required"),
        check_eq("status", &response.status, &400_u16),
        check_true("timestamp present", !response.timestamp.is_empty()),
    ])?;
    stub.shutdown().await;
    Ok(())
}

// The API documentation lists the authorization header, but a later note in
// the same documentation suggests the endpoint ignores it. Until the owning
// team resolves the contradiction this scenario stays ignored rather than
// asserting either answer.
#[tokio::test(flavor = "multi_thread")]
#[ignore = "API docs and observed behavior disagree on whether the auth header is required"]
async fn post_login_without_auth_header_unauthorized() -> Result<(), Box<dyn Error>> {
    let stub = spawn_login_stub().await?;
    let template = login_template(stub.base_url())?;
    let transport = transport()?;
    let scenario = Scenario::new(&template, &transport);
    let body = AuthRequest::credentials(KNOWN_LOGIN, KNOWN_PASSWORD);

    let response: ApiError = scenario.execute(None, Some(&body), 401).await?;

    verify(vec![
        check_eq("error", &response.error, "Unauthorized"),
        check_eq("status", &response.status, &401_u16),
        check_true("timestamp present", !response.timestamp.is_empty()),
    ])?;
    stub.shutdown().await;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn post_login_with_malformed_auth_token_unauthorized() -> Result<(), Box<dyn Error>> {
    let stub = spawn_login_stub().await?;
    let template = login_template(stub.base_url())?;
    let transport = transport()?;
    let scenario = Scenario::new(&template, &transport);
    let header = bearer_header("invalid value token");
    let body = AuthRequest::credentials(KNOWN_LOGIN, KNOWN_PASSWORD);

    let response: ApiError = scenario.execute(Some(&header), Some(&body), 401).await?;

    verify(vec![
        check_eq("error", &response.error, "Unauthorized"),
        check_eq("message", &response.message, "missing or malformed authorization header"),
        check_eq("status", &response.status, &401_u16),
        check_true("timestamp present", !response.timestamp.is_empty()),
    ])?;
    stub.shutdown().await;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn post_login_with_unknown_user_unauthorized() -> Result<(), Box<dyn Error>> {
    let stub = spawn_login_stub().await?;
    let template = login_template(stub.base_url())?;
    let transport = transport()?;
    let scenario = Scenario::new(&template, &transport);
    let header = bearer_header("token");
    let body = AuthRequest::credentials("ghost-operator", KNOWN_PASSWORD);

    let response: ApiError = scenario.execute(Some(&header), Some(&body), 401).await?;

    verify(vec![
        check_eq("error", &response.error, "Unauthorized"),
        check_eq("message", &response.message, "unknown login"),
        check_eq("status", &response.status, &401_u16),
        check_true("timestamp present", !response.timestamp.is_empty()),
    ])?;
    stub.shutdown().await;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn post_login_with_wrong_password_unauthorized() -> Result<(), Box<dyn Error>> {
    let stub = spawn_login_stub().await?;
    let template = login_template(stub.base_url())?;
    let transport = transport()?;
    let scenario = Scenario::new(&template, &transport);
    let header = bearer_header("token");
    let body = AuthRequest::credentials(KNOWN_LOGIN, "not-the-password");

    let response: ApiError = scenario.execute(Some(&header), Some(&body), 401).await?;

    verify(vec![
        check_eq("error", &response.error, "Unauthorized"),
        check_eq("message", &response.message, "invalid credentials"),
        check_eq("status", &response.status, &401_u16),
        check_true("timestamp present", !response.timestamp.is_empty()),
    ])?;
    stub.shutdown().await;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn post_login_with_valid_credentials_returns_token() -> Result<(), Box<dyn Error>> {
    let stub = spawn_login_stub().await?;
    let template = login_template(stub.base_url())?;
    let transport = transport()?;
    let scenario = Scenario::new(&template, &transport);
    let header = bearer_header("token");
    let body = AuthRequest::credentials(KNOWN_LOGIN, KNOWN_PASSWORD);

    let response: SecurityToken = scenario.execute(Some(&header), Some(&body), 200).await?;

    verify(vec![
        check_eq("login", &response.login, KNOWN_LOGIN),
        check_with("token format", || is_well_formed_token(&response.token)),
        check_with("refresh token format", || is_well_formed_token(&response.refresh_token)),
        check_true("expiredAt present", !response.expired_at.is_empty()),
        check_with("expiredAt is a timestamp", || response.expired_at.contains('T')),
    ])?;
    stub.shutdown().await;
    Ok(())
}
