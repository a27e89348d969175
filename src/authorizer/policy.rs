//! Authorization decision core.
//!
//! Synchronous, host-agnostic logic: extract the bearer token, verify it,
//! and build the IAM policy. The Lambda adapter in `handler` owns the
//! host-facing collapse of failures into an opaque denial.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::verifier::TokenVerifier;
use crate::errors::AuthError;

/// API Gateway TOKEN authorizer input.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenAuthorizerEvent {
    #[serde(default)]
    pub authorization_token: Option<String>,
    pub method_arn: String,
}

/// Authorizer output: the principal plus an IAM policy document.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizerResponse {
    pub principal_id: String,
    pub policy_document: PolicyDocument,
}

#[derive(Debug, Serialize)]
pub struct PolicyDocument {
    #[serde(rename = "Version")]
    pub version: String,
    #[serde(rename = "Statement")]
    pub statement: Vec<PolicyStatement>,
}

#[derive(Debug, Serialize)]
pub struct PolicyStatement {
    #[serde(rename = "Action")]
    pub action: String,
    #[serde(rename = "Effect")]
    pub effect: String,
    #[serde(rename = "Resource")]
    pub resource: String,
}

/// Pull the token out of a `Bearer <token>` authorization value.
///
/// # Errors
///
/// `MalformedHeader` when the value does not match the bearer pattern.
pub fn extract_bearer_token(header: &str) -> Result<&str, AuthError> {
    static BEARER_RE: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^Bearer (.+)$").expect("static regex compile"));

    BEARER_RE
        .captures(header)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .ok_or(AuthError::MalformedHeader)
}

/// Decide the authorization outcome for one invocation.
///
/// The policy is derived from the event's own method ARN on every call; a
/// decision is never cached or reused for a different resource.
///
/// # Errors
///
/// A missing or malformed header and every verification failure return an
/// `AuthError`; the Lambda adapter collapses them into one opaque denial.
pub async fn authorize<V: TokenVerifier>(
    event: &TokenAuthorizerEvent,
    verifier: &V,
) -> Result<AuthorizerResponse, AuthError> {
    let header = event
        .authorization_token
        .as_deref()
        .ok_or(AuthError::MissingToken)?;
    let token = extract_bearer_token(header)?;
    let claims = verifier.verify(token).await?;
    Ok(allow_policy(&claims.sub, &event.method_arn))
}

/// Build an Allow policy granting `execute-api:Invoke` on exactly the
/// given resource ARN.
#[must_use]
pub fn allow_policy(principal_id: &str, resource: &str) -> AuthorizerResponse {
    AuthorizerResponse {
        principal_id: principal_id.to_string(),
        policy_document: PolicyDocument {
            version: "2012-10-17".to_string(),
            statement: vec![PolicyStatement {
                action: "execute-api:Invoke".to_string(),
                effect: "Allow".to_string(),
                resource: resource.to_string(),
            }],
        },
    }
}
