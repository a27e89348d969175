//! Authorizer Lambda adapter.
//!
//! Builds the Okta verifier from the environment, runs the decision core,
//! and collapses every failure into the opaque `Unauthorized` error API
//! Gateway expects from a TOKEN authorizer denial. The cause distinction
//! survives only in the logs.

use lambda_runtime::{Error, LambdaEvent};
use tracing::{error, warn};

use super::policy::{self, AuthorizerResponse, TokenAuthorizerEvent};
use super::verifier::OktaVerifier;
use crate::core::config::AuthConfig;

pub use self::function_handler as handler;

/// Opaque denial signal; API Gateway renders it as an access-denied
/// response with no body detail.
const UNAUTHORIZED: &str = "Unauthorized";

/// Lambda handler for the Authorizer entrypoint.
///
/// # Errors
///
/// Returns the opaque `Unauthorized` error for every denial, and a
/// configuration error when the issuer URL is absent.
pub async fn function_handler(
    event: LambdaEvent<TokenAuthorizerEvent>,
) -> Result<AuthorizerResponse, Error> {
    let config = AuthConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        Error::from(e)
    })?;

    let verifier = OktaVerifier::new(&config);
    match policy::authorize(&event.payload, &verifier).await {
        Ok(response) => Ok(response),
        Err(e) => {
            warn!("Authorization denied: {}", e);
            Err(Error::from(UNAUTHORIZED))
        }
    }
}
