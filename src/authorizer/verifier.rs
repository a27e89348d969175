use async_trait::async_trait;
use jsonwebtoken::jwk::JwkSet;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode, decode_header};
use serde::Deserialize;
use tracing::info;

use crate::core::config::AuthConfig;
use crate::errors::AuthError;

/// Claims this system consumes: the subject becomes the policy's
/// principal identifier.
#[derive(Debug, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
}

/// Seam between the decision core and the token issuer.
#[async_trait]
pub trait TokenVerifier {
    async fn verify(&self, token: &str) -> Result<TokenClaims, AuthError>;
}

/// Verifies Okta access tokens against the issuer's published JWKS.
///
/// The key set is fetched per verification; the handler carries no state
/// across invocations.
pub struct OktaVerifier {
    http: reqwest::Client,
    issuer_url: String,
    audience: String,
}

impl OktaVerifier {
    #[must_use]
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            issuer_url: config.issuer_url.trim_end_matches('/').to_string(),
            audience: config.audience.clone(),
        }
    }

    async fn fetch_jwks(&self) -> Result<JwkSet, AuthError> {
        let url = format!("{}/v1/keys", self.issuer_url);
        let jwks = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<JwkSet>()
            .await?;
        Ok(jwks)
    }
}

#[async_trait]
impl TokenVerifier for OktaVerifier {
    async fn verify(&self, token: &str) -> Result<TokenClaims, AuthError> {
        let header = decode_header(token)?;
        let kid = header
            .kid
            .ok_or_else(|| AuthError::InvalidToken("token header has no key id".to_string()))?;

        let jwks = self.fetch_jwks().await?;
        let jwk = jwks
            .find(&kid)
            .ok_or_else(|| AuthError::InvalidToken(format!("no signing key with id {kid}")))?;
        let key = DecodingKey::from_jwk(jwk)?;

        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_audience(&[self.audience.as_str()]);
        validation.set_issuer(&[self.issuer_url.as_str()]);

        let data = decode::<TokenClaims>(token, &key, &validation)?;
        info!("Token is valid");
        Ok(data.claims)
    }
}
