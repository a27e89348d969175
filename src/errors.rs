use aws_sdk_dynamodb::error::{DisplayErrorContext, SdkError};
use thiserror::Error;

/// Failures on the delivery path. Every variant is caught by the handler
/// and mapped to the hook's 400 envelope; the display text becomes the
/// `errorSummary` shown to the identity provider.
#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("Failed to parse delivery request: {0}")]
    ParseError(String),

    #[error("Invalid delivery request: {0}")]
    MalformedRequest(String),

    #[error("Message not found for language: {0}")]
    TemplateNotFound(String),

    #[error("Failed to send message through Pinpoint: {0}")]
    ProviderError(String),
}

// Generic implementation for AWS SDK errors
impl<E, R> From<SdkError<E, R>> for DeliveryError
where
    E: std::error::Error + 'static,
    R: std::fmt::Debug,
{
    fn from(error: SdkError<E, R>) -> Self {
        DeliveryError::ProviderError(format!("{}", DisplayErrorContext(&error)))
    }
}

/// Failures on the authorization path. The Lambda adapter collapses all of
/// these into one opaque denial; the variants exist so logs and tests keep
/// the distinction.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Missing authorization token")]
    MissingToken,

    #[error("Authorization token is not a bearer credential")]
    MalformedHeader,

    #[error("Failed to fetch signing keys: {0}")]
    JwksFetch(String),

    #[error("Token failed validation: {0}")]
    InvalidToken(String),
}

impl From<reqwest::Error> for AuthError {
    fn from(error: reqwest::Error) -> Self {
        AuthError::JwksFetch(error.to_string())
    }
}

impl From<jsonwebtoken::errors::Error> for AuthError {
    fn from(error: jsonwebtoken::errors::Error) -> Self {
        AuthError::InvalidToken(error.to_string())
    }
}
