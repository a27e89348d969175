/// OTP Relay - bridges Okta's telephony inline hook to AWS Pinpoint.
///
/// This crate implements a two-Lambda architecture for one-time-passcode
/// delivery:
/// 1. A Delivery Lambda that receives the Okta telephony hook, looks up a
///    localized message template in DynamoDB, and sends the passcode by
///    SMS (Pinpoint) or voice call (Pinpoint SMS & Voice)
/// 2. An Authorizer Lambda that guards the delivery endpoint by validating
///    Okta-issued bearer tokens and returning an API Gateway IAM policy
///
/// # Architecture
///
/// The system uses:
/// - AWS Lambda for serverless execution
/// - DynamoDB as the read-only template store, keyed by (language, messagetype)
/// - Pinpoint for transactional SMS and Pinpoint SMS & Voice for calls
/// - jsonwebtoken for RS256 validation against the Okta issuer's JWKS
/// - Tokio for async runtime
///
/// # Example
///
/// ```
/// use otp_relay::core::models::DeliveryChannel;
/// use otp_relay::delivery::otp::format_otp;
/// use otp_relay::delivery::response::success_response;
///
/// // A voice passcode is spelled out digit by digit so the synthesizer
/// // does not read it as one number.
/// let spoken = format_otp("493021", DeliveryChannel::Voice);
/// assert_eq!(spoken, "4, 9, 3, 0, 2, 1");
///
/// // A successful dispatch maps to the telephony hook's command envelope.
/// let response = success_response(DeliveryChannel::Sms, "ABC123");
/// assert_eq!(response["statusCode"], 200);
/// ```
// Module declarations
pub mod authorizer;
pub mod core;
pub mod delivery;
pub mod errors;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. It should be called at the start of each Lambda
/// handler.
///
/// # Example
///
/// ```
/// // Initialize structured logging at the start of your Lambda handler
/// otp_relay::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
