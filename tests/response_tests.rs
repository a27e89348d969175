use otp_relay::core::models::DeliveryChannel;
use otp_relay::delivery::response::{error_response, success_response};
use otp_relay::errors::DeliveryError;
use serde_json::{Value, json};

/// Tests for the telephony hook's response envelopes. These verify the
/// exact command shape the identity provider expects back from the
/// delivery endpoint.

#[test]
fn test_success_envelope_round_trip() {
    let response = success_response(DeliveryChannel::Sms, "ABC123");

    assert_eq!(response["statusCode"], 200);

    let body: Value = serde_json::from_str(response["body"].as_str().unwrap()).unwrap();
    assert_eq!(
        body,
        json!({
            "commands": [{
                "type": "com.okta.telephony.action",
                "value": [{
                    "status": "SUCCESSFUL",
                    "provider": "AWSPinpoint",
                    "transactionId": "ABC123",
                }],
            }],
        }),
        "Success body should parse back to the exact command envelope"
    );
}

#[test]
fn test_success_envelope_for_voice() {
    let response = success_response(DeliveryChannel::Voice, "vm-42");
    let body: Value = serde_json::from_str(response["body"].as_str().unwrap()).unwrap();

    assert_eq!(
        body["commands"][0]["value"][0]["transactionId"], "vm-42",
        "The voice message id should be carried as the transaction id"
    );
}

#[test]
fn test_error_envelope_carries_error_summary() {
    let error = DeliveryError::TemplateNotFound("fr-FR".to_string());
    let response = error_response(&error);

    assert_eq!(response["statusCode"], 400);

    let body: Value = serde_json::from_str(response["body"].as_str().unwrap()).unwrap();
    assert_eq!(
        body["error"]["errorSummary"], "Message not found for language: fr-FR",
        "The error summary should be the error's display text"
    );
}

#[test]
fn test_error_envelope_for_provider_failure() {
    let error = DeliveryError::ProviderError("throttled".to_string());
    let response = error_response(&error);

    assert_eq!(response["statusCode"], 400);

    let body: Value = serde_json::from_str(response["body"].as_str().unwrap()).unwrap();
    assert_eq!(
        body["error"]["errorSummary"],
        "Failed to send message through Pinpoint: throttled"
    );
}
