use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use otp_relay::core::models::{DeliveryChannel, DeliveryRequest, MessageTemplate};
use otp_relay::errors::DeliveryError;

/// Tests for request parsing and channel validation. The delivery channel
/// is a validated enum: case-variants of `sms` and `voice` are accepted,
/// everything else is rejected up front instead of silently falling back
/// to a voice call.

fn hook_body(channel: &str) -> String {
    format!(
        r#"{{"data":{{"messageProfile":{{"phoneNumber":"+15550100","locale":"de-DE","otpCode":"729406","deliveryChannel":"{channel}"}}}}}}"#
    )
}

#[test]
fn test_channel_parsing_is_case_insensitive() {
    for raw in ["SMS", "sms", "Sms"] {
        assert_eq!(
            DeliveryChannel::parse(raw).unwrap(),
            DeliveryChannel::Sms,
            "'{raw}' should route to the SMS path"
        );
    }
    for raw in ["VOICE", "voice", "Voice"] {
        assert_eq!(
            DeliveryChannel::parse(raw).unwrap(),
            DeliveryChannel::Voice,
            "'{raw}' should route to the voice path"
        );
    }
}

#[test]
fn test_unknown_channel_is_rejected() {
    // Unrecognized values (including typos) fail validation rather than
    // being treated as voice.
    for raw in ["email", "smss", "call", ""] {
        match DeliveryChannel::parse(raw) {
            Err(DeliveryError::MalformedRequest(msg)) => {
                assert!(
                    msg.contains("unsupported delivery channel"),
                    "Rejection should name the problem, got: {msg}"
                );
            }
            other => panic!("'{raw}' should be rejected as malformed, got {other:?}"),
        }
    }
}

#[test]
fn test_request_parsing_reads_message_profile() {
    let request = DeliveryRequest::parse(&hook_body("SMS")).unwrap();

    assert_eq!(request.phone_number, "+15550100");
    assert_eq!(request.locale, "de-DE");
    assert_eq!(request.otp_code, "729406");
    assert_eq!(request.channel, DeliveryChannel::Sms);
}

#[test]
fn test_request_parsing_defaults_locale() {
    let body = r#"{"data":{"messageProfile":{"phoneNumber":"+15550100","otpCode":"729406","deliveryChannel":"voice"}}}"#;
    let request = DeliveryRequest::parse(body).unwrap();

    assert_eq!(
        request.locale, "en-US",
        "Requests without a locale should default to en-US"
    );
}

#[test]
fn test_request_parsing_rejects_missing_fields() {
    let body = r#"{"data":{"messageProfile":{"phoneNumber":"+15550100","deliveryChannel":"sms"}}}"#;
    assert!(
        matches!(
            DeliveryRequest::parse(body),
            Err(DeliveryError::ParseError(_))
        ),
        "A body without otpCode should fail to parse"
    );
}

#[test]
fn test_request_parsing_rejects_invalid_json() {
    assert!(matches!(
        DeliveryRequest::parse("not json"),
        Err(DeliveryError::ParseError(_))
    ));
}

fn template_item() -> HashMap<String, AttributeValue> {
    HashMap::from([
        ("language".to_string(), AttributeValue::S("en-US".to_string())),
        ("messagetype".to_string(), AttributeValue::S("sms".to_string())),
        (
            "message".to_string(),
            AttributeValue::S("Your code is @otp.".to_string()),
        ),
        (
            "pinpointlanguage".to_string(),
            AttributeValue::S("en-US".to_string()),
        ),
        ("voiceid".to_string(), AttributeValue::S("Joanna".to_string())),
    ])
}

#[test]
fn test_template_decoding_from_item() {
    let template = MessageTemplate::from_item(&template_item()).unwrap();

    assert_eq!(template.language, "en-US");
    assert_eq!(template.message_type, "sms");
    assert_eq!(template.message, "Your code is @otp.");
    assert_eq!(template.voice_language, "en-US");
    assert_eq!(template.voice_id, "Joanna");
}

#[test]
fn test_template_decoding_rejects_missing_attribute() {
    let mut item = template_item();
    item.remove("voiceid");

    assert!(
        MessageTemplate::from_item(&item).is_none(),
        "A row without voiceid should not decode"
    );
}

#[test]
fn test_template_decoding_rejects_wrong_attribute_type() {
    let mut item = template_item();
    item.insert("message".to_string(), AttributeValue::N("42".to_string()));

    assert!(
        MessageTemplate::from_item(&item).is_none(),
        "A non-string message attribute should not decode"
    );
}
