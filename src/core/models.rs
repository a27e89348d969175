use std::collections::HashMap;
use std::fmt;

use aws_sdk_dynamodb::types::AttributeValue;
use serde::Deserialize;

use crate::errors::DeliveryError;

/// Medium used to deliver the passcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryChannel {
    Sms,
    Voice,
}

impl DeliveryChannel {
    /// Parse the hook's channel string. Matching is case-insensitive;
    /// anything other than `sms` or `voice` is rejected up front rather
    /// than silently treated as a voice call.
    pub fn parse(raw: &str) -> Result<Self, DeliveryError> {
        match raw.to_ascii_lowercase().as_str() {
            "sms" => Ok(DeliveryChannel::Sms),
            "voice" => Ok(DeliveryChannel::Voice),
            _ => Err(DeliveryError::MalformedRequest(format!(
                "unsupported delivery channel '{raw}'"
            ))),
        }
    }

    /// Lower-case form, also the `messagetype` value in the template store.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            DeliveryChannel::Sms => "sms",
            DeliveryChannel::Voice => "voice",
        }
    }
}

impl fmt::Display for DeliveryChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Deserialize)]
struct HookBody {
    data: HookData,
}

#[derive(Debug, Deserialize)]
struct HookData {
    #[serde(rename = "messageProfile")]
    message_profile: MessageProfile,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MessageProfile {
    phone_number: String,
    locale: Option<String>,
    otp_code: String,
    delivery_channel: String,
}

/// One validated delivery request. Immutable for the invocation's lifetime.
#[derive(Debug, Clone)]
pub struct DeliveryRequest {
    pub phone_number: String,
    pub locale: String,
    pub otp_code: String,
    pub channel: DeliveryChannel,
}

impl DeliveryRequest {
    /// Parse the hook body `{ data: { messageProfile: { ... } } }`.
    ///
    /// # Errors
    ///
    /// `ParseError` for malformed JSON or missing required fields,
    /// `MalformedRequest` for an unrecognized delivery channel.
    pub fn parse(body: &str) -> Result<Self, DeliveryError> {
        let hook: HookBody =
            serde_json::from_str(body).map_err(|e| DeliveryError::ParseError(e.to_string()))?;
        let profile = hook.data.message_profile;
        Ok(Self {
            channel: DeliveryChannel::parse(&profile.delivery_channel)?,
            phone_number: profile.phone_number,
            locale: profile.locale.unwrap_or_else(|| "en-US".to_string()),
            otp_code: profile.otp_code,
        })
    }
}

/// One row of the external template store.
#[derive(Debug, Clone)]
pub struct MessageTemplate {
    pub language: String,
    pub message_type: String,
    pub message: String,
    pub voice_language: String,
    pub voice_id: String,
}

impl MessageTemplate {
    /// Decode a template row. Returns `None` when any expected attribute
    /// is missing or has the wrong type.
    #[must_use]
    pub fn from_item(item: &HashMap<String, AttributeValue>) -> Option<Self> {
        let get = |name: &str| -> Option<String> { item.get(name)?.as_s().ok().cloned() };
        Some(Self {
            language: get("language")?,
            message_type: get("messagetype")?,
            message: get("message")?,
            voice_language: get("pinpointlanguage")?,
            voice_id: get("voiceid")?,
        })
    }
}

/// Template body with the passcode spliced in, plus the voice-synthesis
/// metadata the voice path needs.
#[derive(Debug, Clone)]
pub struct RenderedMessage {
    pub body: String,
    pub voice_language: String,
    pub voice_id: String,
}
