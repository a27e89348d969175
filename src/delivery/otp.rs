//! Passcode formatting and template substitution.
//!
//! Stored templates embed a literal placeholder where the passcode goes:
//!
//! ```text
//! sms:   Your One-Time Passcode from the AWS Pinpoint project is @otp.
//! voice: <speak>Your One-Time Passcode from the AWS Pinpoint project is
//!        <emphasis> @otp </emphasis></speak>
//! ```

use crate::core::models::{DeliveryChannel, MessageTemplate, RenderedMessage};

/// Literal token the stored templates embed where the passcode goes.
pub const OTP_PLACEHOLDER: &str = "@otp";

/// Produce the channel-appropriate form of a passcode.
///
/// Voice separates every character so the speech synthesizer enunciates
/// digits individually instead of reading the code as one number; SMS
/// passes the code through unchanged.
///
/// ```
/// use otp_relay::core::models::DeliveryChannel;
/// use otp_relay::delivery::otp::format_otp;
///
/// assert_eq!(format_otp("123456", DeliveryChannel::Voice), "1, 2, 3, 4, 5, 6");
/// assert_eq!(format_otp("123456", DeliveryChannel::Sms), "123456");
/// ```
#[must_use]
pub fn format_otp(otp_code: &str, channel: DeliveryChannel) -> String {
    match channel {
        DeliveryChannel::Voice => otp_code
            .chars()
            .map(String::from)
            .collect::<Vec<_>>()
            .join(", "),
        DeliveryChannel::Sms => otp_code.to_string(),
    }
}

/// Splice the formatted passcode into the template body.
///
/// Only the first placeholder occurrence is substituted.
#[must_use]
pub fn render(
    template: &MessageTemplate,
    otp_code: &str,
    channel: DeliveryChannel,
) -> RenderedMessage {
    let body = template
        .message
        .replacen(OTP_PLACEHOLDER, &format_otp(otp_code, channel), 1);
    RenderedMessage {
        body,
        voice_language: template.voice_language.clone(),
        voice_id: template.voice_id.clone(),
    }
}
