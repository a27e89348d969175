//! Provider dispatch: transactional SMS through Pinpoint, synthesized
//! voice calls through Pinpoint SMS & Voice.

use aws_sdk_pinpoint::types::{
    AddressConfiguration, ChannelType, DirectMessageConfiguration, MessageRequest, MessageType,
    SmsMessage,
};
use aws_sdk_pinpointsmsvoice::types::{SsmlMessageType, VoiceMessageContent};

use crate::core::config::AppConfig;
use crate::core::models::{DeliveryChannel, DeliveryRequest, RenderedMessage};
use crate::errors::DeliveryError;

/// Routes one delivery request to exactly one provider call.
pub struct Dispatcher {
    sms: aws_sdk_pinpoint::Client,
    voice: aws_sdk_pinpointsmsvoice::Client,
    config: AppConfig,
}

impl Dispatcher {
    #[must_use]
    pub fn new(
        sms: aws_sdk_pinpoint::Client,
        voice: aws_sdk_pinpointsmsvoice::Client,
        config: AppConfig,
    ) -> Self {
        Self { sms, voice, config }
    }

    /// Dispatch the rendered message over the requested channel.
    ///
    /// Single-shot: there is no internal retry, and a provider-reported
    /// error propagates as `ProviderError`. On success the returned string
    /// is the provider's identifier for the transaction (the SMS delivery
    /// status message, or the voice call's message id).
    pub async fn dispatch(
        &self,
        request: &DeliveryRequest,
        message: &RenderedMessage,
    ) -> Result<String, DeliveryError> {
        match request.channel {
            DeliveryChannel::Sms => self.send_sms(&request.phone_number, &message.body).await,
            DeliveryChannel::Voice => self.make_call(&request.phone_number, message).await,
        }
    }

    async fn send_sms(&self, destination: &str, body: &str) -> Result<String, DeliveryError> {
        let address = AddressConfiguration::builder()
            .channel_type(ChannelType::Sms)
            .build();
        let sms_message = SmsMessage::builder()
            .body(body)
            .message_type(MessageType::Transactional)
            .origination_number(&self.config.origination_number)
            .sender_id(&self.config.sender_id)
            .build();
        let message_request = MessageRequest::builder()
            .addresses(destination, address)
            .message_configuration(
                DirectMessageConfiguration::builder()
                    .sms_message(sms_message)
                    .build(),
            )
            .build();

        let output = self
            .sms
            .send_messages()
            .application_id(&self.config.pinpoint_app_id)
            .message_request(message_request)
            .send()
            .await?;

        output
            .message_response()
            .and_then(|response| response.result())
            .and_then(|result| result.get(destination))
            .and_then(|entry| entry.status_message())
            .map(ToString::to_string)
            .ok_or_else(|| {
                DeliveryError::ProviderError(format!(
                    "no delivery status returned for {destination}"
                ))
            })
    }

    async fn make_call(
        &self,
        destination: &str,
        message: &RenderedMessage,
    ) -> Result<String, DeliveryError> {
        let content = VoiceMessageContent::builder()
            .ssml_message(
                SsmlMessageType::builder()
                    .language_code(&message.voice_language)
                    .text(&message.body)
                    .voice_id(&message.voice_id)
                    .build(),
            )
            .build();

        let output = self
            .voice
            .send_voice_message()
            .caller_id(&self.config.caller_id)
            .content(content)
            .destination_phone_number(destination)
            .origination_phone_number(&self.config.origination_number)
            .send()
            .await?;

        output
            .message_id()
            .map(ToString::to_string)
            .ok_or_else(|| {
                DeliveryError::ProviderError("no message id returned for voice call".to_string())
            })
    }
}
