//! Delivery Lambda handler - the telephony hook's request pipeline.
//!
//! parse body -> template lookup -> passcode render -> provider dispatch
//! -> hook envelope. Every anticipated failure maps to the 400 envelope;
//! nothing on this path surfaces as an invocation fault.

use lambda_runtime::{Error, LambdaEvent};
use serde::Serialize;
use serde_json::Value;
use tracing::{error, info};

use super::pinpoint::Dispatcher;
use super::templates::TemplateStore;
use super::{otp, response};
use crate::core::config::AppConfig;
use crate::core::models::DeliveryRequest;
use crate::errors::DeliveryError;

pub use self::function_handler as handler;

/// Lambda handler for the Delivery entrypoint.
///
/// # Errors
///
/// Returns an invocation error only for missing configuration; request
/// failures are mapped to the hook's 400 envelope.
#[tracing::instrument(level = "info", skip(event))]
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<impl Serialize, Error> {
    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        Error::from(e)
    })?;
    info!("Delivery Lambda received telephony hook request");

    let request = match extract_body(&event.payload).and_then(DeliveryRequest::parse) {
        Ok(request) => request,
        Err(e) => return Ok(response::error_response(&e)),
    };

    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let store = TemplateStore::new(
        aws_sdk_dynamodb::Client::new(&aws_config),
        config.template_table_name.clone(),
    );

    let Some(template) = store.find(&request.locale, request.channel).await else {
        return Ok(response::error_response(&DeliveryError::TemplateNotFound(
            request.locale.clone(),
        )));
    };

    let message = otp::render(&template, &request.otp_code, request.channel);
    let dispatcher = Dispatcher::new(
        aws_sdk_pinpoint::Client::new(&aws_config),
        aws_sdk_pinpointsmsvoice::Client::new(&aws_config),
        config,
    );

    match dispatcher.dispatch(&request, &message).await {
        Ok(transaction_id) => Ok(response::success_response(request.channel, &transaction_id)),
        Err(e) => Ok(response::error_response(&e)),
    }
}

fn extract_body(payload: &Value) -> Result<&str, DeliveryError> {
    payload
        .get("body")
        .and_then(Value::as_str)
        .ok_or_else(|| DeliveryError::ParseError("request body is missing or not a string".to_string()))
}
