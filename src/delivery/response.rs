//! Response builders for the telephony hook's API contract.
//!
//! This module provides standardized ways to create the command envelope
//! the identity provider expects back from the delivery endpoint.

use serde_json::{Value, json};
use tracing::{error, info};

use crate::core::models::DeliveryChannel;
use crate::errors::DeliveryError;

const ACTION_TYPE: &str = "com.okta.telephony.action";
const ACTION_STATUS: &str = "SUCCESSFUL";
const PROVIDER_NAME: &str = "AWSPinpoint";

/// Returns a 200 response carrying the hook's success command envelope.
///
/// `transaction_id` is the provider's identifier for the dispatch: the
/// per-destination delivery status for SMS, the call's message id for
/// voice.
#[must_use]
pub fn success_response(channel: DeliveryChannel, transaction_id: &str) -> Value {
    info!("Successfully sent {} : {}", channel, transaction_id);
    json!({
        "statusCode": 200,
        "body": json!({
            "commands": [{
                "type": ACTION_TYPE,
                "value": [{
                    "status": ACTION_STATUS,
                    "provider": PROVIDER_NAME,
                    "transactionId": transaction_id,
                }],
            }],
        }).to_string(),
    })
}

/// Returns a 400 response whose `errorSummary` is the error's display text.
#[must_use]
pub fn error_response(error: &DeliveryError) -> Value {
    error!("Delivery failed: {}", error);
    json!({
        "statusCode": 400,
        "body": json!({
            "error": { "errorSummary": error.to_string() },
        }).to_string(),
    })
}
