use std::env;

/// Delivery Lambda configuration. Read once per invocation and passed by
/// reference; never mutated during a request.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub origination_number: String,
    pub pinpoint_app_id: String,
    pub sender_id: String,
    pub caller_id: String,
    pub template_table_name: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            origination_number: env::var("FROM_PHONE_NUMBER")
                .map_err(|e| format!("FROM_PHONE_NUMBER: {}", e))?,
            pinpoint_app_id: env::var("PINPOINT_APP_ID")
                .map_err(|e| format!("PINPOINT_APP_ID: {}", e))?,
            sender_id: env::var("SENDER_ID").map_err(|e| format!("SENDER_ID: {}", e))?,
            caller_id: env::var("CALLER_ID").map_err(|e| format!("CALLER_ID: {}", e))?,
            template_table_name: env::var("DYNAMODB_TABLE_NAME")
                .map_err(|e| format!("DYNAMODB_TABLE_NAME: {}", e))?,
        })
    }
}

/// Authorizer Lambda configuration. The audience defaults to Okta's
/// default authorization server identifier when not overridden.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub issuer_url: String,
    pub audience: String,
}

impl AuthConfig {
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            issuer_url: env::var("OKTA_ISSUER_URL")
                .map_err(|e| format!("OKTA_ISSUER_URL: {}", e))?,
            audience: env::var("OKTA_AUDIENCE").unwrap_or_else(|_| "api://default".to_string()),
        })
    }
}
