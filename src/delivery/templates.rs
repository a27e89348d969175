use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::AttributeValue;
use tracing::error;

use crate::core::models::{DeliveryChannel, MessageTemplate};

/// Read-only view of the externally managed template table.
///
/// Rows are keyed by (language, messagetype); the table is small and
/// static, so the lookup is a full scan with a filter predicate rather
/// than an indexed query.
pub struct TemplateStore {
    client: aws_sdk_dynamodb::Client,
    table_name: String,
}

impl TemplateStore {
    #[must_use]
    pub fn new(client: aws_sdk_dynamodb::Client, table_name: String) -> Self {
        Self { client, table_name }
    }

    /// Find the template for a (language, channel) pair.
    ///
    /// Both attributes are matched exactly (case-sensitive). The first
    /// returned row wins; with duplicate rows the choice is whichever the
    /// scan yields first. Store communication errors are logged and
    /// collapsed to `None` - callers cannot distinguish them from a miss.
    pub async fn find(
        &self,
        language: &str,
        channel: DeliveryChannel,
    ) -> Option<MessageTemplate> {
        let result = self
            .client
            .scan()
            .table_name(&self.table_name)
            .filter_expression("#language = :language AND #messagetype = :messagetype")
            .expression_attribute_names("#language", "language")
            .expression_attribute_names("#messagetype", "messagetype")
            .expression_attribute_values(":language", AttributeValue::S(language.to_string()))
            .expression_attribute_values(
                ":messagetype",
                AttributeValue::S(channel.as_str().to_string()),
            )
            .send()
            .await;

        match result {
            Ok(output) => output.items().first().and_then(MessageTemplate::from_item),
            Err(e) => {
                error!("Template store scan failed: {}", DisplayErrorContext(&e));
                None
            }
        }
    }
}
