use serde::Serialize;

use crate::core::errors::Result;
use crate::core::models::message::Message;
use crate::core::traits::formatter::MessageFormatter;

/// Writes the message as a pretty-printed JSON object.
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonMessage<'a> {
    line_count: usize,
    #[serde(flatten)]
    message: &'a Message,
}

impl MessageFormatter for JsonFormatter {
    fn render(&self, message: &Message) -> Result<String> {
        let doc = JsonMessage {
            line_count: message.line_count(),
            message,
        };
        let mut output = serde_json::to_string_pretty(&doc)?;
        output.push('\n');
        Ok(output)
    }

    fn name(&self) -> &str {
        "json"
    }
}
