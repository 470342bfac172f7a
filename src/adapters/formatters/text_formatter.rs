use crate::core::errors::Result;
use crate::core::models::message::Message;
use crate::core::traits::formatter::MessageFormatter;

/// Writes lines as plain text, one per line, with a trailing newline.
pub struct TextFormatter;

impl MessageFormatter for TextFormatter {
    fn render(&self, message: &Message) -> Result<String> {
        let mut output = String::new();
        for line in message.lines() {
            output.push_str(line);
            output.push('\n');
        }
        Ok(output)
    }

    fn name(&self) -> &str {
        "text"
    }
}
