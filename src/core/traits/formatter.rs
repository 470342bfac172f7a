use crate::core::errors::Result;
use crate::core::models::message::Message;

/// Port for rendering a decoded [`Message`] for output.
pub trait MessageFormatter: Send + Sync {
    /// Render the whole message as a string ready to be written.
    fn render(&self, message: &Message) -> Result<String>;

    /// Human-readable name of this format (e.g. "text", "json").
    fn name(&self) -> &str;
}
