pub mod json_formatter;
pub mod text_formatter;
