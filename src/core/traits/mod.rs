pub mod formatter;
pub mod parser;
