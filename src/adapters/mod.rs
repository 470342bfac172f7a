pub mod formatters;
pub mod parsers;
pub mod readers;
