pub mod message_reader;
