pub mod key_list_parser;
