pub mod commands;
pub mod logging;
pub mod output;

use clap::{Parser, Subcommand};

use crate::config::app_config::OutputFormat;

/// Decode messages encrypted with a repeating-key ASCII shift cipher.
#[derive(Parser, Debug)]
#[command(name = "shiftdecode", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output (debug diagnostics on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode: only show errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to alternative config file (default: ./shiftdecode.toml if present)
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Decode an encrypted message
    Decode {
        /// Encrypted message file (default: stdin, or '-')
        file: Option<String>,

        /// Shift values, e.g. 3,1,4
        #[arg(short, long, allow_hyphen_values = true, conflicts_with = "key_file")]
        key: Option<String>,

        /// File containing the shift values
        #[arg(long)]
        key_file: Option<String>,

        /// Write the decoded message here instead of stdout
        #[arg(short, long)]
        output: Option<String>,

        /// Output format
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_decode_with_negative_key() {
        let cli = Cli::try_parse_from(["shiftdecode", "decode", "msg.txt", "--key", "-1,2"]).unwrap();
        let Commands::Decode { file, key, .. } = cli.command;
        assert_eq!(file.as_deref(), Some("msg.txt"));
        assert_eq!(key.as_deref(), Some("-1,2"));
    }

    #[test]
    fn key_and_key_file_conflict() {
        let result = Cli::try_parse_from([
            "shiftdecode",
            "decode",
            "--key",
            "1",
            "--key-file",
            "k.txt",
        ]);
        assert!(result.is_err());
    }
}
