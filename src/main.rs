mod adapters;
mod cli;
mod config;
mod core;

use clap::Parser;

use cli::commands::decode::DecodeOptions;
use cli::{Cli, Commands};
use config::app_config::AppConfig;

fn main() {
    let args = Cli::parse();
    cli::logging::init(args.verbose, args.quiet);

    if let Err(e) = run(&args) {
        cli::output::error(&format!("Error: {e}"));
        std::process::exit(1);
    }
}

fn run(args: &Cli) -> crate::core::errors::Result<()> {
    let config = AppConfig::discover(args.config.as_deref())?;

    match &args.command {
        Commands::Decode {
            file,
            key,
            key_file,
            output,
            format,
        } => {
            let opts = DecodeOptions {
                file: file.as_deref(),
                key: key.as_deref(),
                key_file: key_file.as_deref(),
                output: output.as_deref(),
                format: *format,
                quiet: args.quiet,
            };
            cli::commands::decode::execute(&opts, config.as_ref())
        }
    }
}
