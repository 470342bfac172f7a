use std::io::Write;
use std::path::Path;

use tracing::debug;

use crate::adapters::formatters::json_formatter::JsonFormatter;
use crate::adapters::formatters::text_formatter::TextFormatter;
use crate::adapters::parsers::key_list_parser::KeyListParser;
use crate::adapters::readers::message_reader::MessageSource;
use crate::cli::output;
use crate::config::app_config::{AppConfig, OutputFormat};
use crate::core::errors::{Result, ShiftDecodeError};
use crate::core::models::key::Key;
use crate::core::services::decoder::Decoder;
use crate::core::traits::formatter::MessageFormatter;
use crate::core::traits::parser::KeyParser;

/// Options for `shiftdecode decode`, as given on the command line.
#[derive(Debug, Default)]
pub struct DecodeOptions<'a> {
    pub file: Option<&'a str>,
    pub key: Option<&'a str>,
    pub key_file: Option<&'a str>,
    pub output: Option<&'a str>,
    pub format: Option<OutputFormat>,
    pub quiet: bool,
}

/// Execute the `shiftdecode decode` command.
///
/// Reads the encrypted message, resolves the key from flags or config,
/// decodes once and writes the result to `--output` or stdout.
pub fn execute(opts: &DecodeOptions<'_>, config: Option<&AppConfig>) -> Result<()> {
    let source = MessageSource::from_arg(opts.file);
    let key = resolve_key(opts.key, opts.key_file, config)?;
    let format = opts
        .format
        .or_else(|| config.and_then(|c| c.output.format))
        .unwrap_or_default();
    debug!(source = %source.describe(), key = %key, ?format, "decode requested");

    let encrypted = source.read()?;
    let mut decoder = Decoder::new(encrypted, key)?;
    decoder.decode()?;
    let decoded = decoder.decoded_message()?;
    debug!(
        encrypted_lines = decoder.encrypted().line_count(),
        key_len = decoder.key().len(),
        "decoder finished"
    );
    if decoded.is_empty() && !opts.quiet {
        output::warning(&format!("{} contains no lines", source.describe()));
    }

    let formatter = formatter_for(format);
    let rendered = formatter.render(decoded)?;

    match opts.output {
        Some(path) => {
            std::fs::write(path, &rendered)?;
            if !opts.quiet {
                output::header(&format!("Decoding {}", source.describe()));
                output::detail(&format!("Format: {}", formatter.name()));
                output::detail(&format!("Destination: {path}"));
                output::success(&format!(
                    "Decoded {} lines into {path}",
                    decoded.line_count()
                ));
            }
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}

/// Pick the key from, in order: `--key`, `--key-file`, `decoder.key`,
/// `decoder.key_file`.
fn resolve_key(
    key: Option<&str>,
    key_file: Option<&str>,
    config: Option<&AppConfig>,
) -> Result<Key> {
    let parser = KeyListParser;

    if let Some(list) = key {
        return parser.parse(list, "--key");
    }
    if let Some(path) = key_file {
        return read_key_file(&parser, Path::new(path));
    }
    if let Some(config) = config {
        if let Some(shifts) = &config.decoder.key {
            return Key::new(shifts.clone());
        }
        if let Some(path) = config.key_file() {
            return read_key_file(&parser, &path);
        }
    }

    Err(ShiftDecodeError::InvalidArgument {
        detail: "no decoding key supplied\n\n  \
                 Solutions:\n    \
                 → Pass the shift values: --key 3,1,4\n    \
                 → Point to a key file: --key-file <path>\n    \
                 → Set [decoder] key = [3, 1, 4] in shiftdecode.toml"
            .into(),
    })
}

fn read_key_file(parser: &impl KeyParser, path: &Path) -> Result<Key> {
    if !path.exists() {
        return Err(ShiftDecodeError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let content = std::fs::read_to_string(path)?;
    parser.parse(&content, &path.display().to_string())
}

fn formatter_for(format: OutputFormat) -> Box<dyn MessageFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}
