use std::io::Read;
use std::path::{Path, PathBuf};

use crate::core::errors::{Result, ShiftDecodeError};
use crate::core::models::message::Message;

/// Where the encrypted message comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageSource {
    Stdin,
    File(PathBuf),
}

impl MessageSource {
    /// Map a CLI argument to a source. `None` and `-` both mean stdin.
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            None | Some("-") => Self::Stdin,
            Some(path) => Self::File(PathBuf::from(path)),
        }
    }

    /// Label used in status output.
    pub fn describe(&self) -> String {
        match self {
            Self::Stdin => "<stdin>".to_string(),
            Self::File(path) => path.display().to_string(),
        }
    }

    /// Read the whole source into a [`Message`].
    pub fn read(&self) -> Result<Message> {
        let text = match self {
            Self::Stdin => {
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf)?;
                buf
            }
            Self::File(path) => read_file(path)?,
        };
        Ok(Message::from_text(&text))
    }
}

fn read_file(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(ShiftDecodeError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    Ok(std::fs::read_to_string(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dash_and_none_mean_stdin() {
        assert_eq!(MessageSource::from_arg(None), MessageSource::Stdin);
        assert_eq!(MessageSource::from_arg(Some("-")), MessageSource::Stdin);
        assert_eq!(
            MessageSource::from_arg(Some("msg.txt")),
            MessageSource::File(PathBuf::from("msg.txt"))
        );
    }

    #[test]
    fn missing_file_is_reported() {
        let source = MessageSource::File(PathBuf::from("definitely/not/here.txt"));
        let err = source.read().unwrap_err();
        assert!(matches!(err, ShiftDecodeError::FileNotFound { .. }));
    }
}
