use crate::core::errors::{Result, ShiftDecodeError};
use crate::core::models::key::Key;
use crate::core::traits::parser::KeyParser;

/// Parses keys written as integer lists.
///
/// Supports:
/// - Comma and/or whitespace separators (`3,1,4`, `3 1 4`, `3, 1,\n4`)
/// - Negative values (`-2`)
/// - `#` comments running to end of line
pub struct KeyListParser;

impl KeyParser for KeyListParser {
    fn parse(&self, content: &str, source_name: &str) -> Result<Key> {
        let mut shifts = Vec::new();

        let tokens = content
            .lines()
            .map(|line| line.split('#').next().unwrap_or_default())
            .flat_map(|line| line.split(|c: char| c == ',' || c.is_whitespace()))
            .filter(|t| !t.is_empty());

        for (idx, token) in tokens.enumerate() {
            let shift = token
                .parse::<i32>()
                .map_err(|e| ShiftDecodeError::KeyParse {
                    source_name: source_name.to_string(),
                    detail: format!("value {} ('{token}'): {e}", idx + 1),
                })?;
            shifts.push(shift);
        }

        if shifts.is_empty() {
            return Err(ShiftDecodeError::KeyParse {
                source_name: source_name.to_string(),
                detail: "no shift values found".into(),
            });
        }

        Key::new(shifts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_comma_separated() {
        let key = KeyListParser.parse("3,1,4", "--key").unwrap();
        assert_eq!(key.shifts(), &[3, 1, 4]);
    }

    #[test]
    fn parse_mixed_separators_and_newlines() {
        let key = KeyListParser.parse(" 3, 1\n4\t1 ,5 ", "key.txt").unwrap();
        assert_eq!(key.shifts(), &[3, 1, 4, 1, 5]);
    }

    #[test]
    fn parse_skips_comments() {
        let content = "# course key\n10, 20 # second half below\n30\n";
        let key = KeyListParser.parse(content, "key.txt").unwrap();
        assert_eq!(key.shifts(), &[10, 20, 30]);
    }

    #[test]
    fn parse_negative_values() {
        let key = KeyListParser.parse("-2, 5", "--key").unwrap();
        assert_eq!(key.shifts(), &[-2, 5]);
    }

    #[test]
    fn parse_bad_token_names_position() {
        let err = KeyListParser.parse("3, x, 4", "key.txt").unwrap_err();
        let msg = err.to_string();
        assert!(matches!(err, ShiftDecodeError::KeyParse { .. }));
        assert!(msg.contains("key.txt"));
        assert!(msg.contains("value 2 ('x')"));
    }

    #[test]
    fn parse_empty_fails() {
        let err = KeyListParser.parse("  # nothing here\n", "--key").unwrap_err();
        assert!(err.to_string().contains("no shift values"));
    }
}
