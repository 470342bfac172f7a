use tracing::{debug, info};

use crate::core::errors::{Result, ShiftDecodeError};
use crate::core::models::key::Key;
use crate::core::models::message::Message;

/// Size of the character universe the cipher shifts over.
const ALPHABET_SIZE: i64 = 128;

/// Code produced when a character minus its shift is exactly zero.
const ZERO_DIFF_CODE: u8 = 127;

/// Lifecycle of a [`Decoder`]. Moves from `NotDecoded` to `Decoded` once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeState {
    NotDecoded,
    Decoded(Message),
}

/// Decodes one encrypted [`Message`] with a repeating [`Key`], exactly once.
#[derive(Debug)]
pub struct Decoder {
    encrypted: Message,
    key: Key,
    state: DecodeState,
}

impl Decoder {
    /// Create a decoder for `encrypted` using `key`.
    ///
    /// Every character of the encrypted message must lie in `[0, 127]`.
    pub fn new(encrypted: Message, key: Key) -> Result<Self> {
        for (idx, line) in encrypted.lines().enumerate() {
            if let Some(pos) = line.find(|c: char| !c.is_ascii()) {
                return Err(ShiftDecodeError::InvalidArgument {
                    detail: format!(
                        "line {}, column {}: character outside the ASCII range [0, 127]",
                        idx + 1,
                        line[..pos].chars().count() + 1
                    ),
                });
            }
        }

        Ok(Self {
            encrypted,
            key,
            state: DecodeState::NotDecoded,
        })
    }

    /// Decode every line of the encrypted message, in order.
    ///
    /// On failure the decoder stays in `NotDecoded` and nothing is stored.
    pub fn decode(&mut self) -> Result<()> {
        if self.is_decoded() {
            return Err(ShiftDecodeError::InvalidState {
                detail: "message already decoded".into(),
            });
        }

        let mut decoded = Message::new();
        for index in 0..self.encrypted.line_count() {
            let line = self.encrypted.line(index)?;
            let plain = decode_line(line, &self.key)?;
            debug!(line = index + 1, chars = plain.len(), "decoded line");
            decoded.append_line(plain);
        }

        info!(
            lines = decoded.line_count(),
            key_len = self.key.len(),
            "message decoded"
        );
        self.state = DecodeState::Decoded(decoded);
        Ok(())
    }

    /// The decoded message. Fails until [`Decoder::decode`] has succeeded.
    pub fn decoded_message(&self) -> Result<&Message> {
        match &self.state {
            DecodeState::Decoded(message) => Ok(message),
            DecodeState::NotDecoded => Err(ShiftDecodeError::InvalidState {
                detail: "message not yet decoded".into(),
            }),
        }
    }

    pub fn is_decoded(&self) -> bool {
        matches!(self.state, DecodeState::Decoded(_))
    }

    pub fn encrypted(&self) -> &Message {
        &self.encrypted
    }

    pub fn key(&self) -> &Key {
        &self.key
    }
}

/// Inverse-shift a single character code by `shift`.
///
/// The difference is reduced into `[0, 127]` with Euclidean modulo, so a
/// shift larger than the code wraps around instead of going negative.
/// A difference of exactly zero decodes to 127.
pub fn decode_char(code: u8, shift: i32) -> u8 {
    let diff = i64::from(code) - i64::from(shift);
    if diff == 0 {
        return ZERO_DIFF_CODE;
    }
    // rem_euclid keeps the value in [0, ALPHABET_SIZE)
    diff.rem_euclid(ALPHABET_SIZE) as u8
}

/// Decode one line. The key cursor starts at the key's first value.
pub fn decode_line(line: &str, key: &Key) -> Result<String> {
    let mut cursor = 0usize;
    let mut plain = String::with_capacity(line.len());

    for code in line.bytes() {
        if !code.is_ascii() {
            return Err(ShiftDecodeError::Internal {
                detail: format!("non-ASCII byte {code:#04x} reached the character transform"),
            });
        }
        let shift = key.shift_at(cursor).ok_or_else(|| ShiftDecodeError::Internal {
            detail: format!("key cursor {cursor} escaped key of length {}", key.len()),
        })?;
        plain.push(char::from(decode_char(code, shift)));
        cursor = (cursor + 1) % key.len();
    }

    Ok(plain)
}
