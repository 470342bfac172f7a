use std::fmt;

use crate::core::errors::{Result, ShiftDecodeError};

/// A non-empty ordered sequence of shift values, reused cyclically.
///
/// Values are conventionally in `[0, 127]` but the range is not enforced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key {
    shifts: Vec<i32>,
}

impl Key {
    /// Build a key from its shift values. Fails when `shifts` is empty.
    pub fn new(shifts: Vec<i32>) -> Result<Self> {
        if shifts.is_empty() {
            return Err(ShiftDecodeError::InvalidArgument {
                detail: "decoding key must contain at least one shift value".into(),
            });
        }
        Ok(Self { shifts })
    }

    /// Number of shift values. Always at least 1.
    pub fn len(&self) -> usize {
        self.shifts.len()
    }

    /// Shift value at `index`, if in bounds.
    pub fn shift_at(&self, index: usize) -> Option<i32> {
        self.shifts.get(index).copied()
    }

    pub fn shifts(&self) -> &[i32] {
        &self.shifts
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, shift) in self.shifts().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{shift}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_key_is_rejected() {
        let err = Key::new(vec![]).unwrap_err();
        assert!(matches!(err, ShiftDecodeError::InvalidArgument { .. }));
    }

    #[test]
    fn shift_at_bounds() {
        let key = Key::new(vec![3, 1, 4]).unwrap();
        assert_eq!(key.len(), 3);
        assert_eq!(key.shift_at(2), Some(4));
        assert_eq!(key.shift_at(3), None);
    }

    #[test]
    fn out_of_range_values_are_kept() {
        let key = Key::new(vec![-5, 300]).unwrap();
        assert_eq!(key.shifts(), &[-5, 300]);
    }

    #[test]
    fn display_lists_shifts() {
        let key = Key::new(vec![3, 1, 4]).unwrap();
        assert_eq!(key.to_string(), "[3, 1, 4]");
    }
}
