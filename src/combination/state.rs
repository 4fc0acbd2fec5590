use std::io::{self, Write};

use super::constants::{MAX_DIGIT, MAX_SIZE};
use super::errors::CombinationError;

/// Partial combination being built during the descent.
///
/// Digits live in a fixed buffer indexed by depth; `len` is the number of
/// positions filled so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combination {
    digits: [u8; MAX_SIZE],
    len: usize,
}

impl Combination {
    pub fn new() -> Self {
        Self {
            digits: [0; MAX_SIZE],
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn digits(&self) -> &[u8] {
        self.digits.get(..self.len).unwrap_or(&[])
    }

    /// Drop everything at and after `depth`, then store `digit` there.
    ///
    /// # Errors
    ///
    /// Returns an error if `depth` is past the buffer or past the filled
    /// prefix, if `digit` is not a decimal digit, or if it is not greater than
    /// the digit before it.
    pub fn place(&mut self, depth: usize, digit: u8) -> Result<(), CombinationError> {
        if depth >= MAX_SIZE {
            return Err(CombinationError::CapacityExceeded {
                depth,
                capacity: MAX_SIZE,
            });
        }

        if depth > self.len {
            return Err(CombinationError::DepthSkipped {
                depth,
                len: self.len,
            });
        }

        if digit > MAX_DIGIT {
            return Err(CombinationError::InvalidDigit(digit));
        }

        if depth > 0
            && let Some(&previous) = self.digits.get(depth - 1)
            && previous >= digit
        {
            return Err(CombinationError::NotIncreasing { previous, digit });
        }

        if let Some(slot) = self.digits.get_mut(depth) {
            *slot = digit;
        }
        self.len = depth + 1;
        Ok(())
    }

    /// Write the digits as ASCII characters, without any terminator.
    ///
    /// # Errors
    ///
    /// Propagates any error from the underlying writer.
    pub fn write_ascii<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let mut ascii = [0u8; MAX_SIZE];
        for (slot, digit) in ascii.iter_mut().zip(self.digits()) {
            *slot = b'0' + digit;
        }
        out.write_all(ascii.get(..self.len).unwrap_or(&[]))
    }
}

impl Default for Combination {
    fn default() -> Self {
        Self::new()
    }
}
