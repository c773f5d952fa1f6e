//! MSB-first bit group writer.

use super::{check_width, BitStreamError};

/// Accumulates fixed-width bit groups into a byte buffer.
///
/// # Examples
///
/// ```rust
/// use steno_core::bitstream::BitWriter;
///
/// let mut writer = BitWriter::new();
/// writer.push(0b101, 3).unwrap();
/// writer.push(0xFF, 8).unwrap();
/// assert_eq!(writer.finish(), vec![0b1011_1111, 0b1110_0000]);
/// ```
#[derive(Debug, Clone)]
pub struct BitWriter {
    /// Completed bytes.
    buffer: Vec<u8>,
    /// Bits already placed in the open byte, right-aligned.
    open_byte: u8,
    /// Low bits of the open byte still unfilled.  Always in `1..=8`.
    bits_left_to_fill: u32,
}

impl BitWriter {
    /// Creates an empty writer.
    pub fn new() -> Self {
        Self {
            buffer: Vec::new(),
            open_byte: 0,
            bits_left_to_fill: 8,
        }
    }

    /// Appends the low `width` bits of `value`, most significant bit first.
    ///
    /// # Errors
    ///
    /// Returns [`BitStreamError::InvalidWidth`] if `width` is not in `1..=64`
    /// and [`BitStreamError::ValueTooWide`] if `value >= 2^width`.  Nothing
    /// is written in either case.
    pub fn push(&mut self, value: u64, width: u32) -> Result<(), BitStreamError> {
        check_width(width)?;
        if width < 64 && value >> width != 0 {
            return Err(BitStreamError::ValueTooWide { value, width });
        }

        let mut remaining = width;

        if remaining >= self.bits_left_to_fill {
            // Complete the open byte with the top bits of `value`.
            let fill = self.bits_left_to_fill;
            remaining -= fill;
            let head = (value >> remaining) as u16;
            let completed = ((u16::from(self.open_byte) << fill) | head) as u8;
            self.buffer.push(completed);
            self.open_byte = 0;
            self.bits_left_to_fill = 8;

            while remaining >= 8 {
                remaining -= 8;
                self.buffer.push((value >> remaining) as u8);
            }
        }

        // remaining < bits_left_to_fill here
        if remaining > 0 {
            let tail = (value & ((1u64 << remaining) - 1)) as u8;
            self.open_byte = (self.open_byte << remaining) | tail;
            self.bits_left_to_fill -= remaining;
        }

        Ok(())
    }

    /// Returns the written bytes, with any pending bits zero-padded into a
    /// final byte.
    ///
    /// The writer is left untouched, so calling this twice yields the same
    /// buffer.
    pub fn finish(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.buffer.len() + 1);
        out.extend_from_slice(&self.buffer);
        if self.bits_left_to_fill < 8 {
            out.push(self.open_byte << self.bits_left_to_fill);
        }
        out
    }

    /// Number of unfilled low bits in the open byte (`1..=8`).
    pub fn bits_left_to_fill(&self) -> u32 {
        self.bits_left_to_fill
    }

    /// Total number of bits pushed so far.
    pub fn bit_len(&self) -> u64 {
        self.buffer.len() as u64 * 8 + u64::from(8 - self.bits_left_to_fill)
    }
}

impl Default for BitWriter {
    fn default() -> Self {
        Self::new()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_writer_finishes_empty() {
        let writer = BitWriter::new();
        assert!(writer.finish().is_empty());
        assert_eq!(writer.bits_left_to_fill(), 8);
        assert_eq!(writer.bit_len(), 0);
    }

    #[test]
    fn test_small_groups_merge_into_open_byte() {
        // Arrange
        let mut writer = BitWriter::new();

        // Act
        writer.push(0b01, 2).unwrap();
        writer.push(0b1, 1).unwrap();

        // Assert: nothing emitted yet, 5 bits left
        assert_eq!(writer.bits_left_to_fill(), 5);
        assert_eq!(writer.finish(), vec![0b0110_0000]);
    }

    #[test]
    fn test_exact_byte_resets_fill_counter() {
        let mut writer = BitWriter::new();
        writer.push(0xA5, 8).unwrap();
        assert_eq!(writer.bits_left_to_fill(), 8);
        assert_eq!(writer.finish(), vec![0xA5]);
    }

    #[test]
    fn test_group_spanning_byte_boundary() {
        let mut writer = BitWriter::new();
        writer.push(0b00, 2).unwrap();
        writer.push(0x12D, 9).unwrap(); // quoted '-'
        // 00 1 0010 1101 -> 0010 0101 | 101x xxxx
        assert_eq!(writer.finish(), vec![0b0010_0101, 0b1010_0000]);
        assert_eq!(writer.bits_left_to_fill(), 5);
    }

    #[test]
    fn test_full_64_bit_group_after_offset() {
        let mut writer = BitWriter::new();
        writer.push(1, 1).unwrap();
        writer.push(u64::MAX, 64).unwrap();
        let bytes = writer.finish();
        assert_eq!(bytes.len(), 9);
        assert!(bytes[..8].iter().all(|&b| b == 0xFF));
        assert_eq!(bytes[8], 0b1000_0000);
    }

    #[test]
    fn test_finish_is_repeatable() {
        let mut writer = BitWriter::new();
        writer.push(0b1_0100_0001, 9).unwrap();
        let first = writer.finish();
        let second = writer.finish();
        assert_eq!(first, second);
        assert_eq!(writer.bit_len(), 9);
    }

    #[test]
    fn test_value_too_wide_is_rejected() {
        let mut writer = BitWriter::new();
        let result = writer.push(0b100, 2);
        assert_eq!(result, Err(BitStreamError::ValueTooWide { value: 0b100, width: 2 }));
        // The rejected call leaves the stream untouched.
        assert!(writer.finish().is_empty());
    }

    #[test]
    fn test_zero_width_is_rejected() {
        let mut writer = BitWriter::new();
        assert_eq!(writer.push(0, 0), Err(BitStreamError::InvalidWidth { width: 0 }));
    }

    #[test]
    fn test_width_above_64_is_rejected() {
        let mut writer = BitWriter::new();
        assert_eq!(writer.push(0, 65), Err(BitStreamError::InvalidWidth { width: 65 }));
    }
}
