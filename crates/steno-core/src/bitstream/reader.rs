//! MSB-first bit group reader.

use super::{check_width, BitStreamError};

/// Replays a buffer produced by [`super::BitWriter`] as bit groups.
///
/// The input is read as if a single zero byte followed it.  A pull that
/// needs a byte beyond that pad byte fails with [`BitStreamError::Exhausted`].
///
/// # Examples
///
/// ```rust
/// use steno_core::bitstream::BitReader;
///
/// let mut reader = BitReader::new(&[0b1011_1111, 0b1110_0000]);
/// assert_eq!(reader.pull(3).unwrap(), 0b101);
/// assert_eq!(reader.pull(8).unwrap(), 0xFF);
/// ```
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    data: &'a [u8],
    /// Index of the byte to load after the open byte.  `data.len()` is the
    /// pad byte.
    next_index: usize,
    open_byte: u8,
    /// Low bits of the open byte not yet consumed.  Always in `1..=8`.
    bits_left_to_read: u32,
}

impl<'a> BitReader<'a> {
    /// Creates a reader positioned at the first bit of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        // An empty input starts directly on the pad byte.
        let open_byte = data.first().copied().unwrap_or(0);
        Self {
            data,
            next_index: 1,
            open_byte,
            bits_left_to_read: 8,
        }
    }

    /// Reads the next `width` bits and returns them as an unsigned value.
    ///
    /// # Errors
    ///
    /// Returns [`BitStreamError::InvalidWidth`] if `width` is not in
    /// `1..=64`, and [`BitStreamError::Exhausted`] if the request runs past
    /// the pad byte.  The reader must not be used after an exhaustion error.
    pub fn pull(&mut self, width: u32) -> Result<u64, BitStreamError> {
        check_width(width)?;

        let mut remaining = width;
        let mut result: u64 = 0;

        if remaining >= self.bits_left_to_read {
            // Drain the rest of the open byte.
            let mask = ((1u16 << self.bits_left_to_read) - 1) as u8;
            result = u64::from(self.open_byte & mask);
            remaining -= self.bits_left_to_read;
            self.bits_left_to_read = 8;
            self.open_byte = self.load_next(width)?;

            while remaining >= 8 {
                result = (result << 8) | u64::from(self.open_byte);
                remaining -= 8;
                self.open_byte = self.load_next(width)?;
            }
        }

        // remaining < bits_left_to_read here
        if remaining > 0 {
            let shifted = self.open_byte >> (self.bits_left_to_read - remaining);
            let mask = (1u8 << remaining) - 1;
            result = (result << remaining) | u64::from(shifted & mask);
            self.bits_left_to_read -= remaining;
        }

        Ok(result)
    }

    /// Number of unread low bits in the open byte (`1..=8`).
    pub fn bits_left_to_read(&self) -> u32 {
        self.bits_left_to_read
    }

    fn load_next(&mut self, requested: u32) -> Result<u8, BitStreamError> {
        let index = self.next_index;
        let byte = match index.cmp(&self.data.len()) {
            std::cmp::Ordering::Less => self.data[index],
            std::cmp::Ordering::Equal => 0,
            std::cmp::Ordering::Greater => return Err(BitStreamError::Exhausted { requested }),
        };
        self.next_index += 1;
        Ok(byte)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_groups_across_byte_boundary() {
        // Arrange: 00 1 0010 1101 followed by padding
        let bytes = [0b0010_0101, 0b1010_0000];
        let mut reader = BitReader::new(&bytes);

        // Act / Assert
        assert_eq!(reader.pull(2).unwrap(), 0b00);
        assert_eq!(reader.pull(9).unwrap(), 0x12D);
        assert_eq!(reader.bits_left_to_read(), 5);
    }

    #[test]
    fn test_padding_bits_read_as_zero() {
        let bytes = [0b1000_0000];
        let mut reader = BitReader::new(&bytes);
        assert_eq!(reader.pull(1).unwrap(), 1);
        assert_eq!(reader.pull(7).unwrap(), 0);
        // The pad byte is still readable.
        assert_eq!(reader.pull(7).unwrap(), 0);
    }

    #[test]
    fn test_empty_input_reads_from_pad_byte() {
        let mut reader = BitReader::new(&[]);
        assert_eq!(reader.pull(7).unwrap(), 0);
    }

    #[test]
    fn test_exhausting_pad_byte_fails() {
        let mut reader = BitReader::new(&[]);
        let result = reader.pull(8);
        assert_eq!(result, Err(BitStreamError::Exhausted { requested: 8 }));
    }

    #[test]
    fn test_pull_beyond_data_and_pad_fails() {
        let bytes = [0xFF, 0xFF];
        let mut reader = BitReader::new(&bytes);
        assert_eq!(reader.pull(16).unwrap(), 0xFFFF);
        assert!(matches!(reader.pull(9), Err(BitStreamError::Exhausted { .. })));
    }

    #[test]
    fn test_full_width_read() {
        let bytes = [0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF];
        let mut reader = BitReader::new(&bytes);
        assert_eq!(reader.pull(64).unwrap(), 0x0123_4567_89AB_CDEF);
        assert_eq!(reader.bits_left_to_read(), 8);
    }

    #[test]
    fn test_invalid_widths_are_rejected() {
        let mut reader = BitReader::new(&[0xFF]);
        assert_eq!(reader.pull(0), Err(BitStreamError::InvalidWidth { width: 0 }));
        assert_eq!(reader.pull(65), Err(BitStreamError::InvalidWidth { width: 65 }));
    }
}
