//! In-memory keymap device.
//!
//! Stands in for a physical keyboard: it remembers the last buffer written
//! and hands it back on read.

use super::{DeviceError, KeymapDevice};

/// A [`KeymapDevice`] backed by a byte vector.
#[derive(Debug, Clone)]
pub struct LoopbackDevice {
    key_count: usize,
    buffer: Option<Vec<u8>>,
    writes: u32,
}

impl LoopbackDevice {
    /// Creates an empty device with `key_count` keys.
    pub fn new(key_count: usize) -> Self {
        Self {
            key_count,
            buffer: None,
            writes: 0,
        }
    }

    /// Creates a device that already holds `buffer`.
    pub fn with_buffer(key_count: usize, buffer: Vec<u8>) -> Self {
        Self {
            key_count,
            buffer: Some(buffer),
            writes: 0,
        }
    }

    /// The stored buffer, if any.
    pub fn buffer(&self) -> Option<&[u8]> {
        self.buffer.as_deref()
    }

    /// Number of successful writes.
    pub fn write_count(&self) -> u32 {
        self.writes
    }
}

impl KeymapDevice for LoopbackDevice {
    fn key_count(&self) -> usize {
        self.key_count
    }

    fn read_buffer(&mut self) -> Result<Vec<u8>, DeviceError> {
        self.buffer.clone().ok_or(DeviceError::NoBuffer)
    }

    fn write_buffer(&mut self, buffer: &[u8]) -> Result<(), DeviceError> {
        self.buffer = Some(buffer.to_vec());
        self.writes += 1;
        Ok(())
    }
}
