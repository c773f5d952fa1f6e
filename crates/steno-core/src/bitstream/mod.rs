//! Bit-level stream engine: a writer that packs fixed-width bit groups into
//! bytes and a reader that replays them.
//!
//! Bits are laid out most-significant-bit first, both across a bit group and
//! within each emitted byte.  The final byte is zero-padded in its low bits.
//!
//! ```text
//! push(0b1, 1), push(0b011, 3), push(0x1FF, 9)
//!
//!   byte 0         byte 1
//!   1011 1111      1111 1000
//!   ^^^^ ^^^^      ^^^^ ^---  zero padding
//! ```
//!
//! # Fill counters (for beginners)
//!
//! Both sides keep one partially used "open" byte.  The writer tracks how many
//! low bits of that byte are still unfilled, the reader how many low bits are
//! still unread.  Between calls both counters stay in `1..=8`: a value of `8`
//! means the open byte is fresh.
//!
//! The reader treats its input as if one extra zero byte were appended.  Bits
//! inside that pad byte read as zero; asking for bits beyond it fails with
//! [`BitStreamError::Exhausted`].

pub mod reader;
pub mod writer;

pub use reader::BitReader;
pub use writer::BitWriter;

use thiserror::Error;

/// Widest bit group the engine accepts in a single call.
pub const MAX_GROUP_WIDTH: u32 = 64;

/// Errors raised by [`BitWriter::push`] and [`BitReader::pull`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BitStreamError {
    /// The requested width is zero or larger than [`MAX_GROUP_WIDTH`].
    #[error("invalid bit group width {width}: must be between 1 and 64")]
    InvalidWidth { width: u32 },

    /// The value has bits set at or above its declared width.
    #[error("value {value:#x} does not fit in {width} bits")]
    ValueTooWide { value: u64, width: u32 },

    /// The reader needed a byte beyond the zero pad byte.
    #[error("bit stream exhausted while reading a {requested}-bit group")]
    Exhausted { requested: u32 },
}

/// Validates a bit group width shared by the writer and the reader.
pub(crate) fn check_width(width: u32) -> Result<(), BitStreamError> {
    if width == 0 || width > MAX_GROUP_WIDTH {
        Err(BitStreamError::InvalidWidth { width })
    } else {
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
