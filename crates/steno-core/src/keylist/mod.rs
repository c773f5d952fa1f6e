//! Keylist compression: turns an ordered list of keymap actions into a
//! compact bit stream and back.
//!
//! # Symbol alphabet
//!
//! | Symbol              | Bits          | Meaning                                 |
//! |---------------------|---------------|-----------------------------------------|
//! | end of action       | `00`          | closes the action being assembled       |
//! | hyphen              | `01`          | a literal `-` inside an action          |
//! | quoted byte         | `1 bbbbbbbb`  | any other UTF-8 byte `b`                |
//! | no-op               | `1 00101101`  | the whole `"no-op"` entry (quoted `-`)  |
//!
//! Because a hyphen inside text always uses the two-bit escape, the quoted
//! hyphen pattern can never appear in ordinary text and is free to stand for
//! the [`NO_OP_ACTION`] entry, which therefore also needs no end marker.
//!
//! The production buffer carries no entry count: the decoder must be told
//! how many entries to produce.  The [`diagnostic`] format instead replaces
//! end-of-action with `;` and ends with a quoted zero byte.

pub mod codec;
pub mod diagnostic;

pub use codec::{decode_keylist, encode_keylist};
pub use diagnostic::{decode_diagnostic, encode_diagnostic};

use std::string::FromUtf8Error;

use thiserror::Error;

use crate::bitstream::BitStreamError;

/// The distinguished action that is encoded as a single sentinel symbol.
pub const NO_OP_ACTION: &str = "no-op";

/// Byte value of the hyphen escaped by the two-bit `01` symbol.
pub(crate) const HYPHEN: u8 = b'-';

/// Byte value of the separator escaped by `00` in the diagnostic format.
pub(crate) const SEPARATOR: u8 = b';';

/// Width of the short escape symbols (`00`, `01`).
pub(crate) const ESCAPE_WIDTH: u32 = 2;

/// Width of a quoted byte: one flag bit plus eight data bits.
pub(crate) const QUOTED_WIDTH: u32 = 9;

/// Flag bit that marks a quoted byte.
pub(crate) const QUOTE_FLAG: u64 = 1 << 8;

pub(crate) const END_OF_ACTION_BITS: u64 = 0b00;
pub(crate) const HYPHEN_BITS: u64 = 0b01;

/// Errors that can occur while encoding or decoding keylists.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KeylistError {
    /// The underlying bit stream rejected a write or ran out of data.
    #[error("bit stream error: {0}")]
    BitStream(#[from] BitStreamError),

    /// The bytes assembled for an action are not valid UTF-8.
    #[error("invalid UTF-8 in decoded action: {0}")]
    InvalidUtf8(#[from] FromUtf8Error),

    /// A no-op sentinel appeared while an action was only partially decoded.
    #[error("no-op sentinel found inside an action after {partial_len} bytes")]
    NoOpInsideAction { partial_len: usize },

    /// Diagnostic text may not contain NUL, which terminates the stream.
    #[error("diagnostic text contains a NUL byte at offset {offset}")]
    NulInDiagnosticText { offset: usize },

    /// Encoding followed by decoding did not reproduce the input.
    #[error("{format} round trip did not reproduce the input")]
    RoundTripMismatch { format: &'static str },
}

/// Encodes one byte as a quoted 9-bit symbol.
pub(crate) fn quoted(byte: u8) -> u64 {
    QUOTE_FLAG | u64::from(byte)
}
