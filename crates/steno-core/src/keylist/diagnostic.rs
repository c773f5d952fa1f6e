//! Self-terminating diagnostic format.
//!
//! Encodes one semicolon-joined string with the same alphabet as the
//! production format, `;` taking the place of end-of-action, and a quoted
//! zero byte as the stream terminator.  It is used to compare the production
//! encoding against an equivalent delimited encoding of the same keymap.

use tracing::debug;

use super::{
    quoted, KeylistError, ESCAPE_WIDTH, HYPHEN, HYPHEN_BITS, QUOTED_WIDTH, SEPARATOR,
};
use crate::bitstream::{BitReader, BitWriter};

const SEPARATOR_BITS: u64 = 0b00;
const TERMINATOR: u8 = 0;

/// Encodes `text` into the diagnostic format.
///
/// # Errors
///
/// Returns [`KeylistError::NulInDiagnosticText`] if `text` contains a NUL
/// byte, which would be read back as the terminator.
pub fn encode_diagnostic(text: &str) -> Result<Vec<u8>, KeylistError> {
    if let Some(offset) = text.bytes().position(|b| b == TERMINATOR) {
        return Err(KeylistError::NulInDiagnosticText { offset });
    }

    let mut writer = BitWriter::new();
    for byte in text.bytes() {
        match byte {
            SEPARATOR => writer.push(SEPARATOR_BITS, ESCAPE_WIDTH)?,
            HYPHEN => writer.push(HYPHEN_BITS, ESCAPE_WIDTH)?,
            other => writer.push(quoted(other), QUOTED_WIDTH)?,
        }
    }
    writer.push(quoted(TERMINATOR), QUOTED_WIDTH)?;

    let bytes = writer.finish();
    debug!(text_len = text.len(), bytes = bytes.len(), "encoded diagnostic string");
    Ok(bytes)
}

/// Decodes a diagnostic-format buffer up to its terminator.
///
/// # Errors
///
/// Returns [`KeylistError::BitStream`] if the terminator is missing and
/// [`KeylistError::InvalidUtf8`] if the decoded bytes are not UTF-8.
pub fn decode_diagnostic(bytes: &[u8]) -> Result<String, KeylistError> {
    let mut reader = BitReader::new(bytes);
    let mut out = Vec::new();

    loop {
        if reader.pull(1)? == 0 {
            let symbol = if reader.pull(1)? == 0 { SEPARATOR } else { HYPHEN };
            out.push(symbol);
        } else {
            let byte = reader.pull(8)? as u8;
            if byte == TERMINATOR {
                break;
            }
            out.push(byte);
        }
    }

    let text = String::from_utf8(out)?;
    debug!(bytes = bytes.len(), text_len = text.len(), "decoded diagnostic string");
    Ok(text)
}
