//! Production keylist format.
//!
//! ```text
//! ["S-", "no-op", "-E"]
//!
//! 1 01010011 | 01 | 00 | 1 00101101 | 01 | 1 01000101 | 00
//!   'S'        '-'  end   no-op        '-'   'E'        end
//! ```

use tracing::debug;

use super::{
    quoted, KeylistError, END_OF_ACTION_BITS, ESCAPE_WIDTH, HYPHEN, HYPHEN_BITS, NO_OP_ACTION,
    QUOTED_WIDTH,
};
use crate::bitstream::{BitReader, BitWriter};

/// Encodes an ordered action list into the production format.
///
/// The returned buffer does not record how many actions it holds; pass
/// `actions.len()` to [`decode_keylist`] out of band.
///
/// # Errors
///
/// Returns [`KeylistError::BitStream`] only if a symbol violates the bit
/// writer's width contract, which the fixed alphabet never does.
///
/// # Examples
///
/// ```rust
/// use steno_core::keylist::{decode_keylist, encode_keylist};
///
/// let actions = ["S-", "no-op", "-E"];
/// let bytes = encode_keylist(&actions).unwrap();
/// assert_eq!(decode_keylist(&bytes, actions.len()).unwrap(), actions);
/// ```
pub fn encode_keylist<S: AsRef<str>>(actions: &[S]) -> Result<Vec<u8>, KeylistError> {
    let mut writer = BitWriter::new();

    for action in actions {
        let action = action.as_ref();

        if action == NO_OP_ACTION {
            // Standalone sentinel, no end marker.
            writer.push(quoted(HYPHEN), QUOTED_WIDTH)?;
            continue;
        }

        for &byte in action.as_bytes() {
            if byte == HYPHEN {
                writer.push(HYPHEN_BITS, ESCAPE_WIDTH)?;
            } else {
                writer.push(quoted(byte), QUOTED_WIDTH)?;
            }
        }
        writer.push(END_OF_ACTION_BITS, ESCAPE_WIDTH)?;
    }

    let bytes = writer.finish();
    debug!(
        actions = actions.len(),
        bits = writer.bit_len(),
        bytes = bytes.len(),
        "encoded keylist"
    );
    Ok(bytes)
}

/// Decodes exactly `count` actions from a production-format buffer.
///
/// Trailing bits after the last requested action are ignored.
///
/// # Errors
///
/// - [`KeylistError::BitStream`] if the buffer ends before `count` actions
///   were read (truncated buffer or wrong count).
/// - [`KeylistError::NoOpInsideAction`] if the no-op sentinel appears while
///   an action is only partially assembled.
/// - [`KeylistError::InvalidUtf8`] if an action's bytes are not UTF-8.
pub fn decode_keylist(bytes: &[u8], count: usize) -> Result<Vec<String>, KeylistError> {
    let mut reader = BitReader::new(bytes);
    // Every entry takes at least two bits, pad byte included.
    let max_entries = (bytes.len() + 1).saturating_mul(4);
    let mut actions = Vec::with_capacity(count.min(max_entries));
    let mut current: Vec<u8> = Vec::new();

    while actions.len() < count {
        let is_quoted = reader.pull(1)? == 1;

        if is_quoted {
            let byte = reader.pull(8)? as u8;
            if byte == HYPHEN {
                if !current.is_empty() {
                    return Err(KeylistError::NoOpInsideAction {
                        partial_len: current.len(),
                    });
                }
                actions.push(NO_OP_ACTION.to_string());
            } else {
                current.push(byte);
            }
        } else if reader.pull(1)? == 0 {
            let action = String::from_utf8(std::mem::take(&mut current))?;
            actions.push(action);
        } else {
            current.push(HYPHEN);
        }
    }

    debug!(actions = actions.len(), bytes = bytes.len(), "decoded keylist");
    Ok(actions)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
