//! Compression statistics for a keymap.

use std::fmt;

use serde::Serialize;
use tracing::{debug, warn};

use super::Keymap;
use crate::keylist::{
    decode_diagnostic, decode_keylist, encode_diagnostic, encode_keylist, KeylistError,
};

/// Sizes of one keymap in the plain, diagnostic, and production encodings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompressionReport {
    /// Display name of the keymap.
    pub name: String,
    /// Number of keylist entries (physical keys).
    pub entries: usize,
    /// UTF-8 length of the semicolon-joined keylist.
    pub plain_bytes: usize,
    /// Length of the production-format buffer.
    pub keylist_bytes: usize,
    /// Length of the diagnostic-format buffer.
    pub diagnostic_bytes: usize,
}

impl CompressionReport {
    /// Encodes `keymap` in both formats, checks that each decodes back to
    /// its input, and records the sizes.
    ///
    /// # Errors
    ///
    /// Propagates codec errors and returns
    /// [`KeylistError::RoundTripMismatch`] if a round trip loses data.
    pub fn for_keymap(name: &str, keymap: &Keymap) -> Result<Self, KeylistError> {
        let keylist = keymap.keylist();
        let text = keymap.diagnostic_text();

        let keylist_buf = encode_keylist(&keylist)?;
        if decode_keylist(&keylist_buf, keylist.len())? != keylist {
            return Err(KeylistError::RoundTripMismatch { format: "keylist" });
        }

        let diagnostic_buf = encode_diagnostic(&text)?;
        if decode_diagnostic(&diagnostic_buf)? != text {
            return Err(KeylistError::RoundTripMismatch { format: "diagnostic" });
        }

        let report = Self {
            name: name.to_string(),
            entries: keylist.len(),
            plain_bytes: text.len(),
            keylist_bytes: keylist_buf.len(),
            diagnostic_bytes: diagnostic_buf.len(),
        };

        if !report.is_smaller_than_plain() && report.entries > 0 {
            warn!(
                keymap = name,
                keylist_bytes = report.keylist_bytes,
                plain_bytes = report.plain_bytes,
                "compressed keylist is not smaller than plain text"
            );
        }
        debug!(keymap = name, ratio = report.ratio(), "built compression report");
        Ok(report)
    }

    /// Production size divided by plain size; `0.0` for an empty keymap.
    pub fn ratio(&self) -> f64 {
        if self.plain_bytes == 0 {
            0.0
        } else {
            self.keylist_bytes as f64 / self.plain_bytes as f64
        }
    }

    /// Whether the production buffer is strictly shorter than the plain text.
    pub fn is_smaller_than_plain(&self) -> bool {
        self.keylist_bytes < self.plain_bytes
    }
}

impl fmt::Display for CompressionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:10}: {:4} bytes ({:4} uncompressed, ratio: {:5.4})",
            self.name,
            self.keylist_bytes,
            self.plain_bytes,
            self.ratio()
        )
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
