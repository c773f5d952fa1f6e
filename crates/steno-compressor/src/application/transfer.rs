//! Encode and decode use cases.
//!
//! Both directions go through a [`KeymapDevice`] so the tool exercises the
//! same upload and download path a keyboard transport would.  Without real
//! hardware the device is a [`LoopbackDevice`].

use steno_core::{
    download_keylist, upload_keylist, DeviceError, KeylistError, Keymap, KeymapDevice,
    LoopbackDevice,
};
use tracing::{info, warn};

/// Result of encoding a keymap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedKeymap {
    /// Number of entries; the decoder must be given this count.
    pub entries: usize,
    /// Production-format buffer.
    pub buffer: Vec<u8>,
}

/// Encodes `keymap` into a production buffer.
///
/// With `verify` set the buffer is read back and decoded before it is
/// returned.
///
/// # Errors
///
/// Returns [`DeviceError::Keylist`] for codec failures, including a
/// round-trip mismatch found while verifying.
pub fn encode_keymap(keymap: &Keymap, verify: bool) -> Result<EncodedKeymap, DeviceError> {
    let keylist = keymap.keylist();
    let mut device = LoopbackDevice::new(keylist.len());
    upload_keylist(&mut device, &keylist)?;

    if verify {
        let restored = download_keylist(&mut device)?;
        if restored != keylist {
            warn!(entries = keylist.len(), "verification of encoded keymap failed");
            return Err(KeylistError::RoundTripMismatch { format: "keylist" }.into());
        }
    }

    let buffer = device.read_buffer()?;
    info!(entries = keylist.len(), bytes = buffer.len(), verified = verify, "encoded keymap");
    Ok(EncodedKeymap {
        entries: keylist.len(),
        buffer,
    })
}

/// Decodes `count` actions from a production buffer.
///
/// # Errors
///
/// Returns [`DeviceError::Keylist`] if the buffer is truncated, corrupt, or
/// shorter than `count` entries.
pub fn decode_buffer(buffer: Vec<u8>, count: usize) -> Result<Vec<String>, DeviceError> {
    let mut device = LoopbackDevice::with_buffer(count, buffer);
    download_keylist(&mut device)
}
