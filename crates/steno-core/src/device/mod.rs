//! Keyboard device seam.
//!
//! The keyboard firmware stores its keymap as a production-format keylist
//! buffer.  Finding the device and talking to it (USB enumeration, HID
//! reports) belongs to platform code outside this crate; the codec only needs
//! something that knows the device's key count and can move a buffer in and
//! out.  [`KeymapDevice`] is that something.
//!
//! # Testability
//!
//! [`loopback::LoopbackDevice`] keeps the buffer in memory, and the trait is
//! mockable with `mockall` in unit tests.

pub mod loopback;

pub use loopback::LoopbackDevice;

use thiserror::Error;
use tracing::{debug, info};

use crate::keylist::{decode_keylist, encode_keylist, KeylistError};

/// Error type for device transfers.
#[derive(Debug, Error)]
pub enum DeviceError {
    /// The keylist does not have exactly one action per device key.
    #[error("keylist has {actual} entries but the device has {expected} keys")]
    KeyCountMismatch { expected: usize, actual: usize },

    /// The device has not stored a keymap yet.
    #[error("device holds no keymap buffer")]
    NoBuffer,

    /// Encoding or decoding the keylist failed.
    #[error(transparent)]
    Keylist(#[from] KeylistError),

    /// The transport to the device failed.
    #[error("device I/O error: {0}")]
    Io(String),
}

/// A keyboard that stores a compressed keylist.
#[cfg_attr(test, mockall::automock)]
pub trait KeymapDevice {
    /// Number of physical keys, i.e. keylist entries the device expects.
    fn key_count(&self) -> usize;
    /// Reads the stored production-format buffer.
    fn read_buffer(&mut self) -> Result<Vec<u8>, DeviceError>;
    /// Replaces the stored buffer.
    fn write_buffer(&mut self, buffer: &[u8]) -> Result<(), DeviceError>;
}

/// Compresses `actions` and stores them on `device`.
///
/// Returns the number of bytes written.
///
/// # Errors
///
/// Returns [`DeviceError::KeyCountMismatch`] when `actions.len()` differs
/// from the device's key count.  The production format cannot detect a
/// wrong count when decoding, so it is checked here before anything is sent.
pub fn upload_keylist<D, S>(device: &mut D, actions: &[S]) -> Result<usize, DeviceError>
where
    D: KeymapDevice + ?Sized,
    S: AsRef<str>,
{
    let expected = device.key_count();
    if actions.len() != expected {
        return Err(DeviceError::KeyCountMismatch {
            expected,
            actual: actions.len(),
        });
    }

    let buffer = encode_keylist(actions)?;
    device.write_buffer(&buffer)?;
    info!(entries = expected, bytes = buffer.len(), "uploaded keylist");
    Ok(buffer.len())
}

/// Reads the stored buffer from `device` and decodes one action per key.
///
/// # Errors
///
/// Propagates transport errors and [`DeviceError::Keylist`] for corrupt
/// buffers.
pub fn download_keylist<D>(device: &mut D) -> Result<Vec<String>, DeviceError>
where
    D: KeymapDevice + ?Sized,
{
    let count = device.key_count();
    let buffer = device.read_buffer()?;
    debug!(entries = count, bytes = buffer.len(), "downloading keylist");
    Ok(decode_keylist(&buffer, count)?)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_writes_encoded_buffer() {
        // Arrange
        let expected = encode_keylist(&["S-", "no-op"]).unwrap();
        let wanted = expected.clone();
        let mut device = MockKeymapDevice::new();
        device.expect_key_count().return_const(2usize);
        device
            .expect_write_buffer()
            .withf(move |buffer| buffer == wanted.as_slice())
            .times(1)
            .returning(|_| Ok(()));

        // Act
        let written = upload_keylist(&mut device, &["S-", "no-op"]).unwrap();

        // Assert
        assert_eq!(written, expected.len());
    }

    #[test]
    fn test_upload_rejects_wrong_entry_count() {
        let mut device = MockKeymapDevice::new();
        device.expect_key_count().return_const(3usize);
        device.expect_write_buffer().never();

        let result = upload_keylist(&mut device, &["S-"]);

        assert!(matches!(
            result,
            Err(DeviceError::KeyCountMismatch { expected: 3, actual: 1 })
        ));
    }

    #[test]
    fn test_download_decodes_with_device_key_count() {
        let buffer = encode_keylist(&["A-", "O-", "no-op"]).unwrap();
        let mut device = MockKeymapDevice::new();
        device.expect_key_count().return_const(3usize);
        device
            .expect_read_buffer()
            .times(1)
            .returning(move || Ok(buffer.clone()));

        let actions = download_keylist(&mut device).unwrap();

        assert_eq!(actions, vec!["A-", "O-", "no-op"]);
    }

    #[test]
    fn test_download_propagates_transport_error() {
        let mut device = MockKeymapDevice::new();
        device.expect_key_count().return_const(1usize);
        device
            .expect_read_buffer()
            .returning(|| Err(DeviceError::Io("unplugged".to_string())));

        let result = download_keylist(&mut device);

        assert!(matches!(result, Err(DeviceError::Io(msg)) if msg == "unplugged"));
    }

    #[test]
    fn test_download_of_truncated_buffer_is_keylist_error() {
        let mut device = MockKeymapDevice::new();
        device.expect_key_count().return_const(5usize);
        device.expect_read_buffer().returning(|| Ok(vec![0b1010_1001]));

        let result = download_keylist(&mut device);

        assert!(matches!(result, Err(DeviceError::Keylist(_))));
    }
}
