//! Integration tests for the steno-core keylist codec.
//!
//! These exercise the public API end to end: bit stream, production and
//! diagnostic formats, keymap derivation, reports, and the device seam.

use proptest::prelude::*;
use steno_core::{
    decode_diagnostic, decode_keylist, download_keylist, encode_diagnostic, encode_keylist,
    keymap::samples, upload_keylist, BitReader, BitStreamError, BitWriter, CompressionReport,
    DeviceError, KeylistError, LoopbackDevice, NO_OP_ACTION,
};

/// Encodes a keylist and decodes it with its own length.
fn roundtrip(actions: &[String]) -> Vec<String> {
    let bytes = encode_keylist(actions).expect("encode must succeed");
    decode_keylist(&bytes, actions.len()).expect("decode must succeed")
}

#[test]
fn test_roundtrip_no_op_followed_by_text() {
    let actions = vec![NO_OP_ACTION.to_string(), "KW".to_string()];
    assert_eq!(roundtrip(&actions), actions);
}

#[test]
fn test_roundtrip_hyphenated_action() {
    let actions = vec!["a-b".to_string()];
    assert_eq!(roundtrip(&actions), actions);
}

#[test]
fn test_roundtrip_every_sample_keymap() {
    for (name, keymap) in samples::all() {
        let keylist = keymap.keylist();
        assert_eq!(roundtrip(&keylist), keylist, "{name} keylist must round trip");
    }
}

#[test]
fn test_diagnostic_roundtrip_every_sample_keymap() {
    for (name, keymap) in samples::all() {
        let text = keymap.diagnostic_text();
        let bytes = encode_diagnostic(&text).expect("encode must succeed");
        assert_eq!(decode_diagnostic(&bytes).unwrap(), text, "{name} text must round trip");
    }
}

#[test]
fn test_sample_reports_beat_plain_text() {
    for (name, keymap) in samples::all() {
        let report = CompressionReport::for_keymap(name, &keymap).expect("report must succeed");
        assert!(report.keylist_bytes < report.plain_bytes, "{report}");
    }
}

#[test]
fn test_truncated_sample_buffer_fails_to_decode() {
    // Arrange
    let keylist = samples::english_stenotype_gemini_pr().keylist();
    let bytes = encode_keylist(&keylist).unwrap();

    // Act: drop the last quarter of the buffer
    let truncated = &bytes[..bytes.len() * 3 / 4];
    let result = decode_keylist(truncated, keylist.len());

    // Assert
    assert!(matches!(
        result,
        Err(KeylistError::BitStream(BitStreamError::Exhausted { .. }))
    ));
}

#[test]
fn test_device_roundtrip_and_count_check() {
    let keymap = samples::english_stenotype_keyboard();
    let keylist = keymap.keylist();
    let mut device = LoopbackDevice::new(keymap.key_count());

    upload_keylist(&mut device, &keylist).unwrap();
    assert_eq!(download_keylist(&mut device).unwrap(), keylist);

    let short = &keylist[..keylist.len() - 1];
    assert!(matches!(
        upload_keylist(&mut device, short),
        Err(DeviceError::KeyCountMismatch { .. })
    ));
}

#[test]
fn test_bitstream_mixed_widths_via_public_api() {
    let groups = [(1u64, 1u32), (0, 2), (0x12D, 9), (u64::MAX >> 1, 63), (0xDEAD, 16)];
    let mut writer = BitWriter::new();
    for &(value, width) in &groups {
        writer.push(value, width).unwrap();
    }
    let bytes = writer.finish();
    let mut reader = BitReader::new(&bytes);
    for &(value, width) in &groups {
        assert_eq!(reader.pull(width).unwrap(), value);
    }
}

// ── Properties ────────────────────────────────────────────────────────────────

/// Actions biased towards the steno alphabet, with hyphens and the no-op.
fn action() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(NO_OP_ACTION.to_string()),
        "[-STKPWHRAO*EUFBLGDZ#]{0,6}",
        any::<String>(),
    ]
}

/// Text that may be joined into a diagnostic string (no NUL).
fn diagnostic_text() -> impl Strategy<Value = String> {
    any::<String>().prop_map(|s| s.replace('\0', ""))
}

proptest! {
    #[test]
    fn prop_keylist_roundtrip(actions in prop::collection::vec(action(), 0..64)) {
        let bytes = encode_keylist(&actions).unwrap();
        prop_assert_eq!(decode_keylist(&bytes, actions.len()).unwrap(), actions);
    }

    #[test]
    fn prop_no_op_never_merges(prefix in "[A-Z]{1,4}", suffix in "[A-Z-]{0,4}") {
        let actions = vec![prefix, NO_OP_ACTION.to_string(), suffix];
        let bytes = encode_keylist(&actions).unwrap();
        prop_assert_eq!(decode_keylist(&bytes, 3).unwrap(), actions);
    }

    #[test]
    fn prop_diagnostic_roundtrip(text in diagnostic_text()) {
        let bytes = encode_diagnostic(&text).unwrap();
        prop_assert_eq!(decode_diagnostic(&bytes).unwrap(), text);
    }
}
