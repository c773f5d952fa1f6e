//! # steno-core
//!
//! Compression of stenography keymaps for keyboards that store their keymap
//! in firmware.
//!
//! A steno keyboard assigns an *action* (a short label such as `"S-"`, `"*"`
//! or `"no-op"`) to every physical key.  This crate turns that ordered list
//! of actions into a compact byte buffer and back again.
//!
//! # Architecture overview
//!
//! - **`bitstream`** – a writer that packs bit groups of 1 to 64 bits into
//!   bytes (MSB first) and a reader that replays them.
//!
//! - **`keylist`** – the compression format built on the bit stream: short
//!   escape symbols for `-` and end-of-action, 9-bit quoted bytes for
//!   everything else, and a single sentinel for the `no-op` action.  A
//!   self-terminating diagnostic variant is used to compare encodings.
//!
//! - **`keymap`** – ordered action-to-keys bindings, the keylist derived from
//!   them, built-in sample layouts, and compression reports.
//!
//! - **`device`** – the seam to a physical keyboard: a trait for something
//!   that stores a keylist buffer, plus upload and download helpers.
//!
//! Every encode and decode call is a pure function of its inputs; the crate
//! holds no global state and performs no I/O.

pub mod bitstream;
pub mod device;
pub mod keylist;
pub mod keymap;

pub use bitstream::{BitReader, BitStreamError, BitWriter};
pub use device::{download_keylist, upload_keylist, DeviceError, KeymapDevice, LoopbackDevice};
pub use keylist::{
    decode_diagnostic, decode_keylist, encode_diagnostic, encode_keylist, KeylistError,
    NO_OP_ACTION,
};
pub use keymap::{Binding, CompressionReport, Keymap};
