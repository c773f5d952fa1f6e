//! Application layer use cases for the compressor tool.
//!
//! Use cases in this layer orchestrate `steno-core` to fulfil one command and
//! contain no file system access; `main.rs` reads inputs through the
//! infrastructure layer and hands plain values in.
//!
//! # Sub-modules
//!
//! - **`report`**   – Compression reports for one or more keymaps, rendered
//!   as text or JSON.
//!
//! - **`transfer`** – Encoding a keymap into a production buffer (optionally
//!   verified through a loopback device) and decoding a buffer back into an
//!   action list.

pub mod report;
pub mod transfer;
