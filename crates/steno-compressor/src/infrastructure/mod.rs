//! Infrastructure layer: everything that touches the file system.
//!
//! - `storage`     – TOML tool configuration.
//! - `keymap_file` – reading keymaps from JSON and TOML files.

pub mod keymap_file;
pub mod storage;
