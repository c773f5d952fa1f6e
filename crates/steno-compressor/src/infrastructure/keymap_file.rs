//! Keymap file loading.
//!
//! Two formats are accepted, chosen by file extension:
//!
//! - `.json` – a Plover keymap: a list of `[action, [keys...]]` pairs.
//!
//!   ```json
//!   [["S-", ["a", "q"]], ["T-", ["w"]], ["no-op", ["z"]]]
//!   ```
//!
//! - `.toml` – one `[[binding]]` table per action.
//!
//!   ```toml
//!   [[binding]]
//!   action = "S-"
//!   keys = ["a", "q"]
//!   ```
//!
//! Both formats keep binding order, which fixes the keylist order.

use std::path::{Path, PathBuf};

use steno_core::{Binding, Keymap};
use thiserror::Error;
use tracing::debug;

/// Errors raised while reading a keymap file.
#[derive(Debug, Error)]
pub enum KeymapFileError {
    #[error("I/O error reading keymap {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON keymap: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid TOML keymap: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("unsupported keymap file extension for {0} (expected .json or .toml)")]
    UnsupportedExtension(PathBuf),
}

/// A keymap together with the name it is reported under.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedKeymap {
    pub name: String,
    pub keymap: Keymap,
}

/// Parses a Plover JSON keymap.
pub fn parse_json_keymap(content: &str) -> Result<Keymap, KeymapFileError> {
    let pairs: Vec<(String, Vec<String>)> = serde_json::from_str(content)?;
    let bindings = pairs
        .into_iter()
        .map(|(action, keys)| Binding { action, keys })
        .collect();
    Ok(Keymap::new(bindings))
}

/// Parses a TOML keymap made of `[[binding]]` tables.
pub fn parse_toml_keymap(content: &str) -> Result<Keymap, KeymapFileError> {
    Ok(toml::from_str(content)?)
}

/// Loads a keymap file, naming it after the file stem.
///
/// # Errors
///
/// Returns [`KeymapFileError::UnsupportedExtension`] for anything other than
/// `.json` or `.toml`, and I/O or parse errors otherwise.
pub fn load_keymap(path: &Path) -> Result<NamedKeymap, KeymapFileError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    let parse: fn(&str) -> Result<Keymap, KeymapFileError> = match extension.as_deref() {
        Some("json") => parse_json_keymap,
        Some("toml") => parse_toml_keymap,
        _ => return Err(KeymapFileError::UnsupportedExtension(path.to_path_buf())),
    };

    let content = std::fs::read_to_string(path).map_err(|source| KeymapFileError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let keymap = parse(&content)?;

    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    debug!(keymap = %name, keys = keymap.key_count(), "loaded keymap file");

    Ok(NamedKeymap { name, keymap })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
