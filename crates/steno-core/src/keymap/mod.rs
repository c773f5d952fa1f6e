//! Stenography keymaps: ordered bindings from an action to the physical keys
//! that produce it.
//!
//! A keyboard stores its keymap as a *keylist*: one action per physical key,
//! in binding order.  An action bound to three keys therefore appears three
//! times in a row.  [`Keymap::keylist`] builds that list, and
//! [`Keymap::diagnostic_text`] builds the equivalent semicolon-joined string
//! used by the diagnostic format.

pub mod report;
pub mod samples;

pub use report::CompressionReport;

use serde::{Deserialize, Serialize};

/// One action together with the keys bound to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Binding {
    /// Action label, e.g. `"S-"`, `"*"` or `"no-op"`.
    pub action: String,
    /// Physical key names in the order they appear on the device.
    #[serde(default)]
    pub keys: Vec<String>,
}

impl Binding {
    /// Creates a binding from an action and its keys.
    pub fn new<A, K, I>(action: A, keys: I) -> Self
    where
        A: Into<String>,
        K: Into<String>,
        I: IntoIterator<Item = K>,
    {
        Self {
            action: action.into(),
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }
}

/// An ordered keymap.
///
/// Binding order is significant: it fixes the order of the keylist and so
/// the layout of the compressed buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keymap {
    #[serde(rename = "binding", default)]
    bindings: Vec<Binding>,
}

impl Keymap {
    /// Creates a keymap from bindings, keeping their order.
    pub fn new(bindings: Vec<Binding>) -> Self {
        Self { bindings }
    }

    /// All bindings in order.
    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    /// Number of physical keys, i.e. the length of [`Keymap::keylist`].
    ///
    /// This is the entry count a decoder needs for the production format.
    pub fn key_count(&self) -> usize {
        self.bindings.iter().map(|b| b.keys.len()).sum()
    }

    /// Returns one action per bound key, in binding order.
    pub fn keylist(&self) -> Vec<String> {
        self.bindings
            .iter()
            .flat_map(|b| std::iter::repeat(b.action.clone()).take(b.keys.len()))
            .collect()
    }

    /// Returns the keylist joined with `;`, with a trailing `;`.
    pub fn diagnostic_text(&self) -> String {
        let mut text = String::new();
        for action in self.keylist() {
            text.push_str(&action);
            text.push(';');
        }
        text
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn small_keymap() -> Keymap {
        Keymap::new(vec![
            Binding::new("S-", ["a", "q"]),
            Binding::new("T-", ["w"]),
            Binding::new("unused", Vec::<String>::new()),
            Binding::new("no-op", ["z"]),
        ])
    }

    #[test]
    fn test_keylist_repeats_action_per_key() {
        // Arrange
        let keymap = small_keymap();

        // Act
        let keylist = keymap.keylist();

        // Assert
        assert_eq!(keylist, vec!["S-", "S-", "T-", "no-op"]);
    }

    #[test]
    fn test_key_count_matches_keylist_length() {
        let keymap = small_keymap();
        assert_eq!(keymap.key_count(), 4);
        assert_eq!(keymap.key_count(), keymap.keylist().len());
    }

    #[test]
    fn test_diagnostic_text_has_trailing_separator() {
        let keymap = small_keymap();
        assert_eq!(keymap.diagnostic_text(), "S-;S-;T-;no-op;");
    }

    #[test]
    fn test_empty_keymap() {
        let keymap = Keymap::default();
        assert!(keymap.keylist().is_empty());
        assert_eq!(keymap.diagnostic_text(), "");
        assert_eq!(keymap.key_count(), 0);
    }
}
