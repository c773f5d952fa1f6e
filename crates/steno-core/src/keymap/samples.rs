//! Built-in English Stenotype keymaps.
//!
//! These mirror the stock layouts shipped for common steno machines and are
//! used as fixtures and as the default input of the compressor tool.

use super::{Binding, Keymap};

/// Returns every built-in keymap together with its name.
pub fn all() -> Vec<(&'static str, Keymap)> {
    vec![
        ("Keyboard", english_stenotype_keyboard()),
        ("Gemini PR", english_stenotype_gemini_pr()),
        ("Passport", english_stenotype_passport()),
        ("TX Bolt", english_stenotype_tx_bolt()),
    ]
}

/// Looks up a built-in keymap by name, ignoring ASCII case.
pub fn by_name(name: &str) -> Option<Keymap> {
    all()
        .into_iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|(_, keymap)| keymap)
}

/// English Stenotype on a QWERTY keyboard.
pub fn english_stenotype_keyboard() -> Keymap {
    Keymap::new(vec![
        Binding::new("#", ["1", "2", "3", "4", "5", "6", "7", "8", "9", "0", "-", "="]),
        Binding::new("S-", ["a", "q"]),
        Binding::new("T-", ["w"]),
        Binding::new("K-", ["s"]),
        Binding::new("P-", ["e"]),
        Binding::new("W-", ["d"]),
        Binding::new("H-", ["r"]),
        Binding::new("R-", ["f"]),
        Binding::new("A-", ["c"]),
        Binding::new("O-", ["v"]),
        Binding::new("*", ["t", "y", "g", "h"]),
        Binding::new("-E", ["n"]),
        Binding::new("-U", ["m"]),
        Binding::new("-F", ["u"]),
        Binding::new("-R", ["j"]),
        Binding::new("-P", ["i"]),
        Binding::new("-B", ["k"]),
        Binding::new("-L", ["o"]),
        Binding::new("-G", ["l"]),
        Binding::new("-T", ["p"]),
        Binding::new("-S", [";"]),
        Binding::new("-D", ["["]),
        Binding::new("-Z", ["'"]),
        Binding::new("arpeggiate", ["space"]),
        Binding::new("no-op", ["z", "x", "b", ",", ".", "/", "]", "\\"]),
    ])
}

/// English Stenotype on a Gemini PR protocol machine.
pub fn english_stenotype_gemini_pr() -> Keymap {
    Keymap::new(vec![
        Binding::new(
            "#",
            ["#1", "#2", "#3", "#4", "#5", "#6", "#7", "#8", "#9", "#A", "#B", "#C"],
        ),
        Binding::new("S-", ["S1-", "S2-"]),
        Binding::new("T-", ["T-"]),
        Binding::new("K-", ["K-"]),
        Binding::new("P-", ["P-"]),
        Binding::new("W-", ["W-"]),
        Binding::new("H-", ["H-"]),
        Binding::new("R-", ["R-"]),
        Binding::new("A-", ["A-"]),
        Binding::new("O-", ["O-"]),
        Binding::new("*", ["*1", "*2", "*3", "*4"]),
        Binding::new("-E", ["-E"]),
        Binding::new("-U", ["-U"]),
        Binding::new("-F", ["-F"]),
        Binding::new("-R", ["-R"]),
        Binding::new("-P", ["-P"]),
        Binding::new("-B", ["-B"]),
        Binding::new("-L", ["-L"]),
        Binding::new("-G", ["-G"]),
        Binding::new("-T", ["-T"]),
        Binding::new("-S", ["-S"]),
        Binding::new("-D", ["-D"]),
        Binding::new("-Z", ["-Z"]),
        Binding::new("no-op", ["Fn", "pwr", "res1", "res2"]),
    ])
}

/// English Stenotype on an Advantage Passport.
pub fn english_stenotype_passport() -> Keymap {
    Keymap::new(vec![
        Binding::new("#", ["#"]),
        Binding::new("S-", ["S"]),
        Binding::new("T-", ["T"]),
        Binding::new("K-", ["C"]),
        Binding::new("P-", ["P"]),
        Binding::new("W-", ["W"]),
        Binding::new("H-", ["H"]),
        Binding::new("R-", ["R"]),
        Binding::new("A-", ["A"]),
        Binding::new("O-", ["O"]),
        Binding::new("*", ["~", "*"]),
        Binding::new("-E", ["E"]),
        Binding::new("-U", ["U"]),
        Binding::new("-F", ["F"]),
        Binding::new("-R", ["Q"]),
        Binding::new("-P", ["N"]),
        Binding::new("-B", ["B"]),
        Binding::new("-L", ["L"]),
        Binding::new("-G", ["G"]),
        Binding::new("-T", ["Y"]),
        Binding::new("-S", ["X"]),
        Binding::new("-D", ["D"]),
        Binding::new("-Z", ["Z"]),
        Binding::new("no-op", ["!", "^", "+"]),
    ])
}

/// English Stenotype on a TX Bolt protocol machine.
///
/// Every key maps to the action of the same name; there are no spare keys.
pub fn english_stenotype_tx_bolt() -> Keymap {
    const STENO_KEYS: [&str; 23] = [
        "#", "S-", "T-", "K-", "P-", "W-", "H-", "R-", "A-", "O-", "*", "-E", "-U", "-F", "-R",
        "-P", "-B", "-L", "-G", "-T", "-S", "-D", "-Z",
    ];
    Keymap::new(
        STENO_KEYS
            .iter()
            .map(|key| Binding::new(*key, [*key]))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyboard_layout_key_count() {
        // number bar, S, left bank, stars, right bank, arpeggiate, no-op
        assert_eq!(english_stenotype_keyboard().key_count(), 12 + 2 + 8 + 4 + 12 + 1 + 8);
    }

    #[test]
    fn test_gemini_layout_key_count() {
        assert_eq!(english_stenotype_gemini_pr().key_count(), 12 + 2 + 8 + 4 + 12 + 4);
    }

    #[test]
    fn test_passport_layout_key_count() {
        assert_eq!(english_stenotype_passport().key_count(), 1 + 1 + 8 + 2 + 12 + 3);
    }

    #[test]
    fn test_tx_bolt_layout_has_one_key_per_action() {
        let keymap = english_stenotype_tx_bolt();
        assert_eq!(keymap.key_count(), 23);
        assert_eq!(keymap.bindings().len(), 23);
        assert!(!keymap.keylist().iter().any(|action| action == "no-op"));
    }

    #[test]
    fn test_all_names_resolve() {
        for (name, keymap) in all() {
            assert_eq!(by_name(name), Some(keymap), "{name}");
        }
    }

    #[test]
    fn test_by_name_is_case_insensitive() {
        assert!(by_name("keyboard").is_some());
        assert!(by_name("GEMINI PR").is_some());
        assert!(by_name("tx bolt").is_some());
        assert!(by_name("Stentura").is_none());
    }
}
