//! The key catalog: human-readable key names to numeric key codes.
//!
//! The catalog is a host-side validation surface. Before wiring a configured
//! shortcut into a menu, a host can check that every part of it names a real
//! key via [`lookup`] or [`is_realizable`]. It is *not* consulted during
//! event dispatch, which works directly from physical key identifiers.
//!
//! Names are matched case-insensitively. Letter and digit entries are
//! derived arithmetically from base codes rather than enumerated, which
//! guarantees the alphanumeric range is complete and ordered.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::combo::ShortcutId;

/// Key code of the letter `a`.
const LETTER_A_CODE: u32 = 65;

/// Key code of the digit `9`; lower digits count down from here.
const DIGIT_NINE_CODE: u32 = 57;

/// Named keys with their codes.
///
/// Several keys carry more than one name: the short legacy names (`esc`,
/// `left`) and the physical-identifier names the combo resolver produces
/// (`escape`, `arrowleft`) both resolve, so shortcut strings written either
/// way validate.
const NAMED_KEYS: &[(&str, u32)] = &[
    // Modifiers
    ("shift", 16),
    ("control", 17),
    ("ctrl", 17),
    ("alt", 18),
    ("capslock", 20),
    ("meta", 91),
    ("cmd", 91),
    ("cmdff", 224),
    // Editing
    ("backspace", 8),
    ("tab", 9),
    ("enter", 13),
    ("return", 13),
    ("esc", 27),
    ("escape", 27),
    ("space", 32),
    ("insert", 45),
    ("delete", 46),
    // Navigation
    ("pageup", 33),
    ("pagedown", 34),
    ("end", 35),
    ("home", 36),
    ("left", 37),
    ("arrowleft", 37),
    ("up", 38),
    ("arrowup", 38),
    ("right", 39),
    ("arrowright", 39),
    ("down", 40),
    ("arrowdown", 40),
    // Locks
    ("numlock", 144),
    // Function keys
    ("f1", 112),
    ("f2", 113),
    ("f3", 114),
    ("f4", 115),
    ("f5", 116),
    ("f6", 117),
    ("f7", 118),
    ("f8", 119),
    ("f9", 120),
    ("f10", 121),
    ("f11", 122),
    ("f12", 123),
    // Punctuation
    ("`", 192),
    ("backquote", 192),
    ("=", 187),
    ("equal", 187),
    ("-", 189),
    ("minus", 189),
    ("/", 191),
    ("slash", 191),
    (".", 190),
    ("period", 190),
];

fn catalog() -> &'static HashMap<String, u32> {
    static CATALOG: OnceLock<HashMap<String, u32>> = OnceLock::new();
    CATALOG.get_or_init(|| {
        let mut map = HashMap::new();

        for (name, code) in NAMED_KEYS {
            let _ = map.insert((*name).to_string(), *code);
        }

        // Letters a-z, derived from the code of 'a'.
        for letter in 'a'..='z' {
            let code = LETTER_A_CODE + (letter as u32 - 'a' as u32);
            let _ = map.insert(letter.to_string(), code);
        }

        // Digits 0-9, derived from the code of '9'.
        for digit in 0..=9u32 {
            let code = DIGIT_NINE_CODE + digit - 9;
            let _ = map.insert(digit.to_string(), code);
        }

        map
    })
}

/// Look up a key name, case-insensitively.
///
/// Returns `None` for unrecognized names; an unknown name is a lookup miss,
/// never an error.
pub fn lookup(name: &str) -> Option<u32> {
    catalog().get(&name.to_ascii_lowercase()).copied()
}

/// Check whether a shortcut id only names keys the catalog knows.
///
/// Every `+`-separated part of the id must look up; a single unknown part
/// makes the whole shortcut unrealizable.
pub fn is_realizable(id: &ShortcutId) -> bool {
    id.parts().all(|part| lookup(part).is_some())
}

/// Check whether a code belongs to one of the four arrow keys.
pub fn is_direction(code: u32) -> bool {
    (37..=40).contains(&code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_complete_and_ordered() {
        let mut previous = None;
        for letter in 'a'..='z' {
            let code = lookup(&letter.to_string()).expect("letter missing from catalog");
            if let Some(prev) = previous {
                assert!(code > prev, "letter codes must increase with order");
            }
            previous = Some(code);
        }
        assert_eq!(lookup("a"), Some(65));
        assert_eq!(lookup("z"), Some(90));
    }

    #[test]
    fn test_digits_complete_and_ordered() {
        let mut previous = None;
        for digit in 0..=9u32 {
            let code = lookup(&digit.to_string()).expect("digit missing from catalog");
            if let Some(prev) = previous {
                assert!(code > prev, "digit codes must increase with order");
            }
            previous = Some(code);
        }
        assert_eq!(lookup("0"), Some(48));
        assert_eq!(lookup("9"), Some(57));
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(lookup("Esc"), lookup("esc"));
        assert_eq!(lookup("ENTER"), Some(13));
        assert_eq!(lookup("PageUp"), Some(33));
        assert_eq!(lookup("A"), Some(65));
    }

    #[test]
    fn test_function_keys() {
        for (i, code) in (112u32..=123).enumerate() {
            assert_eq!(lookup(&format!("f{}", i + 1)), Some(code));
        }
    }

    #[test]
    fn test_physical_name_aliases() {
        assert_eq!(lookup("escape"), lookup("esc"));
        assert_eq!(lookup("arrowleft"), lookup("left"));
        assert_eq!(lookup("backquote"), lookup("`"));
        assert_eq!(lookup("minus"), lookup("-"));
    }

    #[test]
    fn test_unknown_name_is_miss() {
        assert_eq!(lookup("bogus"), None);
        assert_eq!(lookup(""), None);
    }

    #[test]
    fn test_is_realizable() {
        assert!(is_realizable(&ShortcutId::from("ctrl+s")));
        assert!(is_realizable(&ShortcutId::from("alt+1")));
        assert!(is_realizable(&ShortcutId::from("escape")));
        assert!(is_realizable(&ShortcutId::from("Ctrl+S")));
        assert!(!is_realizable(&ShortcutId::from("bogus+x")));
        assert!(!is_realizable(&ShortcutId::from("ctrl+bogus")));
    }

    #[test]
    fn test_direction_group() {
        for code in 37..=40 {
            assert!(is_direction(code));
        }
        assert!(!is_direction(36));
        assert!(!is_direction(41));
    }
}
