// Ergoswe Keycode Type
// Represents a physical key by its USB HID keyboard usage id

use std::fmt;
use std::str::FromStr;

include!(concat!(env!("OUT_DIR"), "/keycodes.rs"));

/// Display name for a usage id
pub fn keycode_name(code: u8) -> &'static str {
    KEYCODE_NAMES
        .iter()
        .find(|(_, c)| *c == code)
        .map(|(name, _)| *name)
        .unwrap_or("KC_UNKNOWN")
}

/// Try to parse a keycode name
///
/// Accepts canonical firmware names (`KC_BSPC`), long aliases
/// (`KC_BACKSPACE`) and names without the `KC_` prefix, in any case.
pub fn keycode_from_name(name: &str) -> Option<Keycode> {
    let upper = name.trim().to_uppercase();
    let prefixed = if upper.starts_with("KC_") {
        upper
    } else {
        format!("KC_{}", upper)
    };

    KEYCODE_NAMES
        .iter()
        .chain(KEYCODE_ALIASES.iter())
        .find(|(n, _)| *n == prefixed)
        .map(|(_, code)| Keycode(*code))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keycode_from_name() {
        assert_eq!(keycode_from_name("KC_A"), Some(KC_A));
        assert_eq!(keycode_from_name("a"), Some(KC_A));
        assert_eq!(keycode_from_name("kc_enter"), Some(KC_ENT));
        assert_eq!(keycode_from_name("BSPC"), Some(KC_BSPC));
        assert_eq!(keycode_from_name("KC_1"), Some(Keycode(0x1E)));
        assert_eq!(keycode_from_name("KC_NOPE"), None);
    }

    #[test]
    fn test_keycode_display() {
        assert_eq!(KC_A.to_string(), "KC_A");
        assert_eq!(Keycode(0x64).to_string(), "KC_NUBS");
        assert_eq!(Keycode(0x99).to_string(), "KC_UNKNOWN");
    }

    #[test]
    fn test_keycode_from_str() {
        assert_eq!("KC_SPACE".parse::<Keycode>(), Ok(KC_SPC));
        assert!("nothing".parse::<Keycode>().is_err());
    }

    #[test]
    fn test_sentinel_and_modifiers() {
        assert!(Keycode::NO.is_no());
        assert!(!KC_A.is_no());
        assert!(KC_LSFT.is_modifier());
        assert!(KC_RALT.is_modifier());
        assert!(!KC_Z.is_modifier());
    }

    #[test]
    fn test_keycode_ordering() {
        assert!(KC_A < KC_B);
        assert_eq!(u8::from(KC_Z), 0x1D);
    }
}
