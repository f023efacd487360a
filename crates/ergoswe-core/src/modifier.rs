// Ergoswe Modifier System
// Modifier keys, held-modifier masks and per-character modifier requirements

use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign, Not};

use strum::IntoEnumIterator;
use strum_macros::EnumIter;

use crate::keycode::{Keycode, KC_LALT, KC_LCTL, KC_LGUI, KC_LSFT, KC_RALT, KC_RCTL, KC_RGUI, KC_RSFT};

/// One of the eight physical modifier keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Modifier {
    LeftCtrl,
    LeftShift,
    LeftAlt,
    LeftGui,
    RightCtrl,
    RightShift,
    RightAlt,
    RightGui,
}

impl Modifier {
    /// The key that produces this modifier
    pub const fn keycode(self) -> Keycode {
        match self {
            Modifier::LeftCtrl => KC_LCTL,
            Modifier::LeftShift => KC_LSFT,
            Modifier::LeftAlt => KC_LALT,
            Modifier::LeftGui => KC_LGUI,
            Modifier::RightCtrl => KC_RCTL,
            Modifier::RightShift => KC_RSFT,
            Modifier::RightAlt => KC_RALT,
            Modifier::RightGui => KC_RGUI,
        }
    }

    /// Bit of this modifier in a [`ModMask`]
    ///
    /// Same layout as the HID report modifier byte: bit n is usage 0xE0 + n.
    pub const fn bit(self) -> u8 {
        1 << (self.keycode().code() - 0xE0)
    }

    /// Modifier for a keycode, if the keycode is one
    pub fn from_keycode(key: Keycode) -> Option<Modifier> {
        Modifier::iter().find(|m| m.keycode() == key)
    }

    /// Parse the short firmware spelling used in mod-tap names (`LALT`, `RCTL`, ...)
    pub fn from_alias(alias: &str) -> Option<Modifier> {
        let modifier = match alias.to_uppercase().as_str() {
            "LCTL" | "LCTRL" => Modifier::LeftCtrl,
            "LSFT" | "LSHIFT" => Modifier::LeftShift,
            "LALT" | "LOPT" => Modifier::LeftAlt,
            "LGUI" | "LCMD" | "LWIN" => Modifier::LeftGui,
            "RCTL" | "RCTRL" => Modifier::RightCtrl,
            "RSFT" | "RSHIFT" => Modifier::RightShift,
            "RALT" | "ROPT" | "ALGR" => Modifier::RightAlt,
            "RGUI" | "RCMD" | "RWIN" => Modifier::RightGui,
            _ => return None,
        };
        Some(modifier)
    }

    /// Short firmware spelling
    pub const fn alias(self) -> &'static str {
        match self {
            Modifier::LeftCtrl => "LCTL",
            Modifier::LeftShift => "LSFT",
            Modifier::LeftAlt => "LALT",
            Modifier::LeftGui => "LGUI",
            Modifier::RightCtrl => "RCTL",
            Modifier::RightShift => "RSFT",
            Modifier::RightAlt => "RALT",
            Modifier::RightGui => "RGUI",
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.alias())
    }
}

/// Set of currently held modifiers
///
/// Passed explicitly to anything that depends on modifier state instead of
/// being read from a global.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ModMask(pub u8);

impl ModMask {
    pub const NONE: ModMask = ModMask(0);
    pub const SHIFT: ModMask = ModMask(0x02 | 0x20);
    pub const CTRL: ModMask = ModMask(0x01 | 0x10);
    pub const ALT: ModMask = ModMask(0x04 | 0x40);
    pub const GUI: ModMask = ModMask(0x08 | 0x80);

    /// Mask holding a single modifier
    pub const fn of(modifier: Modifier) -> ModMask {
        ModMask(modifier.bit())
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn contains(self, modifier: Modifier) -> bool {
        self.0 & modifier.bit() != 0
    }

    /// True if any modifier of `other` is held
    pub const fn intersects(self, other: ModMask) -> bool {
        self.0 & other.0 != 0
    }

    /// Held modifiers in report bit order
    pub fn modifiers(self) -> impl Iterator<Item = Modifier> {
        Modifier::iter().filter(move |m| self.contains(*m))
    }
}

impl BitOr for ModMask {
    type Output = ModMask;

    fn bitor(self, rhs: ModMask) -> ModMask {
        ModMask(self.0 | rhs.0)
    }
}

impl BitOrAssign for ModMask {
    fn bitor_assign(&mut self, rhs: ModMask) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for ModMask {
    type Output = ModMask;

    fn bitand(self, rhs: ModMask) -> ModMask {
        ModMask(self.0 & rhs.0)
    }
}

impl Not for ModMask {
    type Output = ModMask;

    fn not(self) -> ModMask {
        ModMask(!self.0)
    }
}

impl From<Modifier> for ModMask {
    fn from(modifier: Modifier) -> Self {
        ModMask::of(modifier)
    }
}

impl fmt::Display for ModMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "-");
        }
        let parts: Vec<&str> = self.modifiers().map(|m| m.alias()).collect();
        write!(f, "{}", parts.join("+"))
    }
}

/// What must happen around the base key to produce a character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModifierRequirement {
    /// Press the base key alone
    None,
    /// Hold Shift while pressing the base key
    Shift,
    /// Hold AltGr while pressing the base key
    AltGr,
    /// Hold Shift and AltGr while pressing the base key
    ShiftAltGr,
    /// The base key is a dead key; a follow-up keystroke is needed to get
    /// the free-standing accent
    DeadKey,
}

impl fmt::Display for ModifierRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModifierRequirement::None => write!(f, "none"),
            ModifierRequirement::Shift => write!(f, "shift"),
            ModifierRequirement::AltGr => write!(f, "altgr"),
            ModifierRequirement::ShiftAltGr => write!(f, "shift+altgr"),
            ModifierRequirement::DeadKey => write!(f, "dead-key"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keycode::KC_A;

    #[test]
    fn test_modifier_bits_follow_report_layout() {
        assert_eq!(Modifier::LeftCtrl.bit(), 0x01);
        assert_eq!(Modifier::LeftShift.bit(), 0x02);
        assert_eq!(Modifier::RightShift.bit(), 0x20);
        assert_eq!(Modifier::RightAlt.bit(), 0x40);
    }

    #[test]
    fn test_modifier_from_alias() {
        assert_eq!(Modifier::from_alias("LALT"), Some(Modifier::LeftAlt));
        assert_eq!(Modifier::from_alias("lctl"), Some(Modifier::LeftCtrl));
        assert_eq!(Modifier::from_alias("AlGr"), Some(Modifier::RightAlt));
        assert_eq!(Modifier::from_alias("HYPR"), None);
    }

    #[test]
    fn test_modifier_from_keycode() {
        assert_eq!(Modifier::from_keycode(KC_LSFT), Some(Modifier::LeftShift));
        assert_eq!(Modifier::from_keycode(KC_A), None);
    }

    #[test]
    fn test_mod_mask_shift_matches_either_side() {
        let left = ModMask::of(Modifier::LeftShift);
        let right = ModMask::of(Modifier::RightShift);
        assert!(left.intersects(ModMask::SHIFT));
        assert!(right.intersects(ModMask::SHIFT));
        assert!(!ModMask::of(Modifier::LeftCtrl).intersects(ModMask::SHIFT));
    }

    #[test]
    fn test_mod_mask_display() {
        let mask = ModMask::of(Modifier::LeftShift) | ModMask::of(Modifier::RightAlt);
        assert_eq!(mask.to_string(), "LSFT+RALT");
        assert_eq!(ModMask::NONE.to_string(), "-");
    }
}
