// Ergoswe Translator
// Maps a 7-bit character code to the physical key action that types it

use std::fmt;

use smallvec::SmallVec;

use crate::keycode::Keycode;
use crate::layout::LayoutTables;
use crate::modifier::{Modifier, ModifierRequirement};

/// Errors from translation
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TranslateError {
    /// No key produces this code on the layout, or the code is not 7-bit
    #[error("character code {code:#04x} cannot be typed on this layout")]
    UnmappedCharacter { code: u32 },
}

/// A single keyboard event handed to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyEvent {
    Press(Keycode),
    Release(Keycode),
}

impl KeyEvent {
    pub fn keycode(self) -> Keycode {
        match self {
            KeyEvent::Press(k) | KeyEvent::Release(k) => k,
        }
    }
}

impl fmt::Display for KeyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyEvent::Press(k) => write!(f, "+{}", k),
            KeyEvent::Release(k) => write!(f, "-{}", k),
        }
    }
}

/// Events for one character; modifiers plus a tap plus a follow-up fit inline
pub type KeyEvents = SmallVec<[KeyEvent; 8]>;

/// The physical key action that produces one character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyAction {
    key: Keycode,
    shift: bool,
    altgr: bool,
    dead: bool,
}

impl KeyAction {
    pub fn new(key: Keycode, shift: bool, altgr: bool, dead: bool) -> Self {
        Self {
            key,
            shift,
            altgr,
            dead,
        }
    }

    /// Base key, independent of modifiers
    pub fn key(&self) -> Keycode {
        self.key
    }

    /// Shift must be held while pressing the base key
    pub fn needs_shift(&self) -> bool {
        self.shift
    }

    /// AltGr must be held while pressing the base key
    pub fn needs_altgr(&self) -> bool {
        self.altgr
    }

    /// The base key is a dead key
    pub fn is_dead_key(&self) -> bool {
        self.dead
    }

    /// The primary modifier requirement
    ///
    /// Dead keys report `DeadKey` even when the dead key itself sits on a
    /// shifted or AltGr level; the raw flags keep that detail.
    pub fn requirement(&self) -> ModifierRequirement {
        match (self.dead, self.shift, self.altgr) {
            (true, _, _) => ModifierRequirement::DeadKey,
            (false, true, true) => ModifierRequirement::ShiftAltGr,
            (false, true, false) => ModifierRequirement::Shift,
            (false, false, true) => ModifierRequirement::AltGr,
            (false, false, false) => ModifierRequirement::None,
        }
    }

    /// Modifier keys held around the base key, in press order
    pub fn held_modifiers(&self, altgr_modifier: Modifier) -> SmallVec<[Modifier; 2]> {
        let mut held = SmallVec::new();
        if self.shift {
            held.push(Modifier::LeftShift);
        }
        if self.altgr {
            held.push(altgr_modifier);
        }
        held
    }

    /// Press/release sequence that types this character
    ///
    /// Modifiers go down first and come up in reverse order. A dead key is
    /// followed by a tap of `follow_up` when one is given.
    pub fn events(&self, altgr_modifier: Modifier, follow_up: Option<Keycode>) -> KeyEvents {
        let held = self.held_modifiers(altgr_modifier);
        let mut events = KeyEvents::new();

        for modifier in &held {
            events.push(KeyEvent::Press(modifier.keycode()));
        }
        events.push(KeyEvent::Press(self.key));
        events.push(KeyEvent::Release(self.key));
        for modifier in held.iter().rev() {
            events.push(KeyEvent::Release(modifier.keycode()));
        }

        if self.dead {
            if let Some(follow_up) = follow_up {
                events.push(KeyEvent::Press(follow_up));
                events.push(KeyEvent::Release(follow_up));
            }
        }
        events
    }
}

impl fmt::Display for KeyAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: SmallVec<[&str; 3]> = SmallVec::new();
        if self.shift {
            parts.push("Shift");
        }
        if self.altgr {
            parts.push("AltGr");
        }
        if parts.is_empty() {
            write!(f, "{}", self.key)?;
        } else {
            write!(f, "{}-{}", parts.join("-"), self.key)?;
        }
        if self.dead {
            write!(f, " (dead)")?;
        }
        Ok(())
    }
}

/// Translate a character code for the given layout tables
///
/// # Arguments
/// * `tables` - Layout to type on
/// * `code` - Character code; anything above 127 is rejected
///
/// # Returns
/// The key action, or `UnmappedCharacter` when the layout has no key for it
pub fn translate(tables: &LayoutTables, code: u32) -> Result<KeyAction, TranslateError> {
    let key = tables.keycode(code);
    if key.is_no() {
        return Err(TranslateError::UnmappedCharacter { code });
    }

    Ok(KeyAction::new(
        key,
        tables.shift.contains(code),
        tables.altgr.contains(code),
        tables.dead.contains(code),
    ))
}

/// Translate a `char`
pub fn translate_char(tables: &LayoutTables, c: char) -> Result<KeyAction, TranslateError> {
    translate(tables, c as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keycode::{KC_1, KC_A, KC_LSFT, KC_RALT, KC_RBRC, KC_SPC};
    use crate::layout::Layout;

    fn iso() -> &'static LayoutTables {
        Layout::SwedishIso.tables()
    }

    #[test]
    fn test_plain_letter() {
        let action = translate_char(iso(), 'a').unwrap();
        assert_eq!(action.key(), KC_A);
        assert_eq!(action.requirement(), ModifierRequirement::None);
    }

    #[test]
    fn test_shifted_digit_key() {
        let action = translate_char(iso(), '!').unwrap();
        assert_eq!(action.key(), KC_1);
        assert_eq!(action.requirement(), ModifierRequirement::Shift);
    }

    #[test]
    fn test_altgr_character() {
        let action = translate_char(iso(), '@').unwrap();
        assert_eq!(action.requirement(), ModifierRequirement::AltGr);
        assert_eq!(action.to_string(), "AltGr-KC_2");
    }

    #[test]
    fn test_dead_key_keeps_raw_shift_flag() {
        let action = translate_char(iso(), '^').unwrap();
        assert_eq!(action.key(), KC_RBRC);
        assert_eq!(action.requirement(), ModifierRequirement::DeadKey);
        assert!(action.needs_shift());
        assert!(action.is_dead_key());
    }

    #[test]
    fn test_unmapped_and_out_of_range() {
        assert_eq!(
            translate(iso(), 0),
            Err(TranslateError::UnmappedCharacter { code: 0 })
        );
        assert_eq!(
            translate(iso(), 200),
            Err(TranslateError::UnmappedCharacter { code: 200 })
        );
        assert!(translate_char(iso(), 'å').is_err());
    }

    #[test]
    fn test_events_wrap_modifiers() {
        let action = translate_char(iso(), '@').unwrap();
        let events = action.events(Modifier::RightAlt, Some(KC_SPC));
        assert_eq!(
            events.as_slice(),
            &[
                KeyEvent::Press(KC_RALT),
                KeyEvent::Press(Keycode(0x1F)),
                KeyEvent::Release(Keycode(0x1F)),
                KeyEvent::Release(KC_RALT),
            ]
        );
    }

    #[test]
    fn test_events_dead_key_follow_up() {
        let action = translate_char(iso(), '^').unwrap();
        let events = action.events(Modifier::RightAlt, Some(KC_SPC));
        assert_eq!(
            events.as_slice(),
            &[
                KeyEvent::Press(KC_LSFT),
                KeyEvent::Press(KC_RBRC),
                KeyEvent::Release(KC_RBRC),
                KeyEvent::Release(KC_LSFT),
                KeyEvent::Press(KC_SPC),
                KeyEvent::Release(KC_SPC),
            ]
        );

        let bare = action.events(Modifier::RightAlt, None);
        assert_eq!(bare.len(), 4);
    }

    #[test]
    fn test_error_message() {
        let err = translate(iso(), 0x80).unwrap_err();
        assert_eq!(
            err.to_string(),
            "character code 0x80 cannot be typed on this layout"
        );
    }
}
