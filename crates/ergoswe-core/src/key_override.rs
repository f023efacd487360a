// Ergoswe Key Overrides
// Replace a key with another while certain modifiers are held

use crate::keycode::{Keycode, KC_BSPC, KC_DEL};
use crate::modifier::ModMask;

/// Result of an override firing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overridden {
    /// Key to send instead of the pressed one
    pub replacement: Keycode,
    /// Held modifiers to mask out while the replacement is down
    pub suppressed: ModMask,
}

/// A basic override: trigger key plus any of `trigger_mods` sends `replacement`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyOverride {
    pub trigger_mods: ModMask,
    pub trigger: Keycode,
    pub replacement: Keycode,
}

impl KeyOverride {
    pub const fn basic(trigger_mods: ModMask, trigger: Keycode, replacement: Keycode) -> Self {
        Self {
            trigger_mods,
            trigger,
            replacement,
        }
    }

    /// Check the override against the held modifiers and pressed key
    ///
    /// # Arguments
    /// * `held` - Modifiers held right now
    /// * `key` - Key being pressed
    ///
    /// # Returns
    /// The replacement and the modifiers to suppress, or None if it does
    /// not apply
    pub fn apply(&self, held: ModMask, key: Keycode) -> Option<Overridden> {
        if key != self.trigger || !held.intersects(self.trigger_mods) {
            return None;
        }
        Some(Overridden {
            replacement: self.replacement,
            suppressed: held & self.trigger_mods,
        })
    }
}

/// Shift + Backspace sends Delete
pub const DELETE_KEY_OVERRIDE: KeyOverride = KeyOverride::basic(ModMask::SHIFT, KC_BSPC, KC_DEL);

/// Overrides active on the keymap
pub const KEY_OVERRIDES: &[KeyOverride] = &[DELETE_KEY_OVERRIDE];

/// First override in `overrides` matching the press
pub fn find_override(overrides: &[KeyOverride], held: ModMask, key: Keycode) -> Option<Overridden> {
    overrides.iter().find_map(|o| o.apply(held, key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keycode::KC_A;
    use crate::modifier::Modifier;

    #[test]
    fn test_shift_backspace_is_delete() {
        let held = ModMask::of(Modifier::LeftShift);
        let result = find_override(KEY_OVERRIDES, held, KC_BSPC).unwrap();
        assert_eq!(result.replacement, KC_DEL);
        assert_eq!(result.suppressed, held);
    }

    #[test]
    fn test_right_shift_also_triggers() {
        let held = ModMask::of(Modifier::RightShift) | ModMask::of(Modifier::LeftCtrl);
        let result = DELETE_KEY_OVERRIDE.apply(held, KC_BSPC).unwrap();
        // Ctrl stays held, only Shift is masked
        assert_eq!(result.suppressed, ModMask::of(Modifier::RightShift));
    }

    #[test]
    fn test_no_override_without_shift_or_for_other_keys() {
        assert_eq!(DELETE_KEY_OVERRIDE.apply(ModMask::NONE, KC_BSPC), None);
        assert_eq!(
            DELETE_KEY_OVERRIDE.apply(ModMask::of(Modifier::LeftCtrl), KC_BSPC),
            None
        );
        assert_eq!(
            DELETE_KEY_OVERRIDE.apply(ModMask::of(Modifier::LeftShift), KC_A),
            None
        );
    }
}
