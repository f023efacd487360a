// Ergoswe Combos
// Two-key chords on the home rows that emit a single key or symbol

use std::fmt;

use crate::keycode::{
    Keycode, KC_D, KC_E, KC_ESC, KC_F, KC_G, KC_H, KC_I, KC_J, KC_K, KC_Q, KC_R, KC_T, KC_U,
    KC_W, KC_Y,
};
use crate::layout::Layout;
use crate::translate::{translate_char, KeyAction, TranslateError};

/// What a combo emits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComboOutput {
    /// A raw key, independent of layout
    Key(Keycode),
    /// A character, typed through the layout
    Char(char),
}

impl fmt::Display for ComboOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComboOutput::Key(key) => write!(f, "{}", key),
            ComboOutput::Char(c) => write!(f, "'{}'", c),
        }
    }
}

/// A chord of two keys pressed together
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComboDef {
    pub name: &'static str,
    pub keys: [Keycode; 2],
    pub output: ComboOutput,
}

impl ComboDef {
    const fn key(name: &'static str, keys: [Keycode; 2], output: Keycode) -> Self {
        Self {
            name,
            keys,
            output: ComboOutput::Key(output),
        }
    }

    const fn char(name: &'static str, keys: [Keycode; 2], output: char) -> Self {
        Self {
            name,
            keys,
            output: ComboOutput::Char(output),
        }
    }

    /// Key action the combo sends on `layout`
    pub fn resolve(&self, layout: Layout) -> Result<KeyAction, TranslateError> {
        match self.output {
            ComboOutput::Key(key) => Ok(KeyAction::new(key, false, false, false)),
            ComboOutput::Char(c) => translate_char(layout.tables(), c),
        }
    }

    /// True if `a` and `b`, in either order, trigger this combo
    pub fn matches(&self, a: Keycode, b: Keycode) -> bool {
        (self.keys[0] == a && self.keys[1] == b) || (self.keys[0] == b && self.keys[1] == a)
    }
}

impl fmt::Display for ComboDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}+{} -> {}", self.keys[0], self.keys[1], self.output)
    }
}

pub const COMBOS: &[ComboDef] = &[
    ComboDef::key("QW_ESC", [KC_Q, KC_W], KC_ESC),
    ComboDef::char("YU_LPAREN", [KC_Y, KC_U], '('),
    ComboDef::char("UI_RPAREN", [KC_U, KC_I], ')'),
    ComboDef::char("HJ_LBRACE", [KC_H, KC_J], '{'),
    ComboDef::char("JK_RBRACE", [KC_J, KC_K], '}'),
    ComboDef::char("ER_LBRACKET", [KC_E, KC_R], '['),
    ComboDef::char("RT_RBRACKET", [KC_R, KC_T], ']'),
    ComboDef::char("DF_LANGLE", [KC_D, KC_F], '<'),
    ComboDef::char("FG_RANGLE", [KC_F, KC_G], '>'),
];

/// Combo triggered by the two keys, if any
pub fn find_combo(a: Keycode, b: Keycode) -> Option<&'static ComboDef> {
    COMBOS.iter().find(|combo| combo.matches(a, b))
}
