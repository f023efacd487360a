use std::fmt;

use strum_macros::EnumIter;

use crate::send::{KeySink, SendString};
use crate::translate::TranslateError;

/// User keycodes that type a short string.
///
/// Each one is bound on the keymap like any other key; pressing it types
/// its text through the string sender, so the characters come out right
/// on the host layout regardless of where they live on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum CustomKeycode {
    Tilde,
    Grave,
    LeftArrow,
    RightArrow,
    LeftFatArrow,
    RightFatArrow,
}

impl CustomKeycode {
    /// Text typed on press
    pub fn text(self) -> &'static str {
        match self {
            CustomKeycode::Tilde => "~",
            CustomKeycode::Grave => "`",
            CustomKeycode::LeftArrow => "<-",
            CustomKeycode::RightArrow => "->",
            CustomKeycode::LeftFatArrow => "<=",
            CustomKeycode::RightFatArrow => "=>",
        }
    }

    /// Keymap name
    pub fn name(self) -> &'static str {
        match self {
            CustomKeycode::Tilde => "PE_TILD",
            CustomKeycode::Grave => "PE_GRAV",
            CustomKeycode::LeftArrow => "PE_LARR",
            CustomKeycode::RightArrow => "PE_RARR",
            CustomKeycode::LeftFatArrow => "PE_LEAR",
            CustomKeycode::RightFatArrow => "PE_REAR",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let keycode = match name.to_uppercase().as_str() {
            "PE_TILD" => CustomKeycode::Tilde,
            "PE_GRAV" => CustomKeycode::Grave,
            "PE_LARR" => CustomKeycode::LeftArrow,
            "PE_RARR" => CustomKeycode::RightArrow,
            "PE_LEAR" => CustomKeycode::LeftFatArrow,
            "PE_REAR" => CustomKeycode::RightFatArrow,
            _ => return None,
        };
        Some(keycode)
    }

    /// Handle a key record for this keycode
    ///
    /// Types the text on press; releases do nothing. Returns `Ok(false)`
    /// because the key is fully handled and must not be processed further.
    pub fn process<S: KeySink + ?Sized>(
        self,
        pressed: bool,
        sender: &SendString,
        sink: &mut S,
    ) -> Result<bool, TranslateError> {
        if pressed {
            sender.send(self.text(), sink)?;
        }
        Ok(false)
    }
}

impl fmt::Display for CustomKeycode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
