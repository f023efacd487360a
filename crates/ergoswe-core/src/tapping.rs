// Ergoswe Tapping Terms
// Tap-hold key notation and per-key tapping term lookup

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use std::time::Duration;

use indexmap::IndexMap;
use regex::Regex;
use strum::IntoEnumIterator;

use crate::keycode::{keycode_from_name, Keycode};
use crate::layer::Layer;
use crate::modifier::Modifier;

/// Firmware default tapping term
pub const DEFAULT_TAPPING_TERM: Duration = Duration::from_millis(200);

/// Errors that can occur while parsing tap-hold notation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TapHoldParseError {
    #[error("not a mod-tap or layer-tap key: '{0}'")]
    Unrecognized(String),

    #[error("unknown keycode: '{0}'")]
    UnknownKey(String),

    #[error("unknown layer: '{0}'")]
    UnknownLayer(String),
}

/// A key that taps one thing and holds another
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TapHoldKey {
    /// `LALT_T(KC_A)`: tap for the key, hold for the modifier
    ModTap { modifier: Modifier, key: Keycode },
    /// `LT(1, KC_ENT)`: tap for the key, hold for the layer
    LayerTap { layer: u8, key: Keycode },
}

impl TapHoldKey {
    /// The key sent on tap
    pub fn tap_key(&self) -> Keycode {
        match self {
            TapHoldKey::ModTap { key, .. } | TapHoldKey::LayerTap { key, .. } => *key,
        }
    }
}

fn mod_tap_regex() -> Option<&'static Regex> {
    static MOD_TAP: OnceLock<Option<Regex>> = OnceLock::new();
    MOD_TAP
        .get_or_init(|| Regex::new(r"^([LR]?)(CTL|SFT|ALT|GUI)_T\(\s*(\w+)\s*\)$").ok())
        .as_ref()
}

fn layer_tap_regex() -> Option<&'static Regex> {
    static LAYER_TAP: OnceLock<Option<Regex>> = OnceLock::new();
    LAYER_TAP
        .get_or_init(|| Regex::new(r"^LT\(\s*(\w+)\s*,\s*(\w+)\s*\)$").ok())
        .as_ref()
}

fn parse_layer(name: &str) -> Result<u8, TapHoldParseError> {
    if let Ok(index) = name.parse::<u8>() {
        return Ok(index);
    }
    let upper = name.to_uppercase();
    Layer::iter()
        .find(|layer| layer.to_string() == upper)
        .map(Layer::index)
        .ok_or_else(|| TapHoldParseError::UnknownLayer(name.to_string()))
}

fn parse_key(name: &str) -> Result<Keycode, TapHoldParseError> {
    keycode_from_name(name).ok_or_else(|| TapHoldParseError::UnknownKey(name.to_string()))
}

impl FromStr for TapHoldKey {
    type Err = TapHoldParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().to_uppercase();

        if let Some(caps) = mod_tap_regex().and_then(|re| re.captures(&trimmed)) {
            let side = if &caps[1] == "R" { "R" } else { "L" };
            let alias = format!("{}{}", side, &caps[2]);
            let modifier = Modifier::from_alias(&alias)
                .ok_or_else(|| TapHoldParseError::Unrecognized(s.to_string()))?;
            let key = parse_key(&caps[3])?;
            return Ok(TapHoldKey::ModTap { modifier, key });
        }

        if let Some(caps) = layer_tap_regex().and_then(|re| re.captures(&trimmed)) {
            let layer = parse_layer(&caps[1])?;
            let key = parse_key(&caps[2])?;
            return Ok(TapHoldKey::LayerTap { layer, key });
        }

        Err(TapHoldParseError::Unrecognized(s.to_string()))
    }
}

impl fmt::Display for TapHoldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TapHoldKey::ModTap { modifier, key } => write!(f, "{}_T({})", modifier, key),
            TapHoldKey::LayerTap { layer, key } => write!(f, "LT({}, {})", layer, key),
        }
    }
}

/// Tapping term per tap-hold key
#[derive(Debug, Clone, PartialEq)]
pub struct TappingTerms {
    base: Duration,
    per_key: IndexMap<TapHoldKey, Duration>,
}

impl Default for TappingTerms {
    fn default() -> Self {
        Self::new(DEFAULT_TAPPING_TERM)
    }
}

impl TappingTerms {
    pub fn new(base: Duration) -> Self {
        Self {
            base,
            per_key: IndexMap::new(),
        }
    }

    /// Override the term for one key
    pub fn set(&mut self, key: TapHoldKey, term: Duration) {
        self.per_key.insert(key, term);
    }

    pub fn base(&self) -> Duration {
        self.base
    }

    pub fn overrides(&self) -> &IndexMap<TapHoldKey, Duration> {
        &self.per_key
    }

    /// Tapping term for `key`; the base term unless overridden
    pub fn term_for(&self, key: &TapHoldKey) -> Duration {
        self.per_key.get(key).copied().unwrap_or(self.base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keycode::{KC_A, KC_ENT, KC_N, KC_TAB};

    #[test]
    fn test_parse_mod_tap() {
        let key: TapHoldKey = "LALT_T(KC_A)".parse().unwrap();
        assert_eq!(
            key,
            TapHoldKey::ModTap {
                modifier: Modifier::LeftAlt,
                key: KC_A
            }
        );
        assert_eq!(key.to_string(), "LALT_T(KC_A)");
    }

    #[test]
    fn test_parse_mod_tap_without_side_is_left() {
        let key: TapHoldKey = "CTL_T(KC_TAB)".parse().unwrap();
        assert_eq!(
            key,
            TapHoldKey::ModTap {
                modifier: Modifier::LeftCtrl,
                key: KC_TAB
            }
        );
    }

    #[test]
    fn test_parse_layer_tap_by_name_and_index() {
        let by_name: TapHoldKey = "LT(SYMB, KC_ENTER)".parse().unwrap();
        let by_index: TapHoldKey = "lt(1,kc_ent)".parse().unwrap();
        assert_eq!(by_name, by_index);
        assert_eq!(by_name, TapHoldKey::LayerTap { layer: 1, key: KC_ENT });
        assert_eq!(by_name.to_string(), "LT(1, KC_ENT)");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "KC_A".parse::<TapHoldKey>(),
            Err(TapHoldParseError::Unrecognized("KC_A".to_string()))
        );
        assert_eq!(
            "LALT_T(KC_NOPE)".parse::<TapHoldKey>(),
            Err(TapHoldParseError::UnknownKey("KC_NOPE".to_string()))
        );
        assert_eq!(
            "LT(FOO, KC_A)".parse::<TapHoldKey>(),
            Err(TapHoldParseError::UnknownLayer("FOO".to_string()))
        );
    }

    #[test]
    fn test_term_lookup() {
        let mut terms = TappingTerms::default();
        let n = TapHoldKey::ModTap {
            modifier: Modifier::LeftCtrl,
            key: KC_N,
        };
        let a = TapHoldKey::ModTap {
            modifier: Modifier::LeftAlt,
            key: KC_A,
        };
        terms.set(n, Duration::from_millis(2450));

        assert_eq!(terms.term_for(&n), Duration::from_millis(2450));
        assert_eq!(terms.term_for(&a), DEFAULT_TAPPING_TERM);
    }
}
