// Ergoswe Core Library
// ASCII to Swedish-layout key translation for a split ergonomic keymap

pub mod combo;
pub mod custom;
pub mod key_override;
pub mod keycode;
pub mod layer;
pub mod layout;
pub mod led;
pub mod modifier;
pub mod send;
pub mod tapping;
pub mod translate;

#[cfg(feature = "settings")]
pub mod settings;

pub use combo::{find_combo, ComboDef, ComboOutput, COMBOS};
pub use custom::CustomKeycode;
pub use key_override::{find_override, KeyOverride, Overridden, DELETE_KEY_OVERRIDE, KEY_OVERRIDES};
pub use keycode::{keycode_from_name, keycode_name, Keycode};
pub use layer::{highest_layer, Layer};
pub use layout::{Layout, LayoutTables, ModifierTable, ASCII_RANGE};
pub use led::{LedDriver, LedState};
pub use modifier::{ModMask, Modifier, ModifierRequirement};
pub use send::{DeadKeyFollowUp, KeySink, RecordingSink, SendReport, SendString, UnmappedPolicy};
pub use tapping::{TapHoldKey, TapHoldParseError, TappingTerms, DEFAULT_TAPPING_TERM};
pub use translate::{translate, translate_char, KeyAction, KeyEvent, KeyEvents, TranslateError};

#[cfg(feature = "settings")]
pub use settings::{default_settings_content, Settings, SettingsError};
