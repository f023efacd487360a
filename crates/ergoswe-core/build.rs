use std::env;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Canonical firmware names and USB HID usage ids.
const KEYCODES: &[(&str, u8)] = &[
    ("KC_NO", 0x00),
    ("KC_A", 0x04),
    ("KC_B", 0x05),
    ("KC_C", 0x06),
    ("KC_D", 0x07),
    ("KC_E", 0x08),
    ("KC_F", 0x09),
    ("KC_G", 0x0A),
    ("KC_H", 0x0B),
    ("KC_I", 0x0C),
    ("KC_J", 0x0D),
    ("KC_K", 0x0E),
    ("KC_L", 0x0F),
    ("KC_M", 0x10),
    ("KC_N", 0x11),
    ("KC_O", 0x12),
    ("KC_P", 0x13),
    ("KC_Q", 0x14),
    ("KC_R", 0x15),
    ("KC_S", 0x16),
    ("KC_T", 0x17),
    ("KC_U", 0x18),
    ("KC_V", 0x19),
    ("KC_W", 0x1A),
    ("KC_X", 0x1B),
    ("KC_Y", 0x1C),
    ("KC_Z", 0x1D),
    ("KC_1", 0x1E),
    ("KC_2", 0x1F),
    ("KC_3", 0x20),
    ("KC_4", 0x21),
    ("KC_5", 0x22),
    ("KC_6", 0x23),
    ("KC_7", 0x24),
    ("KC_8", 0x25),
    ("KC_9", 0x26),
    ("KC_0", 0x27),
    ("KC_ENT", 0x28),
    ("KC_ESC", 0x29),
    ("KC_BSPC", 0x2A),
    ("KC_TAB", 0x2B),
    ("KC_SPC", 0x2C),
    ("KC_MINS", 0x2D),
    ("KC_EQL", 0x2E),
    ("KC_LBRC", 0x2F),
    ("KC_RBRC", 0x30),
    ("KC_BSLS", 0x31),
    ("KC_NUHS", 0x32),
    ("KC_SCLN", 0x33),
    ("KC_QUOT", 0x34),
    ("KC_GRV", 0x35),
    ("KC_COMM", 0x36),
    ("KC_DOT", 0x37),
    ("KC_SLSH", 0x38),
    ("KC_CAPS", 0x39),
    ("KC_F1", 0x3A),
    ("KC_F2", 0x3B),
    ("KC_F3", 0x3C),
    ("KC_F4", 0x3D),
    ("KC_F5", 0x3E),
    ("KC_F6", 0x3F),
    ("KC_F7", 0x40),
    ("KC_F8", 0x41),
    ("KC_F9", 0x42),
    ("KC_F10", 0x43),
    ("KC_F11", 0x44),
    ("KC_F12", 0x45),
    ("KC_PSCR", 0x46),
    ("KC_SCRL", 0x47),
    ("KC_PAUS", 0x48),
    ("KC_INS", 0x49),
    ("KC_HOME", 0x4A),
    ("KC_PGUP", 0x4B),
    ("KC_DEL", 0x4C),
    ("KC_END", 0x4D),
    ("KC_PGDN", 0x4E),
    ("KC_RGHT", 0x4F),
    ("KC_LEFT", 0x50),
    ("KC_DOWN", 0x51),
    ("KC_UP", 0x52),
    ("KC_NUBS", 0x64),
    ("KC_LCTL", 0xE0),
    ("KC_LSFT", 0xE1),
    ("KC_LALT", 0xE2),
    ("KC_LGUI", 0xE3),
    ("KC_RCTL", 0xE4),
    ("KC_RSFT", 0xE5),
    ("KC_RALT", 0xE6),
    ("KC_RGUI", 0xE7),
];

/// Long-form spellings accepted when parsing.
const ALIASES: &[(&str, &str)] = &[
    ("KC_ENTER", "KC_ENT"),
    ("KC_ESCAPE", "KC_ESC"),
    ("KC_BACKSPACE", "KC_BSPC"),
    ("KC_SPACE", "KC_SPC"),
    ("KC_MINUS", "KC_MINS"),
    ("KC_EQUAL", "KC_EQL"),
    ("KC_COMMA", "KC_COMM"),
    ("KC_SLASH", "KC_SLSH"),
    ("KC_GRAVE", "KC_GRV"),
    ("KC_QUOTE", "KC_QUOT"),
    ("KC_DELETE", "KC_DEL"),
    ("KC_RIGHT", "KC_RGHT"),
    ("KC_LCTRL", "KC_LCTL"),
    ("KC_RCTRL", "KC_RCTL"),
    ("KC_LSHIFT", "KC_LSFT"),
    ("KC_RSHIFT", "KC_RSFT"),
];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("keycodes.rs");
    let mut f = File::create(&dest_path).unwrap();

    // Generate the Keycode newtype wrapper
    writeln!(
        f,
        r#"
/// A physical key, identified by its USB HID keyboard usage id.
///
/// This is a newtype wrapper around u8 for type safety. It names a key
/// position independently of modifier state; `Keycode::NO` marks
/// "no key".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Keycode(pub u8);

impl Keycode {{
    /// The "no mapping" sentinel
    pub const NO: Keycode = Keycode(0x00);

    /// Get the raw usage id
    pub const fn code(self) -> u8 {{
        self.0
    }}

    /// Get the firmware name of this key
    pub fn name(self) -> &'static str {{
        keycode_name(self.0)
    }}

    /// True for the sentinel
    pub const fn is_no(self) -> bool {{
        self.0 == 0
    }}

    /// True for the eight modifier keys (0xE0..=0xE7)
    pub const fn is_modifier(self) -> bool {{
        self.0 >= 0xE0 && self.0 <= 0xE7
    }}
}}

impl From<u8> for Keycode {{
    fn from(code: u8) -> Self {{
        Keycode(code)
    }}
}}

impl From<Keycode> for u8 {{
    fn from(key: Keycode) -> Self {{
        key.0
    }}
}}

impl fmt::Display for Keycode {{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {{
        write!(f, "{{}}", self.name())
    }}
}}

impl FromStr for Keycode {{
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {{
        keycode_from_name(s).ok_or_else(|| format!("Unknown keycode: {{}}", s))
    }}
}}
"#
    )
    .unwrap();

    for (name, code) in KEYCODES {
        writeln!(f, "pub const {}: Keycode = Keycode({:#04x});", name, code).unwrap();
    }

    writeln!(f, "\nstatic KEYCODE_NAMES: &[(&str, u8)] = &[").unwrap();
    for (name, code) in KEYCODES {
        writeln!(f, "    (\"{}\", {:#04x}),", name, code).unwrap();
    }
    writeln!(f, "];").unwrap();

    writeln!(f, "\nstatic KEYCODE_ALIASES: &[(&str, u8)] = &[").unwrap();
    for (alias, canonical) in ALIASES {
        let code = KEYCODES
            .iter()
            .find(|(name, _)| name == canonical)
            .map(|(_, code)| *code)
            .unwrap();
        writeln!(f, "    (\"{}\", {:#04x}),", alias, code).unwrap();
    }
    writeln!(f, "];").unwrap();

    println!("cargo:rerun-if-changed=build.rs");
}
