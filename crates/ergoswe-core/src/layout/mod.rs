// Ergoswe Layout Tables
// Per-layout lookup tables for ASCII-to-keycode translation

pub mod swedish;

use std::fmt;

use serde::Deserialize;
use strum_macros::{EnumIter, EnumString};

use crate::keycode::{Keycode, KC_SPC};
use crate::modifier::Modifier;

/// Number of character codes covered by the tables (7-bit text)
pub const ASCII_RANGE: usize = 128;

/// Set of character codes that need a given modifier
///
/// Sixteen rows of eight flags: row = `code >> 3`, bit = `code & 7`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct ModifierTable {
    rows: [[bool; 8]; 16],
}

impl ModifierTable {
    /// Build a table from literal 0/1 rows, first column is bit 0
    pub const fn from_rows(rows: [[u8; 8]; 16]) -> Self {
        let mut flags = [[false; 8]; 16];
        let mut row = 0;
        while row < 16 {
            let mut bit = 0;
            while bit < 8 {
                flags[row][bit] = rows[row][bit] != 0;
                bit += 1;
            }
            row += 1;
        }
        Self { rows: flags }
    }

    /// Does `code` need this modifier? Codes above 127 never do.
    pub const fn contains(&self, code: u32) -> bool {
        if code as usize >= ASCII_RANGE {
            return false;
        }
        self.rows[(code >> 3) as usize][(code & 7) as usize]
    }

    /// The table in its packed form, one byte per row
    pub fn packed(&self) -> [u8; 16] {
        let mut bytes = [0u8; 16];
        for (byte, row) in bytes.iter_mut().zip(self.rows.iter()) {
            *byte = row
                .iter()
                .enumerate()
                .fold(0, |acc, (bit, set)| acc | ((*set as u8) << bit));
        }
        bytes
    }

    /// All flagged codes in ascending order
    pub fn codes(&self) -> impl Iterator<Item = u8> + '_ {
        (0..ASCII_RANGE as u8).filter(move |code| self.contains(*code as u32))
    }
}

impl fmt::Debug for ModifierTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.codes()).finish()
    }
}

/// Everything needed to translate text for one physical layout
#[derive(Debug)]
pub struct LayoutTables {
    /// Base key per character code, `Keycode::NO` when unmapped
    pub keycodes: [Keycode; ASCII_RANGE],
    pub shift: ModifierTable,
    pub altgr: ModifierTable,
    pub dead: ModifierTable,
    /// Physical key acting as AltGr on this layout
    pub altgr_modifier: Modifier,
    /// Key tapped after a dead key to get the bare accent
    pub dead_key_follow_up: Keycode,
}

impl LayoutTables {
    /// Base key for a code, `Keycode::NO` when unmapped or out of range
    pub fn keycode(&self, code: u32) -> Keycode {
        self.keycodes
            .get(code as usize)
            .copied()
            .unwrap_or(Keycode::NO)
    }
}

/// Supported host layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumString, EnumIter, Deserialize)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum Layout {
    /// Swedish on a standard PC ISO keyboard
    #[default]
    SwedishIso,
    /// Swedish on an Apple ISO keyboard
    SwedishMacIso,
}

impl Layout {
    /// Static tables for this layout
    pub fn tables(self) -> &'static LayoutTables {
        match self {
            Layout::SwedishIso => &swedish::SWEDISH_ISO,
            Layout::SwedishMacIso => &swedish::SWEDISH_MAC_ISO,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Layout::SwedishIso => "swedish-iso",
            Layout::SwedishMacIso => "swedish-mac-iso",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Default follow-up after a dead key
pub const DEFAULT_DEAD_KEY_FOLLOW_UP: Keycode = KC_SPC;

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[rustfmt::skip]
    const SAMPLE: ModifierTable = ModifierTable::from_rows([
        [1, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0],
        [0, 1, 1, 1, 0, 1, 1, 0],
        [0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 1],
    ]);

    #[test]
    fn test_row_and_bit_addressing() {
        assert!(SAMPLE.contains(0));
        assert!(SAMPLE.contains(33)); // '!'
        assert!(!SAMPLE.contains(36)); // '$'
        assert!(SAMPLE.contains(127));
        assert!(!SAMPLE.contains(128));
        assert!(!SAMPLE.contains(u32::MAX));
    }

    #[test]
    fn test_packed_form() {
        let packed = SAMPLE.packed();
        assert_eq!(packed[0], 0b0000_0001);
        assert_eq!(packed[4], 0b0110_1110);
        assert_eq!(packed[15], 0b1000_0000);
    }

    #[test]
    fn test_codes_iterator() {
        let codes: Vec<u8> = SAMPLE.codes().collect();
        assert_eq!(codes, vec![0, 33, 34, 35, 37, 38, 127]);
    }

    #[test]
    fn test_layout_from_str() {
        assert_eq!(Layout::from_str("swedish-iso"), Ok(Layout::SwedishIso));
        assert_eq!(Layout::from_str("Swedish-Mac-ISO"), Ok(Layout::SwedishMacIso));
        assert!(Layout::from_str("dvorak").is_err());
        assert_eq!(Layout::SwedishMacIso.to_string(), "swedish-mac-iso");
    }

    #[test]
    fn test_keycode_out_of_range_is_sentinel() {
        let tables = Layout::SwedishIso.tables();
        assert_eq!(tables.keycode(128), Keycode::NO);
        assert_eq!(tables.keycode(1000), Keycode::NO);
    }
}
