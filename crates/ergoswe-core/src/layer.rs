use std::fmt;

use strum_macros::EnumIter;

/// Keymap layers, by index.
///
/// The layer engine itself lives in the firmware; this only names the
/// indices it reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
#[repr(u8)]
pub enum Layer {
    Base = 0,
    Symbols = 1,
    Media = 2,
    Programming = 3,
    Vim = 4,
}

impl Layer {
    /// Create Layer from its index
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Layer::Base),
            1 => Some(Layer::Symbols),
            2 => Some(Layer::Media),
            3 => Some(Layer::Programming),
            4 => Some(Layer::Vim),
            _ => None,
        }
    }

    /// Convert Layer to its index
    pub fn index(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Layer::Base => write!(f, "BASE"),
            Layer::Symbols => write!(f, "SYMB"),
            Layer::Media => write!(f, "MDIA"),
            Layer::Programming => write!(f, "PROG"),
            Layer::Vim => write!(f, "VIM"),
        }
    }
}

/// Index of the highest active layer in a layer bitmask, 0 when empty
pub fn highest_layer(layer_state: u32) -> u8 {
    if layer_state == 0 {
        0
    } else {
        (31 - layer_state.leading_zeros()) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_layer_from_index() {
        assert_eq!(Layer::from_index(0), Some(Layer::Base));
        assert_eq!(Layer::from_index(4), Some(Layer::Vim));
        assert_eq!(Layer::from_index(5), None);
        for layer in Layer::iter() {
            assert_eq!(Layer::from_index(layer.index()), Some(layer));
        }
    }

    #[test]
    fn test_highest_layer() {
        assert_eq!(highest_layer(0), 0);
        assert_eq!(highest_layer(0b1), 0);
        assert_eq!(highest_layer(0b110), 2);
        assert_eq!(highest_layer(1 << 4 | 1), 4);
        assert_eq!(highest_layer(u32::MAX), 31);
    }
}
