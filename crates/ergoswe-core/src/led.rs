// Ergoswe Layer Indicator
// Reflects the active layer on the board LED and the three right-hand LEDs

use std::fmt;

use crate::layer::highest_layer;

/// On/off state of the indicator LEDs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LedState {
    pub board: bool,
    pub right: [bool; 3],
}

impl LedState {
    /// LEDs for a layer index
    ///
    /// Layers 1-3 light their own LED, 4 lights 1+2, 5 lights 1+3; anything
    /// else leaves every LED off. The board LED is always off.
    pub fn for_layer(layer: u8) -> Self {
        let right = match layer {
            1 => [true, false, false],
            2 => [false, true, false],
            3 => [false, false, true],
            4 => [true, true, false],
            5 => [true, false, true],
            _ => [false, false, false],
        };
        Self {
            board: false,
            right,
        }
    }

    /// LEDs for a full layer bitmask, using its highest active layer
    pub fn for_layer_state(layer_state: u32) -> Self {
        Self::for_layer(highest_layer(layer_state))
    }

    pub fn any_on(&self) -> bool {
        self.board || self.right.iter().any(|on| *on)
    }
}

impl fmt::Display for LedState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = |on: bool| if on { '*' } else { '.' };
        write!(
            f,
            "board {} | right {}{}{}",
            mark(self.board),
            mark(self.right[0]),
            mark(self.right[1]),
            mark(self.right[2])
        )
    }
}

/// Host side of the indicators
pub trait LedDriver {
    fn set_board(&mut self, on: bool);
    fn set_right(&mut self, index: usize, on: bool);
}

/// Push a state to the LEDs, everything off first
pub fn apply<D: LedDriver + ?Sized>(driver: &mut D, state: LedState) {
    driver.set_board(false);
    for index in 0..3 {
        driver.set_right(index, false);
    }
    if state.board {
        driver.set_board(true);
    }
    for (index, on) in state.right.iter().enumerate() {
        if *on {
            driver.set_right(index, true);
        }
    }
}
