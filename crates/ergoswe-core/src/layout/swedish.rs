// Ergoswe Swedish Layouts
// Swedish key aliases and the ASCII lookup tables for ISO and Mac-ISO boards

use crate::keycode::*;
use crate::layout::{LayoutTables, ModifierTable, ASCII_RANGE, DEFAULT_DEAD_KEY_FOLLOW_UP};
use crate::modifier::Modifier;

// Row 1
pub const SE_SECT: Keycode = KC_GRV; // §
pub const SE_1: Keycode = KC_1;
pub const SE_2: Keycode = KC_2;
pub const SE_3: Keycode = KC_3;
pub const SE_4: Keycode = KC_4;
pub const SE_5: Keycode = KC_5;
pub const SE_6: Keycode = KC_6;
pub const SE_7: Keycode = KC_7;
pub const SE_8: Keycode = KC_8;
pub const SE_9: Keycode = KC_9;
pub const SE_0: Keycode = KC_0;
pub const SE_PLUS: Keycode = KC_MINS; // +
pub const SE_ACUT: Keycode = KC_EQL; // ´ (dead)
// Row 2
pub const SE_ARNG: Keycode = KC_LBRC; // Å
pub const SE_DIAE: Keycode = KC_RBRC; // ¨ (dead)
// Row 3
pub const SE_ODIA: Keycode = KC_SCLN; // Ö
pub const SE_ADIA: Keycode = KC_QUOT; // Ä
pub const SE_QUOT: Keycode = KC_NUHS; // '
// Row 4
pub const SE_LABK: Keycode = KC_NUBS; // <
pub const SE_COMM: Keycode = KC_COMM;
pub const SE_DOT: Keycode = KC_DOT;
pub const SE_MINS: Keycode = KC_SLSH; // -

/// Apple ISO boards report the `§` and `<` keys with swapped usages.
pub mod mac_iso {
    use crate::keycode::{Keycode, KC_GRV, KC_NUBS};

    pub const SE_SECT: Keycode = KC_NUBS;
    pub const SE_LABK: Keycode = KC_GRV;
}

const XXXXXXX: Keycode = Keycode::NO;

#[rustfmt::skip]
const SWEDISH_KEYCODES: [Keycode; ASCII_RANGE] = [
    // NUL   SOH      STX      ETX      EOT      ENQ      ACK      BEL
    XXXXXXX, XXXXXXX, XXXXXXX, XXXXXXX, XXXXXXX, XXXXXXX, XXXXXXX, XXXXXXX,
    // BS    TAB      LF       VT       FF       CR       SO       SI
    KC_BSPC, KC_TAB,  KC_ENT,  XXXXXXX, XXXXXXX, XXXXXXX, XXXXXXX, XXXXXXX,
    // DLE   DC1      DC2      DC3      DC4      NAK      SYN      ETB
    XXXXXXX, XXXXXXX, XXXXXXX, XXXXXXX, XXXXXXX, XXXXXXX, XXXXXXX, XXXXXXX,
    // CAN   EM       SUB      ESC      FS       GS       RS       US
    XXXXXXX, XXXXXXX, XXXXXXX, KC_ESC,  XXXXXXX, XXXXXXX, XXXXXXX, XXXXXXX,
    //       !        "        #        $        %        &        '
    KC_SPC,  SE_1,    SE_2,    SE_3,    SE_4,    SE_5,    SE_6,    SE_QUOT,
    // (     )        *        +        ,        -        .        /
    SE_8,    SE_9,    SE_QUOT, SE_PLUS, SE_COMM, SE_MINS, SE_DOT,  SE_7,
    // 0     1        2        3        4        5        6        7
    SE_0,    SE_1,    SE_2,    SE_3,    SE_4,    SE_5,    SE_6,    SE_7,
    // 8     9        :        ;        <        =        >        ?
    SE_8,    SE_9,    SE_DOT,  SE_COMM, SE_LABK, SE_0,    SE_LABK, SE_PLUS,
    // @     A        B        C        D        E        F        G
    SE_2,    KC_A,    KC_B,    KC_C,    KC_D,    KC_E,    KC_F,    KC_G,
    // H     I        J        K        L        M        N        O
    KC_H,    KC_I,    KC_J,    KC_K,    KC_L,    KC_M,    KC_N,    KC_O,
    // P     Q        R        S        T        U        V        W
    KC_P,    KC_Q,    KC_R,    KC_S,    KC_T,    KC_U,    KC_V,    KC_W,
    // X     Y        Z        [        \        ]        ^        _
    KC_X,    KC_Y,    KC_Z,    SE_8,    SE_PLUS, SE_9,    SE_DIAE, SE_MINS,
    // `     a        b        c        d        e        f        g
    SE_ACUT, KC_A,    KC_B,    KC_C,    KC_D,    KC_E,    KC_F,    KC_G,
    // h     i        j        k        l        m        n        o
    KC_H,    KC_I,    KC_J,    KC_K,    KC_L,    KC_M,    KC_N,    KC_O,
    // p     q        r        s        t        u        v        w
    KC_P,    KC_Q,    KC_R,    KC_S,    KC_T,    KC_U,    KC_V,    KC_W,
    // x     y        z        {        |        }        ~        DEL
    KC_X,    KC_Y,    KC_Z,    SE_7,    SE_LABK, SE_0,    SE_DIAE, KC_DEL,
];

#[rustfmt::skip]
const SWEDISH_SHIFT: ModifierTable = ModifierTable::from_rows([
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 1, 1, 1, 0, 1, 1, 0], //   ! " # $ % & '
    [1, 1, 1, 0, 0, 0, 0, 1], // ( ) * + , - . /
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 1, 1, 0, 1, 1, 1], // 8 9 : ; < = > ?
    [0, 1, 1, 1, 1, 1, 1, 1],
    [1, 1, 1, 1, 1, 1, 1, 1],
    [1, 1, 1, 1, 1, 1, 1, 1],
    [1, 1, 1, 0, 0, 0, 1, 1], // X Y Z [ \ ] ^ _
    [1, 0, 0, 0, 0, 0, 0, 0], // ` a b c d e f g
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
]);

#[rustfmt::skip]
const SWEDISH_ALTGR: ModifierTable = ModifierTable::from_rows([
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 1, 0, 0, 0], // $
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [1, 0, 0, 0, 0, 0, 0, 0], // @
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 1, 1, 1, 0, 0], // [ \ ]
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 1, 1, 1, 1, 0], // { | } ~
]);

#[rustfmt::skip]
const SWEDISH_DEAD: ModifierTable = ModifierTable::from_rows([
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
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 1, 0], // ^
    [1, 0, 0, 0, 0, 0, 0, 0], // `
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 1, 0], // ~
]);

/// Exchange two keys everywhere in a keycode table
const fn swap_keys(
    mut table: [Keycode; ASCII_RANGE],
    a: Keycode,
    b: Keycode,
) -> [Keycode; ASCII_RANGE] {
    let mut i = 0;
    while i < ASCII_RANGE {
        if table[i].0 == a.0 {
            table[i] = b;
        } else if table[i].0 == b.0 {
            table[i] = a;
        }
        i += 1;
    }
    table
}

/// Swedish, PC ISO keyboard
pub static SWEDISH_ISO: LayoutTables = LayoutTables {
    keycodes: SWEDISH_KEYCODES,
    shift: SWEDISH_SHIFT,
    altgr: SWEDISH_ALTGR,
    dead: SWEDISH_DEAD,
    altgr_modifier: Modifier::RightAlt,
    dead_key_follow_up: DEFAULT_DEAD_KEY_FOLLOW_UP,
};

/// Swedish, Apple ISO keyboard
///
/// Same modifier tables; the `<`/`§` usages are swapped and Option (left
/// Alt) plays the AltGr role.
pub static SWEDISH_MAC_ISO: LayoutTables = LayoutTables {
    keycodes: swap_keys(SWEDISH_KEYCODES, SE_LABK, mac_iso::SE_LABK),
    shift: SWEDISH_SHIFT,
    altgr: SWEDISH_ALTGR,
    dead: SWEDISH_DEAD,
    altgr_modifier: Modifier::LeftAlt,
    dead_key_follow_up: DEFAULT_DEAD_KEY_FOLLOW_UP,
};
