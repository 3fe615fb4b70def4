//! Morse code tables: the symbols and the letters needed for "HELLO WORLD".
//!
//! Letters are a closed enumeration mapped to fixed symbol slices. The
//! tables are constant for the life of the process; nothing here mutates.

/// One element of a Morse letter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Symbol {
    Dot,
    Dash,
}

impl Symbol {
    /// On-duration of the symbol, in timing units (dot 1, dash 3).
    #[must_use]
    pub const fn on_units(self) -> u64 {
        match self {
            Self::Dot => 1,
            Self::Dash => 3,
        }
    }

    /// Off-duration that follows every symbol (the inter-symbol gap).
    #[must_use]
    pub const fn off_units(self) -> u64 {
        1
    }
}

/// The letters used by "HELLO WORLD".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Letter {
    D,
    E,
    H,
    L,
    O,
    R,
    W,
}

impl Letter {
    /// The letter's dot/dash sequence.
    #[must_use]
    pub const fn symbols(self) -> &'static [Symbol] {
        use Symbol::{Dash, Dot};
        match self {
            Self::D => &[Dash, Dot, Dot],
            Self::E => &[Dot],
            Self::H => &[Dot, Dot, Dot, Dot],
            Self::L => &[Dot, Dash, Dot, Dot],
            Self::O => &[Dash, Dash, Dash],
            Self::R => &[Dot, Dash, Dot],
            Self::W => &[Dot, Dash, Dash],
        }
    }
}

/// An ordered run of letters; an inter-word gap follows each word.
pub type Word = &'static [Letter];

/// The fixed message, as two words.
pub const HELLO_WORLD: &[Word] = &[
    &[Letter::H, Letter::E, Letter::L, Letter::L, Letter::O],
    &[Letter::W, Letter::O, Letter::R, Letter::L, Letter::D],
];
