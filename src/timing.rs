//! Pulse and gap durations, all derived from a single base unit.

use crate::morse::{Letter, Symbol, Word};

/// Base unit of the synchronous GPIO variant.
pub const DIGITAL_UNIT_MS: u64 = 100;

/// Base unit of the wrap-driven PWM variant.
pub const PWM_UNIT_MS: u64 = 200;

/// Derives every on/off duration from one base unit by fixed multipliers:
/// dot-on 1x, dash-on 3x, inter-symbol gap 1x, inter-letter gap 3x,
/// inter-word gap 7x.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MorseTiming {
    unit_ms: u64,
}

impl MorseTiming {
    #[must_use]
    pub const fn new(unit_ms: u64) -> Self {
        Self { unit_ms }
    }

    #[must_use]
    pub const fn unit_ms(self) -> u64 {
        self.unit_ms
    }

    /// On-duration for a symbol.
    #[must_use]
    pub const fn symbol_on_ms(self, symbol: Symbol) -> u64 {
        symbol.on_units() * self.unit_ms
    }

    /// Gap after every symbol.
    #[must_use]
    pub const fn symbol_gap_ms(self, symbol: Symbol) -> u64 {
        symbol.off_units() * self.unit_ms
    }

    /// Gap after every letter.
    #[must_use]
    pub const fn letter_gap_ms(self) -> u64 {
        3 * self.unit_ms
    }

    /// Gap after every word.
    #[must_use]
    pub const fn word_gap_ms(self) -> u64 {
        7 * self.unit_ms
    }

    /// Total wall-clock time for one letter, including its trailing gap.
    #[must_use]
    pub fn letter_ms(self, letter: Letter) -> u64 {
        let symbols: u64 = letter
            .symbols()
            .iter()
            .map(|&symbol| self.symbol_on_ms(symbol) + self.symbol_gap_ms(symbol))
            .sum();
        symbols + self.letter_gap_ms()
    }

    /// Total wall-clock time for a full message, closed form.
    ///
    /// For "HELLO WORLD" this is 134x the base unit: 19 dots, 13 dashes,
    /// 32 symbol gaps, 10 letter gaps, and 2 word gaps.
    #[must_use]
    pub fn message_ms(self, message: &[Word]) -> u64 {
        message
            .iter()
            .map(|word| {
                let letters: u64 = word.iter().map(|&letter| self.letter_ms(letter)).sum();
                letters + self.word_gap_ms()
            })
            .sum()
    }
}
