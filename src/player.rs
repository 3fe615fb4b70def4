//! Paces a message through an LED with Embassy timer waits.

use defmt::info;
use embassy_time::Timer;

use crate::error::Result;
use crate::led::MorseLed;
use crate::morse::{HELLO_WORLD, Letter, Symbol, Word};
use crate::pulse::{Step, message_steps};
use crate::timing::MorseTiming;

/// Plays Morse symbols on an LED, blocking the calling context inside its
/// timed waits. Holds no state between messages other than the LED itself.
pub struct MorsePlayer<Led> {
    led: Led,
    timing: MorseTiming,
}

impl<Led: MorseLed> MorsePlayer<Led> {
    #[must_use]
    pub fn new(led: Led, timing: MorseTiming) -> Self {
        Self { led, timing }
    }

    /// One dot or dash: on for the symbol's duration, then the one-unit gap.
    pub async fn play_symbol(&mut self, symbol: Symbol) {
        self.step(Step::On(self.timing.symbol_on_ms(symbol))).await;
        self.step(Step::Off(self.timing.symbol_gap_ms(symbol)))
            .await;
    }

    /// A letter's symbols followed by the three-unit letter gap.
    pub async fn play_letter(&mut self, letter: Letter) {
        for &symbol in letter.symbols() {
            self.play_symbol(symbol).await;
        }
        self.step(Step::Off(self.timing.letter_gap_ms())).await;
    }

    /// A word's letters followed by the seven-unit word gap.
    pub async fn play_word(&mut self, word: Word) {
        for &letter in word {
            self.play_letter(letter).await;
        }
        self.step(Step::Off(self.timing.word_gap_ms())).await;
    }

    /// Exactly one full "HELLO WORLD" and back; call in a loop to repeat.
    ///
    /// # Errors
    ///
    /// `Error::PlanCapacity` if the step plan overflows; the fixed message
    /// never does.
    pub async fn play_message(&mut self) -> Result<()> {
        info!(
            "playing HELLO WORLD, {}ms at unit {}ms",
            self.timing.message_ms(HELLO_WORLD),
            self.timing.unit_ms()
        );
        let plan = message_steps(self.timing, HELLO_WORLD)?;
        for &step in &plan {
            self.step(step).await;
        }
        Ok(())
    }

    async fn step(&mut self, step: Step) {
        match step {
            Step::On(_) => self.led.set_on(),
            Step::Off(_) => self.led.set_off(),
        }
        Timer::after_millis(step.ms()).await;
    }
}
