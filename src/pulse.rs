//! Flattens a message into the literal timed on/off sequence the LED plays.

use heapless::Vec;

use crate::error::{Error, Result};
use crate::morse::Word;
use crate::timing::MorseTiming;

/// One timed LED state, duration in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Step {
    On(u64),
    Off(u64),
}

impl Step {
    /// Duration of the step, whichever state it drives.
    #[must_use]
    pub const fn ms(self) -> u64 {
        match self {
            Self::On(ms) | Self::Off(ms) => ms,
        }
    }
}

/// Upper bound on steps in one message plan. "HELLO WORLD" needs 76:
/// 32 symbols at two steps each, 10 letter gaps, 2 word gaps.
pub const MESSAGE_STEP_CAPACITY: usize = 96;

/// A full message flattened to steps.
pub type StepPlan = Vec<Step, MESSAGE_STEP_CAPACITY>;

/// Builds the step plan for one full message.
///
/// Gap steps stay separate: a dot at unit 100 contributes `On(100), Off(100)`
/// and the letter it ends adds its own `Off(300)`, so the plan is exactly
/// the sequence of hardware writes and waits the player performs.
///
/// # Errors
///
/// `Error::PlanCapacity` if the message does not fit `MESSAGE_STEP_CAPACITY`;
/// the fixed message always fits.
pub fn message_steps(timing: MorseTiming, message: &[Word]) -> Result<StepPlan> {
    let mut plan = StepPlan::new();
    for word in message {
        for &letter in *word {
            for &symbol in letter.symbols() {
                push(&mut plan, Step::On(timing.symbol_on_ms(symbol)))?;
                push(&mut plan, Step::Off(timing.symbol_gap_ms(symbol)))?;
            }
            push(&mut plan, Step::Off(timing.letter_gap_ms()))?;
        }
        push(&mut plan, Step::Off(timing.word_gap_ms()))?;
    }
    Ok(plan)
}

fn push(plan: &mut StepPlan, step: Step) -> Result<()> {
    plan.push(step).map_err(|_| Error::PlanCapacity)
}
