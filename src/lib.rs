//! Building blocks for a Morse-code "HELLO WORLD" blinker on the
//! Raspberry Pi Pico.
//!
//! The Morse tables, timing arithmetic, and pulse-plan generation are pure
//! and compile for the host, so they can be unit tested without hardware.
//! The GPIO/PWM drivers and the players that actually pace the LED are
//! gated behind the `pico1` feature.
#![no_std]

mod error;
mod led;
mod morse;
mod never;
mod pulse;
mod timing;

#[cfg(feature = "pico1")]
mod digital_led;
#[cfg(feature = "pico1")]
mod player;
#[cfg(feature = "pico1")]
mod pwm_led;
#[cfg(feature = "pico1")]
mod wrap_player;

// Re-export commonly used items
pub use error::{Error, Result};
pub use led::{MorseLed, PWM_LEVEL_OFF, PWM_LEVEL_ON};
pub use morse::{HELLO_WORLD, Letter, Symbol, Word};
pub use never::Never;
pub use pulse::{MESSAGE_STEP_CAPACITY, Step, StepPlan, message_steps};
pub use timing::{DIGITAL_UNIT_MS, MorseTiming, PWM_UNIT_MS};

#[cfg(feature = "pico1")]
pub use digital_led::DigitalLed;
#[cfg(feature = "pico1")]
pub use player::MorsePlayer;
#[cfg(feature = "pico1")]
pub use pwm_led::PwmLed;
#[cfg(feature = "pico1")]
pub use wrap_player::{WrapPlayer, WrapPlayerNotifier};
