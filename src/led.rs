//! The on/off capability the players drive.

/// Full-brightness compare level for PWM-backed LEDs.
pub const PWM_LEVEL_ON: u16 = u16::MAX;

/// Dark compare level for PWM-backed LEDs.
pub const PWM_LEVEL_OFF: u16 = 0;

/// An LED that can be fully on or fully off. Writes are infallible at this
/// abstraction level; there are no intermediate brightness states.
pub trait MorseLed {
    fn set_on(&mut self);
    fn set_off(&mut self);
}
