//! The PWM variant of the LED: duty-level writes on a free-running slice.
//!
//! The slice is configured once at construction; after that only the
//! compare level moves, between full brightness and zero. The counter
//! keeps wrapping regardless of the level.

use defmt::info;
use embassy_rp::clocks::clk_sys_freq;
use embassy_rp::pwm::{Config, Pwm};
use embassy_time::Duration;

use crate::led::{MorseLed, PWM_LEVEL_OFF, PWM_LEVEL_ON};

/// Integer slice clock divider. The slowest available rate, so the counter
/// wraps a handful of times per second.
const CLOCK_DIVIDER: u8 = 255;

/// Counter wrap value; compare levels span the full 16-bit range.
const TOP: u16 = u16::MAX;

/// An LED on a PWM slice, driven only to full-on or full-off duty.
pub struct PwmLed<'d> {
    pwm: Pwm<'d>,
    cfg: Config, // stored so duty updates keep the divider intact
    wrap_period: Duration,
}

impl<'d> PwmLed<'d> {
    /// Takes over a PWM output channel, e.g.
    /// `PwmLed::new(Pwm::new_output_b(p.PWM_SLICE4, p.PIN_25, Config::default()))`
    /// (GPIO 25, the Pico's onboard LED, is slice 4 channel B).
    #[must_use]
    pub fn new(mut pwm: Pwm<'d>) -> Self {
        let mut cfg = Config::default();
        cfg.top = TOP;
        cfg.divider = CLOCK_DIVIDER.into();
        cfg.compare_a = PWM_LEVEL_OFF;
        cfg.compare_b = PWM_LEVEL_OFF;
        cfg.enable = true;
        pwm.set_config(&cfg);

        let clk = u64::from(clk_sys_freq());
        let ticks_per_wrap = u64::from(CLOCK_DIVIDER) * (u64::from(TOP) + 1);
        let wrap_ms = (ticks_per_wrap * 1000).div_ceil(clk);
        info!(
            "pwm clk={}Hz div={} top={} wrap={}ms",
            clk, CLOCK_DIVIDER, TOP, wrap_ms
        );

        Self {
            pwm,
            cfg,
            wrap_period: Duration::from_millis(wrap_ms),
        }
    }

    /// Period between counter wraps under the configured divider.
    #[must_use]
    pub fn wrap_period(&self) -> Duration {
        self.wrap_period
    }

    /// Moves both compare levels so either output channel follows; the
    /// slice itself is never reconfigured after construction.
    fn set_level(&mut self, level: u16) {
        self.cfg.compare_a = level;
        self.cfg.compare_b = level;
        self.pwm.set_config(&self.cfg);
    }
}

impl MorseLed for PwmLed<'_> {
    fn set_on(&mut self) {
        self.set_level(PWM_LEVEL_ON);
    }

    fn set_off(&mut self) {
        self.set_level(PWM_LEVEL_OFF);
    }
}
