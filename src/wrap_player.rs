//! Wrap-driven playback: the message replays on a dedicated task that is
//! re-triggered at the PWM slice's counter-wrap period.
//!
//! The hardware original ran the whole message inside the wrap interrupt
//! handler, monopolizing it for the message duration. That quirk is kept:
//! the task plays the full message per trigger, is not reentrant, and
//! wraps that elapse mid-message fire back to back afterwards, the way a
//! latched interrupt would.

use defmt::{error, info};
use embassy_executor::Spawner;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::Ticker;

use crate::error::Result;
use crate::player::MorsePlayer;
use crate::pwm_led::PwmLed;
use crate::timing::MorseTiming;

/// A handle to the wrap-driven player task.
pub struct WrapPlayer(&'static WrapPlayerNotifier);

/// Carries the running replay count from the playback task to the idle
/// main context.
pub type WrapPlayerNotifier = Signal<CriticalSectionRawMutex, u32>;

impl WrapPlayer {
    /// Starts wrap-driven playback, which entails spawning an Embassy task.
    ///
    /// # Arguments
    ///
    /// * `led` - The PWM-backed LED; its configured wrap period sets the
    ///   trigger cadence.
    /// * `timing` - The base unit for the message.
    /// * `notifier` - The static notifier the task reports replays on.
    ///   Create it with `WrapPlayer::notifier()`.
    /// * `spawner` - The spawner for the playback task.
    ///
    /// # Errors
    ///
    /// `Error::TaskSpawn` if the task cannot be spawned.
    #[must_use = "Must be used to manage the spawned task"]
    pub fn new(
        led: PwmLed<'static>,
        timing: MorseTiming,
        notifier: &'static WrapPlayerNotifier,
        spawner: Spawner,
    ) -> Result<Self> {
        spawner.spawn(wrap_loop(led, timing, notifier))?;
        Ok(Self(notifier))
    }

    /// Creates the notifier. Assign it to a static and pass it to
    /// `WrapPlayer::new()`.
    #[must_use]
    pub const fn notifier() -> WrapPlayerNotifier {
        Signal::new()
    }

    /// Waits for the next completed replay and returns the running count.
    pub async fn wait_replayed(&self) -> u32 {
        let Self(notifier) = self;
        notifier.wait().await
    }
}

#[embassy_executor::task]
async fn wrap_loop(
    led: PwmLed<'static>,
    timing: MorseTiming,
    notifier: &'static WrapPlayerNotifier,
) -> ! {
    let mut ticker = Ticker::every(led.wrap_period());
    let mut player = MorsePlayer::new(led, timing);
    let mut replays: u32 = 0;
    loop {
        ticker.next().await;
        if let Err(err) = player.play_message().await {
            error!("playback failed: {}", defmt::Debug2Format(&err));
            continue;
        }
        replays = replays.wrapping_add(1);
        info!("replay {} complete", replays);
        notifier.signal(replays);
    }
}
