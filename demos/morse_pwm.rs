//! Variant B: spells "HELLO WORLD" in Morse code by moving the onboard
//! LED's PWM duty level between full and zero. Playback runs on the
//! wrap-triggered task; after setup the main context only idles and logs.
#![no_std]
#![no_main]

use defmt::info;
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_rp::pwm::{Config, Pwm};
use morse_blink::{
    MorseTiming, Never, PWM_UNIT_MS, PwmLed, Result, WrapPlayer, WrapPlayerNotifier,
};
use panic_probe as _;

#[embassy_executor::main]
pub async fn main(spawner: Spawner) -> ! {
    match inner_main(spawner).await {
        Ok(never) => match never {},
        Err(err) => core::panic!("{err}"),
    }
}

async fn inner_main(spawner: Spawner) -> Result<Never> {
    info!("Starting PWM Morse blinker");
    let peripherals = embassy_rp::init(Default::default());

    // GPIO 25, the onboard LED, is PWM slice 4 channel B.
    let led = PwmLed::new(Pwm::new_output_b(
        peripherals.PWM_SLICE4,
        peripherals.PIN_25,
        Config::default(),
    ));

    static NOTIFIER: WrapPlayerNotifier = WrapPlayer::notifier();
    let player = WrapPlayer::new(led, MorseTiming::new(PWM_UNIT_MS), &NOTIFIER, spawner)?;

    // The LED is never touched from here again.
    loop {
        let replays = player.wait_replayed().await;
        info!("message replayed {} times", replays);
    }
}
