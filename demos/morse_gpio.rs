//! Variant A: spells "HELLO WORLD" in Morse code on the Pico's onboard LED
//! as a plain digital output, looping forever on the main context.
#![no_std]
#![no_main]

use defmt::info;
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Level, Output};
use morse_blink::{DIGITAL_UNIT_MS, DigitalLed, MorsePlayer, MorseTiming, Never, Result};
use panic_probe as _;

#[embassy_executor::main]
pub async fn main(spawner: Spawner) -> ! {
    match inner_main(spawner).await {
        Ok(never) => match never {},
        Err(err) => core::panic!("{err}"),
    }
}

async fn inner_main(_spawner: Spawner) -> Result<Never> {
    info!("Starting GPIO Morse blinker");
    let peripherals = embassy_rp::init(Default::default());

    let led = DigitalLed::new(Output::new(peripherals.PIN_25, Level::Low));
    let mut player = MorsePlayer::new(led, MorseTiming::new(DIGITAL_UNIT_MS));

    loop {
        player.play_message().await?;
    }
}
