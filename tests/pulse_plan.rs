//! Host-level tests for pulse-plan generation: the literal timed on/off
//! sequence both players execute.

use morse_blink::{
    HELLO_WORLD, MorseTiming, PWM_LEVEL_OFF, PWM_LEVEL_ON, Step, message_steps,
};

use Step::{Off, On};

/// The full "HELLO WORLD" sequence at a 100 ms unit, written out.
const EXPECTED_100MS: &[Step] = &[
    // H ....
    On(100), Off(100), On(100), Off(100), On(100), Off(100), On(100), Off(100), Off(300),
    // E .
    On(100), Off(100), Off(300),
    // L .-..
    On(100), Off(100), On(300), Off(100), On(100), Off(100), On(100), Off(100), Off(300),
    // L .-..
    On(100), Off(100), On(300), Off(100), On(100), Off(100), On(100), Off(100), Off(300),
    // O ---
    On(300), Off(100), On(300), Off(100), On(300), Off(100), Off(300),
    // end of word
    Off(700),
    // W .--
    On(100), Off(100), On(300), Off(100), On(300), Off(100), Off(300),
    // O ---
    On(300), Off(100), On(300), Off(100), On(300), Off(100), Off(300),
    // R .-.
    On(100), Off(100), On(300), Off(100), On(100), Off(100), Off(300),
    // L .-..
    On(100), Off(100), On(300), Off(100), On(100), Off(100), On(100), Off(100), Off(300),
    // D -..
    On(300), Off(100), On(100), Off(100), On(100), Off(100), Off(300),
    // end of word
    Off(700),
];

#[test]
fn end_to_end_sequence_at_100ms() {
    let plan = message_steps(MorseTiming::new(100), HELLO_WORLD).unwrap();
    assert_eq!(plan.as_slice(), EXPECTED_100MS);
}

#[test]
fn plan_duration_matches_closed_form() {
    for unit in [1, 100, 200] {
        let timing = MorseTiming::new(unit);
        let plan = message_steps(timing, HELLO_WORLD).unwrap();
        let total: u64 = plan.iter().map(|step| step.ms()).sum();
        assert_eq!(total, timing.message_ms(HELLO_WORLD));
        assert_eq!(total, 134 * unit);
    }
}

#[test]
fn replaying_produces_identical_sequences() {
    let timing = MorseTiming::new(100);
    let first = message_steps(timing, HELLO_WORLD).unwrap();
    for _ in 0..10 {
        assert_eq!(message_steps(timing, HELLO_WORLD).unwrap(), first);
    }
}

#[test]
fn every_pulse_is_a_well_formed_dot_or_dash() {
    // Regardless of position: a dot is On(1u) then Off(1u), a dash is
    // On(3u) then Off(1u).
    let unit = 200;
    let plan = message_steps(MorseTiming::new(unit), HELLO_WORLD).unwrap();
    for (index, step) in plan.iter().enumerate() {
        if let On(on_ms) = step {
            assert!(*on_ms == unit || *on_ms == 3 * unit, "bad pulse width");
            assert_eq!(plan[index + 1], Off(unit), "pulse must end in a unit gap");
        }
    }
}

#[test]
fn gaps_stay_separate_steps() {
    // The letter gap is its own Off step after the symbol's own gap, not a
    // merged 4-unit silence.
    let plan = message_steps(MorseTiming::new(100), HELLO_WORLD).unwrap();
    // H's last dot: On(100), Off(100), then the letter gap Off(300).
    assert_eq!(&plan[6..9], &[On(100), Off(100), Off(300)]);
    let off_totals: (usize, usize, usize) = plan.iter().fold((0, 0, 0), |acc, step| match step {
        Off(100) => (acc.0 + 1, acc.1, acc.2),
        Off(300) => (acc.0, acc.1 + 1, acc.2),
        Off(700) => (acc.0, acc.1, acc.2 + 1),
        _ => acc,
    });
    // 32 symbol gaps, 10 letter gaps, 2 word gaps.
    assert_eq!(off_totals, (32, 10, 2));
}

#[test]
fn pwm_levels_are_all_or_nothing() {
    assert_eq!(PWM_LEVEL_ON, 65535);
    assert_eq!(PWM_LEVEL_OFF, 0);
}
