//! Host-level tests for the Morse tables and timing arithmetic.

use morse_blink::{DIGITAL_UNIT_MS, HELLO_WORLD, Letter, MorseTiming, PWM_UNIT_MS, Symbol};

use Symbol::{Dash, Dot};

#[test]
fn letter_tables_match_morse_code() {
    assert_eq!(Letter::H.symbols(), &[Dot, Dot, Dot, Dot]);
    assert_eq!(Letter::E.symbols(), &[Dot]);
    assert_eq!(Letter::L.symbols(), &[Dot, Dash, Dot, Dot]);
    assert_eq!(Letter::O.symbols(), &[Dash, Dash, Dash]);
    assert_eq!(Letter::W.symbols(), &[Dot, Dash, Dash]);
    assert_eq!(Letter::R.symbols(), &[Dot, Dash, Dot]);
    assert_eq!(Letter::D.symbols(), &[Dash, Dot, Dot]);
}

#[test]
fn symbol_durations_are_fixed_multiples() {
    assert_eq!(Dot.on_units(), 1);
    assert_eq!(Dash.on_units(), 3);
    assert_eq!(Dot.off_units(), 1);
    assert_eq!(Dash.off_units(), 1);
}

#[test]
fn gap_multipliers_match_timing_discipline() {
    let timing = MorseTiming::new(100);
    assert_eq!(timing.symbol_on_ms(Dot), 100);
    assert_eq!(timing.symbol_on_ms(Dash), 300);
    assert_eq!(timing.symbol_gap_ms(Dot), 100);
    assert_eq!(timing.symbol_gap_ms(Dash), 100);
    assert_eq!(timing.letter_gap_ms(), 300);
    assert_eq!(timing.word_gap_ms(), 700);
}

#[test]
fn letter_duration_closed_form() {
    let timing = MorseTiming::new(100);
    // H: four dots at (100 on + 100 off) each, plus the 300 letter gap.
    assert_eq!(timing.letter_ms(Letter::H), 1100);
    // E: one dot plus the letter gap.
    assert_eq!(timing.letter_ms(Letter::E), 500);
    // O: three dashes at (300 on + 100 off) each, plus the letter gap.
    assert_eq!(timing.letter_ms(Letter::O), 1500);
}

#[test]
fn message_duration_is_134_units() {
    // 19 dots + 13 dashes on-time (58u), 32 symbol gaps, 10 letter gaps
    // (30u), 2 word gaps (14u): 134 units total.
    for unit in [1, DIGITAL_UNIT_MS, PWM_UNIT_MS] {
        let timing = MorseTiming::new(unit);
        assert_eq!(timing.message_ms(HELLO_WORLD), 134 * unit);
    }
}

#[test]
fn message_is_hello_world() {
    use Letter::{D, E, H, L, O, R, W};
    assert_eq!(HELLO_WORLD, &[&[H, E, L, L, O][..], &[W, O, R, L, D][..]]);
}
