//! End-to-end synthesis of the 4-bit reference example
//!
//! bits = [1, 0, 1, 0], 1 bit/s, 100 samples/s, 5 Hz carrier: every
//! waveform holds 4 blocks of 100 samples and changes behaviour at samples
//! 100, 200 and 300.

use test_utils::{max_abs_diff, spectral_peak, zero_crossings};

use rustyshift::carrier::generate_carrier;
use rustyshift::pulse::generate_message;
use rustyshift::{pipeline, ModulationConfig, Modulator, Scheme};

const BITS: [u8; 4] = [1, 0, 1, 0];
const SPB: usize = 100;

fn config() -> ModulationConfig {
    ModulationConfig {
        bit_rate: 1.0,
        carrier_freq: 5.0,
        sample_rate: 100.0,
        num_bits: BITS.len(),
        ..Default::default()
    }
}

fn block(samples: &[f64], index: usize) -> &[f64] {
    &samples[index * SPB..(index + 1) * SPB]
}

#[test]
fn test_message_alternates_blocks_of_ones_and_zeros() {
    let message = generate_message(&BITS, 1.0, 100.0).unwrap();
    assert_eq!(message.len(), 400);

    for (index, &bit) in BITS.iter().enumerate() {
        assert!(block(message.amplitude(), index).iter().all(|&s| s == bit as f64));
    }
}

#[test]
fn test_ask_is_silent_on_zero_bits() {
    let modulator = Modulator::new(&config()).unwrap();
    let ask = modulator.modulate(Scheme::Ask, &BITS).unwrap();
    let per_bit_carrier = generate_carrier(5.0, 1.0, 100.0).unwrap();

    assert_eq!(ask.len(), 400);
    assert!(ask.amplitude()[100..200].iter().all(|&s| s == 0.0));
    assert!(ask.amplitude()[300..400].iter().all(|&s| s == 0.0));
    assert_eq!(block(ask.amplitude(), 0), per_bit_carrier.amplitude());
    assert_eq!(block(ask.amplitude(), 2), per_bit_carrier.amplitude());
}

#[test]
fn test_fsk_switches_tone_at_bit_boundaries() {
    let modulator = Modulator::new(&config()).unwrap();
    let fsk = modulator.modulate(Scheme::Fsk, &BITS).unwrap();

    for (index, &bit) in BITS.iter().enumerate() {
        let segment = block(fsk.amplitude(), index);
        let (expected_freq, expected_crossings) = if bit == 0 { (3.0, 6) } else { (7.0, 14) };
        assert_eq!(spectral_peak(segment, 100.0), expected_freq, "bit {index}");
        assert_eq!(zero_crossings(segment), expected_crossings, "bit {index}");
    }
}

#[test]
fn test_psk_flips_phase_at_bit_boundaries() {
    let modulator = Modulator::new(&config()).unwrap();
    let psk = modulator.modulate(Scheme::Psk, &BITS).unwrap();
    let a = psk.amplitude();

    let negated: Vec<f64> = block(a, 1).iter().map(|s| -s).collect();
    assert!(max_abs_diff(block(a, 0), &negated) < 1e-9);
    assert!(max_abs_diff(block(a, 2), &negated) < 1e-9);
    assert_eq!(block(a, 1), block(a, 3));

    // each boundary jumps from the end of one phase to the start of the other
    assert!((a[100] - 1.0).abs() < 1e-12);
    assert!((a[200] + 1.0).abs() < 1e-12);
}

#[test]
fn test_binary_demo_figure() {
    let panels = pipeline::binary_demo(&config(), &BITS).unwrap();
    assert_eq!(panels.len(), 5);

    for panel in &panels {
        assert_eq!(panel.waveform.len(), 400, "{}", panel.title);
        assert_eq!(panel.waveform.time()[0], 0.0);
        assert!(*panel.waveform.time().last().unwrap() < 4.0);
    }
}
