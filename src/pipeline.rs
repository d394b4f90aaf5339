//! Demo pipelines
//!
//! Wire the generators and modulators together the way the two demo
//! figures present them, returning the panels ready for [`crate::plot`].

use plotters::style::{BLACK, BLUE, GREEN, MAGENTA, RED};
use tracing::{info, instrument};

use crate::bits::validate_bits;
use crate::carrier::generate_carrier;
use crate::config::ModulationConfig;
use crate::error::Result;
use crate::modulation::{Modulator, Scheme};
use crate::plot::{Panel, TAB_RED};
use crate::pulse::generate_message;

/// Message, carrier, ASK, FSK and PSK panels for `bits`.
///
/// Durations follow `bits.len()`; `config.num_bits` only sizes random
/// generation.
#[instrument(skip(config, bits), fields(bits = bits.len()))]
pub fn binary_demo(config: &ModulationConfig, bits: &[u8]) -> Result<Vec<Panel>> {
    validate_bits(bits)?;
    let modulator = Modulator::new(config)?;
    let duration = config.total_duration(bits.len());

    info!(
        bit_rate = config.bit_rate,
        carrier_freq = config.carrier_freq,
        sample_rate = config.sample_rate,
        "synthesizing binary schemes"
    );

    let message = generate_message(bits, config.bit_duration(), config.sample_rate)?;
    let carrier = generate_carrier(config.carrier_freq, duration, config.sample_rate)?;

    let mut panels = vec![
        Panel::new("Message Signal", BLACK, message),
        Panel::new("Carrier Signal", MAGENTA, carrier),
    ];

    for (scheme, color) in [(Scheme::Ask, BLUE), (Scheme::Fsk, GREEN), (Scheme::Psk, RED)] {
        let waveform = modulator.modulate(scheme, bits)?;
        panels.push(Panel::new(format!("{scheme} Modulated Signal"), color, waveform));
    }

    Ok(panels)
}

/// Message, carrier and M-ary ASK panels for `bits`, with M = `config.levels`.
///
/// The M-ary panel covers the zero-padded bit count, so it can run past the
/// message and carrier by up to `log2(M) - 1` bits.
#[instrument(skip(config, bits), fields(bits = bits.len(), m = config.levels))]
pub fn mary_demo(config: &ModulationConfig, bits: &[u8]) -> Result<Vec<Panel>> {
    validate_bits(bits)?;
    let modulator = Modulator::new(config)?;
    let duration = config.total_duration(bits.len());
    let padded_duration = config.padded_duration(bits.len())?;

    info!(
        levels = config.levels,
        duration,
        padded_duration,
        bit_rate = config.bit_rate,
        carrier_freq = config.carrier_freq,
        sample_rate = config.sample_rate,
        "synthesizing M-ary ASK"
    );

    let message = generate_message(bits, config.bit_duration(), config.sample_rate)?;
    let carrier = generate_carrier(config.carrier_freq, duration, config.sample_rate)?;
    let scheme = Scheme::MaryAsk { m: config.levels };
    let modulated = modulator.modulate(scheme, bits)?;

    Ok(vec![
        Panel::new("Message Signal (Rectangular Pulses)", BLACK, message),
        Panel::new(
            format!("Carrier Signal (f_c = {} Hz)", config.carrier_freq),
            MAGENTA,
            carrier,
        ),
        Panel::new(format!("{scheme} Modulated Signal"), TAB_RED, modulated)
            .with_y_label("Amplitude Levels"),
    ])
}
