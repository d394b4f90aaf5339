use snafu::ensure;

use crate::carrier::tone;
use crate::error::{EmptySequenceSnafu, Result, SymbolOutOfRangeSnafu};
use crate::symbol::{amplitude_level, bits_per_symbol};
use crate::timing::{ensure_positive, SegmentGrid};
use crate::waveform::Waveform;

use super::synthesize;

/// M-ary ASK: each symbol `s` becomes `level[s]·cos(2π·fc·t)` for one symbol duration.
///
/// Segments are synthesized on a per-symbol grid of `floor(fs·Ts)` samples
/// that restarts at zero, while the returned time axis is a single linspace
/// over `[0, Ts·len(symbols))`.
///
/// # Arguments
/// * `symbols` - Symbol indices, each `< m`
/// * `m` - Number of amplitude levels (power of two)
/// * `carrier_freq` - Carrier frequency in Hz
/// * `sample_rate` - Samples per second
/// * `symbol_duration` - Seconds per symbol
pub fn modulate_mary_ask(
    symbols: &[usize],
    m: usize,
    carrier_freq: f64,
    sample_rate: f64,
    symbol_duration: f64,
) -> Result<Waveform> {
    bits_per_symbol(m)?;
    ensure!(!symbols.is_empty(), EmptySequenceSnafu { what: "symbol" });
    if let Some((index, &symbol)) = symbols.iter().enumerate().find(|&(_, &s)| s >= m) {
        return SymbolOutOfRangeSnafu { index, symbol, m }.fail();
    }
    ensure_positive("carrier frequency", carrier_freq)?;
    let grid = SegmentGrid::new("symbol duration", symbol_duration, sample_rate)?;

    let amplitude = synthesize(symbols, &grid, |symbol, t| {
        amplitude_level(symbol, m) * tone(carrier_freq, t, 0.0)
    });

    Ok(Waveform::spanning(amplitude, symbol_duration * symbols.len() as f64))
}
