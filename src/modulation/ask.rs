use crate::bits::validate_bits;
use crate::carrier::tone;
use crate::error::Result;
use crate::timing::{ensure_positive, SegmentGrid};

use super::synthesize;

/// On/off keying: silence for a 0, the full carrier `cos(2π·fc·t)` for a 1.
///
/// `bit_grid` is the local time grid of one bit; every bit restarts on it.
/// Returns `bit_grid.len() * bits.len()` samples.
pub fn modulate_ask(bits: &[u8], bit_grid: &SegmentGrid, carrier_freq: f64) -> Result<Vec<f64>> {
    validate_bits(bits)?;
    ensure_positive("carrier frequency", carrier_freq)?;

    Ok(synthesize(bits, bit_grid, |bit, t| {
        bit as f64 * tone(carrier_freq, t, 0.0)
    }))
}
