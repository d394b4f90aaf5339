use core::f64::consts::PI;

use crate::bits::validate_bits;
use crate::carrier::tone;
use crate::error::Result;
use crate::timing::{ensure_positive, SegmentGrid};

use super::synthesize;

/// Binary PSK: `cos(2π·fc·t)` for a 0, `cos(2π·fc·t + π)` for a 1.
pub fn modulate_psk(bits: &[u8], bit_grid: &SegmentGrid, carrier_freq: f64) -> Result<Vec<f64>> {
    validate_bits(bits)?;
    ensure_positive("carrier frequency", carrier_freq)?;

    Ok(synthesize(bits, bit_grid, |bit, t| {
        let phase = if bit == 0 { 0.0 } else { PI };
        tone(carrier_freq, t, phase)
    }))
}
