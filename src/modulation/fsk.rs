use crate::bits::validate_bits;
use crate::carrier::tone;
use crate::error::Result;
use crate::timing::{ensure_positive, SegmentGrid};

use super::synthesize;

/// Tone offset from the carrier, in Hz, for binary FSK
pub const FSK_DEVIATION_HZ: f64 = 2.0;

/// The two FSK tones `(space, mark)` = `(fc - 2, fc + 2)`.
pub fn fsk_tones(carrier_freq: f64) -> (f64, f64) {
    (carrier_freq - FSK_DEVIATION_HZ, carrier_freq + FSK_DEVIATION_HZ)
}

/// Binary FSK: `cos(2π·(fc-2)·t)` for a 0, `cos(2π·(fc+2)·t)` for a 1.
///
/// Amplitude is always full; only the tone changes between bits.
pub fn modulate_fsk(bits: &[u8], bit_grid: &SegmentGrid, carrier_freq: f64) -> Result<Vec<f64>> {
    validate_bits(bits)?;
    ensure_positive("carrier frequency", carrier_freq)?;

    let (space, mark) = fsk_tones(carrier_freq);

    Ok(synthesize(bits, bit_grid, |bit, t| {
        let freq = if bit == 0 { space } else { mark };
        tone(freq, t, 0.0)
    }))
}
