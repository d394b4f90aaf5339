//! Message Pulse Train
//!
//! Turns a bit sequence into the baseband message signal: each bit is held
//! for one bit duration (zero-order hold), producing a rectangular pulse
//! train with amplitude 0 or 1.
//!
//! **Layout**: `floor(sample_rate * bit_duration)` samples per bit, bits laid
//! out back to back, on a global time axis over `[0, bit_duration * n)`.

use crate::bits::validate_bits;
use crate::error::Result;
use crate::modulation::synthesize;
use crate::timing::SegmentGrid;
use crate::waveform::Waveform;

/// Generate the rectangular pulse train for `bits`.
///
/// # Arguments
/// * `bits` - Bits to send (0 or 1)
/// * `bit_duration` - Seconds per bit
/// * `sample_rate` - Samples per second
///
/// # Example
/// ```
/// use rustyshift::pulse;
///
/// let message = pulse::generate_message(&[1, 0], 1.0, 4.0)?;
/// assert_eq!(message.amplitude(), &[1.0, 1.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0]);
/// # Ok::<(), rustyshift::Error>(())
/// ```
pub fn generate_message(bits: &[u8], bit_duration: f64, sample_rate: f64) -> Result<Waveform> {
    validate_bits(bits)?;
    let grid = SegmentGrid::new("bit duration", bit_duration, sample_rate)?;

    let amplitude = synthesize(bits, &grid, |bit, _| bit as f64);

    Ok(Waveform::spanning(amplitude, bit_duration * bits.len() as f64))
}
