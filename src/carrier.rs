use core::f64::consts::PI;

use crate::error::Result;
use crate::timing::{ensure_positive, linspace, sample_count};
use crate::waveform::Waveform;

/// `cos(2π·freq·t + phase)`
pub(crate) fn tone(freq: f64, t: f64, phase: f64) -> f64 {
    libm::cos(2.0 * PI * freq * t + phase)
}

/// Sample a unit-amplitude cosine carrier over `[0, duration)`.
///
/// Produces `floor(sample_rate * duration)` samples.
///
/// # Example
/// ```
/// use rustyshift::carrier;
///
/// let carrier = carrier::generate_carrier(5.0, 1.0, 1000.0)?;
/// assert_eq!(carrier.len(), 1000);
/// assert_eq!(carrier.amplitude()[0], 1.0);
/// # Ok::<(), rustyshift::Error>(())
/// ```
pub fn generate_carrier(carrier_freq: f64, duration: f64, sample_rate: f64) -> Result<Waveform> {
    ensure_positive("carrier frequency", carrier_freq)?;
    let count = sample_count("carrier duration", duration, sample_rate)?;

    let time = linspace(duration, count);
    let amplitude = time.iter().map(|&t| tone(carrier_freq, t, 0.0)).collect();

    Ok(Waveform::spanning(amplitude, duration))
}
