//! Digital modulators
//!
//! Each scheme synthesizes one segment per bit (or symbol) on a local grid
//! that restarts at `t = 0`, then lays the segments out back to back. The
//! output buffer is allocated once at its final size.

use core::fmt;

use tracing::{debug, instrument};

use crate::config::ModulationConfig;
use crate::error::Result;
use crate::symbol::{bits_per_symbol, bits_to_symbols};
use crate::timing::SegmentGrid;
use crate::waveform::Waveform;

pub mod ask;
pub mod fsk;
pub mod mask;
pub mod psk;

pub use ask::modulate_ask;
pub use fsk::{modulate_fsk, FSK_DEVIATION_HZ};
pub use mask::modulate_mary_ask;
pub use psk::modulate_psk;

/// Fill one segment per unit by evaluating `sample(unit, t)` on the local grid.
pub(crate) fn synthesize<T: Copy>(
    units: &[T],
    grid: &SegmentGrid,
    mut sample: impl FnMut(T, f64) -> f64,
) -> Vec<f64> {
    let samples_per_unit = grid.len();
    let mut samples = vec![0.0; units.len() * samples_per_unit];

    for (segment, &unit) in samples.chunks_exact_mut(samples_per_unit).zip(units) {
        for (out, &t) in segment.iter_mut().zip(grid.times()) {
            *out = sample(unit, t);
        }
    }

    samples
}

/// Modulation scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    /// On/off keying
    Ask,
    /// Binary FSK at `fc ± 2 Hz`
    Fsk,
    /// Binary PSK, phase 0 or π
    Psk,
    /// M-ary ASK with levels `2i - (M-1)`
    MaryAsk { m: usize },
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scheme::Ask => write!(f, "ASK"),
            Scheme::Fsk => write!(f, "FSK"),
            Scheme::Psk => write!(f, "PSK"),
            Scheme::MaryAsk { m } => write!(f, "{m}-ary ASK"),
        }
    }
}

/// Modulates bit sequences for every [`Scheme`] with one set of timing parameters.
///
/// All schemes return a waveform whose time axis runs monotonically over
/// the whole signal.
pub struct Modulator {
    carrier_freq: f64,
    sample_rate: f64,
    bit_grid: SegmentGrid,
}

impl Modulator {
    pub fn new(config: &ModulationConfig) -> Result<Self> {
        config.validate()?;
        let bit_grid = SegmentGrid::new("bit duration", config.bit_duration(), config.sample_rate)?;

        Ok(Modulator {
            carrier_freq: config.carrier_freq,
            sample_rate: config.sample_rate,
            bit_grid,
        })
    }

    /// Samples per bit on the binary schemes
    pub fn samples_per_bit(&self) -> usize {
        self.bit_grid.len()
    }

    #[instrument(skip(self, bits), fields(bits = bits.len()))]
    pub fn modulate(&self, scheme: Scheme, bits: &[u8]) -> Result<Waveform> {
        let bit_duration = self.bit_grid.duration();

        let amplitude = match scheme {
            Scheme::Ask => modulate_ask(bits, &self.bit_grid, self.carrier_freq)?,
            Scheme::Fsk => modulate_fsk(bits, &self.bit_grid, self.carrier_freq)?,
            Scheme::Psk => modulate_psk(bits, &self.bit_grid, self.carrier_freq)?,
            Scheme::MaryAsk { m } => {
                let symbols = bits_to_symbols(bits, m)?;
                let symbol_duration = bits_per_symbol(m)? as f64 * bit_duration;
                let waveform = modulate_mary_ask(
                    &symbols,
                    m,
                    self.carrier_freq,
                    self.sample_rate,
                    symbol_duration,
                )?;
                debug!(symbols = symbols.len(), samples = waveform.len(), "modulated");
                return Ok(waveform);
            }
        };

        debug!(samples = amplitude.len(), "modulated");
        Ok(Waveform::spanning(amplitude, bit_duration * bits.len() as f64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracing_init::init_test_tracing;
    use crate::Error;

    fn config() -> ModulationConfig {
        ModulationConfig {
            sample_rate: 100.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_synthesize_lays_segments_back_to_back() {
        let grid = SegmentGrid::new("bit duration", 1.0, 4.0).unwrap();
        let samples = synthesize(&[2u8, 3], &grid, |unit, t| unit as f64 + t);
        assert_eq!(samples, vec![2.0, 2.25, 2.5, 2.75, 3.0, 3.25, 3.5, 3.75]);
    }

    #[test]
    fn test_binary_schemes_share_length_and_time_axis() {
        init_test_tracing();
        let modulator = Modulator::new(&config()).unwrap();
        let bits = [1, 0, 0, 1, 1];

        let ask = modulator.modulate(Scheme::Ask, &bits).unwrap();
        let fsk = modulator.modulate(Scheme::Fsk, &bits).unwrap();
        let psk = modulator.modulate(Scheme::Psk, &bits).unwrap();

        assert_eq!(ask.len(), 500);
        assert_eq!(ask.time(), fsk.time());
        assert_eq!(fsk.time(), psk.time());
        assert!(ask.time().windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_mary_scheme_uses_padded_symbols() {
        init_test_tracing();
        let modulator = Modulator::new(&config()).unwrap();

        // 7 bits, k = 3 → 3 symbols of 300 samples
        let waveform = modulator
            .modulate(Scheme::MaryAsk { m: 8 }, &[1, 1, 1, 1, 1, 1, 1])
            .unwrap();
        assert_eq!(waveform.len(), 900);
        assert!(*waveform.time().last().unwrap() < 9.0);
        assert!(waveform.time().windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_mary_scheme_rejects_bad_m() {
        let modulator = Modulator::new(&config()).unwrap();
        assert!(matches!(
            modulator.modulate(Scheme::MaryAsk { m: 5 }, &[1, 0]),
            Err(Error::NotPowerOfTwo { m: 5 })
        ));
    }

    #[test]
    fn test_scheme_labels() {
        assert_eq!(Scheme::Ask.to_string(), "ASK");
        assert_eq!(Scheme::MaryAsk { m: 8 }.to_string(), "8-ary ASK");
    }
}
