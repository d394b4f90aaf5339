//! Run configuration
//!
//! One explicit struct carries every parameter of a synthesis run. Timing
//! values the scripts derived on the fly (bit duration, symbol duration,
//! samples per unit) are computed from it on demand.

use snafu::ensure;

use crate::error::{EmptySequenceSnafu, Result};
use crate::symbol::{bits_per_symbol, padded_bit_count};
use crate::timing::{ensure_positive, sample_count};

/// Binary demo defaults
pub const DEFAULT_BIT_RATE: f64 = 1.0;
pub const DEFAULT_CARRIER_FREQ: f64 = 5.0;
pub const DEFAULT_SAMPLE_RATE: f64 = 1000.0;
pub const DEFAULT_NUM_BITS: usize = 8;
pub const DEFAULT_LEVELS: usize = 8;

#[derive(Debug, Clone, PartialEq)]
pub struct ModulationConfig {
    /// Bits per second
    pub bit_rate: f64,
    /// Carrier frequency in Hz
    pub carrier_freq: f64,
    /// Samples per second
    pub sample_rate: f64,
    /// Number of random bits to generate
    pub num_bits: usize,
    /// M, the number of amplitude levels on the M-ary path
    pub levels: usize,
    /// Seed for bit generation, `None` for a fresh random stream
    pub seed: Option<u64>,
}

impl Default for ModulationConfig {
    fn default() -> Self {
        ModulationConfig {
            bit_rate: DEFAULT_BIT_RATE,
            carrier_freq: DEFAULT_CARRIER_FREQ,
            sample_rate: DEFAULT_SAMPLE_RATE,
            num_bits: DEFAULT_NUM_BITS,
            levels: DEFAULT_LEVELS,
            seed: None,
        }
    }
}

impl ModulationConfig {
    /// Parameters of the M-ary ASK demo: 8 levels, 4 bit/s, 20 Hz carrier, 24 bits.
    pub fn mary_default() -> Self {
        ModulationConfig {
            bit_rate: 4.0,
            carrier_freq: 20.0,
            num_bits: 24,
            ..Default::default()
        }
    }

    pub fn bit_duration(&self) -> f64 {
        1.0 / self.bit_rate
    }

    /// `log2(M)`
    pub fn bits_per_symbol(&self) -> Result<usize> {
        bits_per_symbol(self.levels)
    }

    pub fn symbol_duration(&self) -> Result<f64> {
        Ok(self.bits_per_symbol()? as f64 * self.bit_duration())
    }

    pub fn samples_per_bit(&self) -> Result<usize> {
        sample_count("bit duration", self.bit_duration(), self.sample_rate)
    }

    pub fn samples_per_symbol(&self) -> Result<usize> {
        sample_count("symbol duration", self.symbol_duration()?, self.sample_rate)
    }

    /// Duration of `bit_count` bits.
    pub fn total_duration(&self, bit_count: usize) -> f64 {
        self.bit_duration() * bit_count as f64
    }

    /// Duration of the M-ary signal for `bit_count` bits, which covers the
    /// zero-padded bit count.
    pub fn padded_duration(&self, bit_count: usize) -> Result<f64> {
        Ok(self.total_duration(padded_bit_count(bit_count, self.levels)?))
    }

    /// Check every precondition of the binary and M-ary paths.
    pub fn validate(&self) -> Result<()> {
        ensure_positive("bit rate", self.bit_rate)?;
        ensure_positive("carrier frequency", self.carrier_freq)?;
        ensure_positive("sample rate", self.sample_rate)?;
        ensure!(self.num_bits >= 1, EmptySequenceSnafu { what: "bit" });
        self.samples_per_bit()?;
        self.samples_per_symbol()?;
        Ok(())
    }
}
