//! Command-line parameters shared by both demo binaries
//!
//! Each parameter can be given as a flag. Anything left out is asked for on
//! the terminal; pressing enter keeps the default, anything that is not a
//! number aborts the run.

use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

use clap::Args;
use dialoguer::Input;
use snafu::ResultExt;

use crate::bits::{generate_bits, parse_bits};
use crate::config::ModulationConfig;
use crate::error::{ParseParameterSnafu, PromptSnafu, Result};

#[derive(Debug, Args)]
pub struct ParameterArgs {
    /// Bit rate in bits/sec
    #[arg(long)]
    pub bit_rate: Option<u32>,

    /// Carrier frequency in Hz
    #[arg(long)]
    pub carrier_freq: Option<u32>,

    /// Sampling frequency in samples/sec
    #[arg(long)]
    pub sample_rate: Option<u32>,

    /// Number of random bits to transmit
    #[arg(long)]
    pub num_bits: Option<usize>,

    /// Transmit these bits instead of random ones, e.g. 10110010
    #[arg(long)]
    pub bits: Option<String>,

    /// Seed for the random bit generator
    #[arg(long)]
    pub seed: Option<u64>,

    /// Use defaults for every parameter not given as a flag, without prompting
    #[arg(long)]
    pub defaults: bool,

    /// Image file to write
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Parse `input`, falling back to `default` when it is blank.
pub fn parse_or_default<T>(name: &'static str, input: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    let input = input.trim();
    if input.is_empty() {
        return Ok(default);
    }

    input.parse().map_err(|e: T::Err| {
        ParseParameterSnafu {
            name,
            input,
            reason: e.to_string(),
        }
        .build()
    })
}

/// Ask for a value on the terminal.
pub fn prompt<T>(name: &'static str, prompt: &str, default: T) -> Result<T>
where
    T: FromStr + Display,
    T::Err: Display,
{
    let input: String = Input::new()
        .with_prompt(format!("{prompt} [default: {default}]"))
        .allow_empty(true)
        .interact_text()
        .context(PromptSnafu)?;

    parse_or_default(name, &input, default)
}

/// Take `given` if present, else the default (with `use_defaults`) or a prompt.
pub fn resolve<T>(
    name: &'static str,
    prompt_text: &str,
    given: Option<T>,
    default: T,
    use_defaults: bool,
) -> Result<T>
where
    T: FromStr + Display,
    T::Err: Display,
{
    match given {
        Some(value) => Ok(value),
        None if use_defaults => Ok(default),
        None => prompt(name, prompt_text, default),
    }
}

impl ParameterArgs {
    /// Fill in the four run parameters on top of `defaults`.
    ///
    /// Explicit `--bits` fix the bit count, so it is not asked for.
    pub fn resolve(&self, defaults: ModulationConfig) -> Result<(ModulationConfig, Vec<u8>)> {
        let given_bits = self.bits.as_deref().map(parse_bits).transpose()?;

        let bit_rate = resolve(
            "bit rate",
            "Enter the bit rate (bits/sec)",
            self.bit_rate,
            defaults.bit_rate as u32,
            self.defaults,
        )?;
        let carrier_freq = resolve(
            "carrier frequency",
            "Enter the carrier frequency (Hz)",
            self.carrier_freq,
            defaults.carrier_freq as u32,
            self.defaults,
        )?;
        let sample_rate = resolve(
            "sample rate",
            "Enter the sampling frequency (samples/sec)",
            self.sample_rate,
            defaults.sample_rate as u32,
            self.defaults,
        )?;
        let num_bits = match &given_bits {
            Some(bits) => bits.len(),
            None => resolve(
                "number of bits",
                "Enter the number of bits to transmit",
                self.num_bits,
                defaults.num_bits,
                self.defaults,
            )?,
        };

        let config = ModulationConfig {
            bit_rate: bit_rate as f64,
            carrier_freq: carrier_freq as f64,
            sample_rate: sample_rate as f64,
            num_bits,
            seed: self.seed.or(defaults.seed),
            ..defaults
        };
        config.validate()?;

        let bits = given_bits.unwrap_or_else(|| generate_bits(config.num_bits, config.seed));

        Ok((config, bits))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn args() -> ParameterArgs {
        ParameterArgs {
            bit_rate: None,
            carrier_freq: None,
            sample_rate: None,
            num_bits: None,
            bits: None,
            seed: Some(1),
            defaults: true,
            output: None,
        }
    }

    #[test]
    fn test_blank_input_keeps_default() {
        assert_eq!(parse_or_default("bit rate", "", 1u32).unwrap(), 1);
        assert_eq!(parse_or_default("bit rate", "   ", 1u32).unwrap(), 1);
        assert_eq!(parse_or_default("bit rate", " 4 ", 1u32).unwrap(), 4);
    }

    #[test]
    fn test_non_numeric_input_is_an_error() {
        let err = parse_or_default("carrier frequency", "fast", 5u32).unwrap_err();
        assert!(matches!(
            err,
            Error::ParseParameter { name: "carrier frequency", ref input, .. } if input == "fast"
        ));
    }

    #[test]
    fn test_resolve_prefers_given_value() {
        assert_eq!(resolve("bit rate", "unused", Some(3u32), 1, false).unwrap(), 3);
        assert_eq!(resolve("bit rate", "unused", None, 1u32, true).unwrap(), 1);
    }

    #[test]
    fn test_defaults_without_prompting() {
        let (config, bits) = args().resolve(ModulationConfig::default()).unwrap();
        assert_eq!(config.bit_rate, 1.0);
        assert_eq!(config.carrier_freq, 5.0);
        assert_eq!(config.sample_rate, 1000.0);
        assert_eq!(config.num_bits, 8);
        assert_eq!(bits.len(), 8);
        assert_eq!(bits, generate_bits(8, Some(1)));
    }

    #[test]
    fn test_explicit_bits_override_count() {
        let args = ParameterArgs {
            bits: Some("1010".to_string()),
            num_bits: Some(20),
            ..args()
        };
        let (config, bits) = args.resolve(ModulationConfig::mary_default()).unwrap();
        assert_eq!(bits, vec![1, 0, 1, 0]);
        assert_eq!(config.num_bits, 4);
        assert_eq!(config.levels, 8);
        assert_eq!(config.carrier_freq, 20.0);
    }

    #[test]
    fn test_invalid_flags_fail_validation() {
        let args = ParameterArgs {
            sample_rate: Some(0),
            ..args()
        };
        assert!(matches!(
            args.resolve(ModulationConfig::default()),
            Err(Error::NonPositive { .. })
        ));
    }
}
