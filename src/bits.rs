//! Bit sequences
//!
//! Bits are plain `u8` values restricted to 0 and 1. They are either drawn
//! from a pseudo-random source or supplied by the caller.

use rand::{rngs::StdRng, Rng, SeedableRng};
use snafu::ensure;

use crate::error::{EmptySequenceSnafu, InvalidBitSnafu, ParseParameterSnafu, Result};

/// Draw `count` uniformly distributed bits from `rng`.
pub fn random_bits<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<u8> {
    (0..count).map(|_| rng.random_range(0..=1u8)).collect()
}

/// Draw `count` bits, reproducibly when a seed is given.
pub fn generate_bits(count: usize, seed: Option<u64>) -> Vec<u8> {
    match seed {
        Some(seed) => random_bits(count, &mut StdRng::seed_from_u64(seed)),
        None => random_bits(count, &mut rand::rng()),
    }
}

/// Check that `bits` is non-empty and holds only 0 and 1.
pub fn validate_bits(bits: &[u8]) -> Result<()> {
    ensure!(!bits.is_empty(), EmptySequenceSnafu { what: "bit" });

    if let Some((index, &value)) = bits.iter().enumerate().find(|&(_, &b)| b > 1) {
        return InvalidBitSnafu { index, value }.fail();
    }

    Ok(())
}

/// Parse a bit string such as `"1010 0110"`.
///
/// Whitespace, `,` and `_` are ignored as separators.
pub fn parse_bits(text: &str) -> Result<Vec<u8>> {
    let mut bits = Vec::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '0' => bits.push(0),
            '1' => bits.push(1),
            c if c.is_whitespace() || c == ',' || c == '_' => {}
            c => {
                return ParseParameterSnafu {
                    name: "bits",
                    input: text,
                    reason: format!("unexpected character {c:?}"),
                }
                .fail()
            }
        }
    }

    ensure!(!bits.is_empty(), EmptySequenceSnafu { what: "bit" });
    Ok(bits)
}

/// Render bits like `[1 0 1 0]`.
pub fn format_bits(bits: &[u8]) -> String {
    let body: Vec<String> = bits.iter().map(|b| b.to_string()).collect();
    format!("[{}]", body.join(" "))
}
