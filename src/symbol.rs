//! M-ary Symbol Mapping
//!
//! Groups a bit sequence into k-bit chunks, `k = log2(M)`, and reads each
//! chunk most-significant-bit first as a symbol index in `0..M`.
//!
//! **Padding**: when the bit count is not a multiple of k, the final chunk is
//! filled out with zeros on the right. Callers sizing the modulated signal
//! must use [`padded_bit_count`], not the unpadded bit count.
//!
//! **Levels**: symbol `i` is transmitted at amplitude `2i - (M-1)`, giving M
//! equally spaced levels centred on zero, e.g. M=4 → `-3, -1, 1, 3`.

use snafu::ensure;

use crate::bits::validate_bits;
use crate::error::{NotPowerOfTwoSnafu, Result};

/// Bits carried per symbol, `log2(M)`.
///
/// # Errors
/// `NotPowerOfTwo` unless M is a power of two of at least 2.
pub fn bits_per_symbol(m: usize) -> Result<usize> {
    ensure!(m >= 2 && m.is_power_of_two(), NotPowerOfTwoSnafu { m });
    Ok(m.trailing_zeros() as usize)
}

/// Bit count after zero-padding `bit_count` up to a multiple of `log2(M)`.
pub fn padded_bit_count(bit_count: usize, m: usize) -> Result<usize> {
    let k = bits_per_symbol(m)?;
    Ok(bit_count.div_ceil(k) * k)
}

/// Map bits to symbol indices in `0..M`.
///
/// # Example
/// ```
/// use rustyshift::symbol;
///
/// let symbols = symbol::bits_to_symbols(&[1, 0, 1, 1, 1, 0, 0, 0, 1], 8)?;
/// assert_eq!(symbols, vec![5, 6, 1]);
/// # Ok::<(), rustyshift::Error>(())
/// ```
pub fn bits_to_symbols(bits: &[u8], m: usize) -> Result<Vec<usize>> {
    let k = bits_per_symbol(m)?;
    validate_bits(bits)?;

    let symbols = bits
        .chunks(k)
        .map(|chunk| {
            let value = chunk.iter().fold(0usize, |acc, &bit| acc * 2 + bit as usize);
            // missing tail bits are zeros
            value << (k - chunk.len())
        })
        .collect();

    Ok(symbols)
}

/// Amplitude of symbol `symbol` among M levels, `2·symbol - (M-1)`.
///
/// Callers check `symbol < m` first.
pub fn amplitude_level(symbol: usize, m: usize) -> f64 {
    2.0 * symbol as f64 - (m - 1) as f64
}

/// Zero-centred amplitude for each symbol index, `level[i] = 2i - (M-1)`.
///
/// Allocates all M levels; the modulator uses [`amplitude_level`] instead.
pub fn amplitude_levels(m: usize) -> Result<Vec<f64>> {
    bits_per_symbol(m)?;
    Ok((0..m).map(|i| amplitude_level(i, m)).collect())
}
