//! Sampling grids
//!
//! Every generator works on half-open time grids: `n` samples spread evenly
//! over `[0, duration)`, never touching the endpoint. The sample count is
//! `floor(sample_rate * duration)`, so the spacing is `duration / n`, which
//! equals `1 / sample_rate` whenever the product is integral.

use snafu::ensure;

use crate::error::{EmptyGridSnafu, NonPositiveSnafu, Result};

/// Fail unless `value` is strictly positive (NaN fails too).
pub(crate) fn ensure_positive(name: &'static str, value: f64) -> Result<()> {
    ensure!(value > 0.0, NonPositiveSnafu { name, value });
    Ok(())
}

/// Number of samples a span of `duration` seconds occupies at `sample_rate`.
///
/// # Errors
/// `NonPositive` if either argument is not > 0, `EmptyGrid` if the span
/// would hold no samples at all.
pub fn sample_count(name: &'static str, duration: f64, sample_rate: f64) -> Result<usize> {
    ensure_positive(name, duration)?;
    ensure_positive("sample rate", sample_rate)?;

    let count = (sample_rate * duration).floor() as usize;
    ensure!(
        count >= 1,
        EmptyGridSnafu {
            name,
            duration,
            sample_rate
        }
    );

    Ok(count)
}

/// `count` evenly spaced instants over `[0, duration)`.
pub fn linspace(duration: f64, count: usize) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    let step = duration / count as f64;
    (0..count).map(|i| i as f64 * step).collect()
}

/// Local time grid for one bit or one symbol.
///
/// Each segment of a modulated waveform is synthesized on the same grid,
/// so every segment restarts at `t = 0`. Construction guarantees at least
/// one sample.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentGrid {
    times: Vec<f64>,
    duration: f64,
}

impl SegmentGrid {
    pub fn new(name: &'static str, duration: f64, sample_rate: f64) -> Result<Self> {
        let count = sample_count(name, duration, sample_rate)?;

        Ok(SegmentGrid {
            times: linspace(duration, count),
            duration,
        })
    }

    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Samples per segment
    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_sample_count_floors_product() {
        assert_eq!(sample_count("bit duration", 1.0, 1000.0).unwrap(), 1000);
        assert_eq!(sample_count("bit duration", 0.25, 1000.0).unwrap(), 250);
        assert_eq!(sample_count("bit duration", 1.0 / 3.0, 1000.0).unwrap(), 333);
    }

    #[test]
    fn test_sample_count_rejects_non_positive() {
        assert!(matches!(
            sample_count("bit duration", 0.0, 1000.0),
            Err(Error::NonPositive { name: "bit duration", .. })
        ));
        assert!(matches!(
            sample_count("bit duration", 1.0, -5.0),
            Err(Error::NonPositive { name: "sample rate", .. })
        ));
        assert!(matches!(
            sample_count("bit duration", f64::NAN, 1000.0),
            Err(Error::NonPositive { .. })
        ));
    }

    #[test]
    fn test_sample_count_rejects_empty_grid() {
        let err = sample_count("bit duration", 0.0005, 1000.0).unwrap_err();
        assert!(matches!(err, Error::EmptyGrid { .. }));
    }

    #[test]
    fn test_linspace_excludes_endpoint() {
        let t = linspace(1.0, 4);
        assert_eq!(t, vec![0.0, 0.25, 0.5, 0.75]);
        assert!(linspace(1.0, 0).is_empty());
    }

    #[test]
    fn test_segment_grid() {
        let grid = SegmentGrid::new("bit duration", 1.0, 100.0).unwrap();
        assert_eq!(grid.len(), 100);
        assert_eq!(grid.times()[0], 0.0);
        assert!((grid.times()[99] - 0.99).abs() < 1e-12);
        assert_eq!(grid.duration(), 1.0);
    }
}
