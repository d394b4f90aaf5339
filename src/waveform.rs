use crate::timing::linspace;

/// A sampled signal: a strictly increasing time axis and one amplitude per instant.
#[derive(Debug, Clone, PartialEq)]
pub struct Waveform {
    time: Vec<f64>,
    amplitude: Vec<f64>,
}

impl Waveform {
    /// Attach a fresh global time axis over `[0, duration)` to `amplitude`.
    pub(crate) fn spanning(amplitude: Vec<f64>, duration: f64) -> Self {
        Waveform {
            time: linspace(duration, amplitude.len()),
            amplitude,
        }
    }

    pub fn time(&self) -> &[f64] {
        &self.time
    }

    pub fn amplitude(&self) -> &[f64] {
        &self.amplitude
    }

    pub fn len(&self) -> usize {
        self.amplitude.len()
    }

    pub fn is_empty(&self) -> bool {
        self.amplitude.is_empty()
    }

    /// `(time, amplitude)` pairs in order
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.time.iter().copied().zip(self.amplitude.iter().copied())
    }

    /// Amplitudes of the `index`-th bit or symbol, `None` past the end.
    pub fn segment(&self, index: usize, samples_per_unit: usize) -> Option<&[f64]> {
        let start = index.checked_mul(samples_per_unit)?;
        self.amplitude.get(start..start.checked_add(samples_per_unit)?)
    }
}
