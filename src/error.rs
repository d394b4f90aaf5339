use snafu::Snafu;

/// Errors raised while synthesizing or plotting a modulated waveform.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    /// A duration, rate or frequency was zero or negative
    #[snafu(display("{name} must be > 0, got {value}"))]
    NonPositive { name: &'static str, value: f64 },

    /// The sampling grid for a bit or symbol would hold no samples
    #[snafu(display(
        "{name} of {duration} s at {sample_rate} samples/s yields no samples"
    ))]
    EmptyGrid {
        name: &'static str,
        duration: f64,
        sample_rate: f64,
    },

    /// Nothing to modulate
    #[snafu(display("{what} sequence is empty"))]
    EmptySequence { what: &'static str },

    /// M-ary level count is not a power of two >= 2
    #[snafu(display("M must be a power of two >= 2, got {m}"))]
    NotPowerOfTwo { m: usize },

    /// Bit sequence contains something other than 0 or 1
    #[snafu(display("bit {index} has value {value}, expected 0 or 1"))]
    InvalidBit { index: usize, value: u8 },

    /// Symbol index does not address an amplitude level
    #[snafu(display("symbol {index} has value {symbol}, expected < {m}"))]
    SymbolOutOfRange { index: usize, symbol: usize, m: usize },

    /// User supplied text that is not a number
    #[snafu(display("could not parse {name} from {input:?}: {reason}"))]
    ParseParameter {
        name: &'static str,
        input: String,
        reason: String,
    },

    /// Reading from the terminal failed
    #[snafu(display("prompt failed: {source}"))]
    Prompt { source: dialoguer::Error },

    /// plotters could not draw or save the figure
    #[snafu(display("plot failed: {message}"))]
    Plot { message: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
