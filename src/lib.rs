
pub mod bits;
pub mod carrier;
pub mod cli;
pub mod config;
pub mod error;
pub mod modulation;
pub mod pipeline;
pub mod plot;
pub mod pulse;
pub mod symbol;
pub mod timing;
pub mod tracing_init;
pub mod waveform;

pub use config::ModulationConfig;
pub use error::{Error, Result};
pub use modulation::{Modulator, Scheme};
pub use waveform::Waveform;
