//! M-ary ASK demo
//!
//! Groups a random bitstream into log2(M)-bit symbols, maps them onto M
//! zero-centred amplitude levels and plots message, carrier and the M-ASK
//! signal as three stacked panels.
//!
//! Usage:
//!   cargo run --bin mary_ask -- [OPTIONS]
//!
//! Defaults: M = 8, bit rate 4, carrier 20 Hz, 1000 samples/sec, 24 bits.
//!
//! Examples:
//!   mary_ask --defaults
//!   mary_ask --levels 4 --bits 0110110001 --defaults

use clap::Parser;

use rustyshift::bits::format_bits;
use rustyshift::cli::{resolve, ParameterArgs};
use rustyshift::plot::{render_stacked, MARY_FIGURE_SIZE, MARY_PLOT_FILE};
use rustyshift::symbol::bits_to_symbols;
use rustyshift::tracing_init::init_tracing;
use rustyshift::{pipeline, ModulationConfig};

#[derive(Debug, Parser)]
#[command(version, about = "Plot M-ary ASK modulation of a random bitstream")]
struct Cli {
    /// Number of amplitude levels M (power of two)
    #[arg(short = 'm', long)]
    levels: Option<usize>,

    #[command(flatten)]
    params: ParameterArgs,
}

#[snafu::report]
fn main() -> Result<(), rustyshift::Error> {
    init_tracing();
    let cli = Cli::parse();

    let defaults = ModulationConfig::mary_default();
    let levels = resolve(
        "M",
        "Enter the number of amplitude levels M",
        cli.levels,
        defaults.levels,
        cli.params.defaults,
    )?;
    let (config, bits) = cli.params.resolve(ModulationConfig { levels, ..defaults })?;

    println!("Transmitted Bits: {}", format_bits(&bits));
    let symbols = bits_to_symbols(&bits, config.levels)?;
    println!("Symbols:          {:?}", symbols);

    let panels = pipeline::mary_demo(&config, &bits)?;

    let output = cli.params.output.unwrap_or_else(|| MARY_PLOT_FILE.into());
    render_stacked(&output, &panels, MARY_FIGURE_SIZE)?;
    println!("Plot saved as {}", output.display());

    Ok(())
}
