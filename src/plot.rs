//! Figure rendering
//!
//! Draws one or more waveforms as vertically stacked line charts into a PNG
//! file using `plotters`' bitmap backend.

use std::path::Path;

use plotters::prelude::*;
use snafu::ensure;
use tracing::{info, instrument};

use crate::error::{Error, PlotSnafu, Result};
use crate::waveform::Waveform;

/// Output file of the ASK/FSK/PSK demo
pub const BINARY_PLOT_FILE: &str = "modulated_signal.png";

/// Output file of the M-ary ASK demo
pub const MARY_PLOT_FILE: &str = "m-array-ask.png";

/// Five stacked panels
pub const BINARY_FIGURE_SIZE: (u32, u32) = (1500, 1000);

/// Three stacked panels
pub const MARY_FIGURE_SIZE: (u32, u32) = (1200, 800);

/// matplotlib's "C3"
pub const TAB_RED: RGBColor = RGBColor(214, 39, 40);

/// One subplot of a stacked figure.
#[derive(Debug, Clone)]
pub struct Panel {
    pub title: String,
    pub y_label: String,
    pub color: RGBColor,
    pub waveform: Waveform,
}

impl Panel {
    pub fn new(title: impl Into<String>, color: RGBColor, waveform: Waveform) -> Self {
        Panel {
            title: title.into(),
            y_label: "Amplitude".to_string(),
            color,
            waveform,
        }
    }

    pub fn with_y_label(mut self, y_label: impl Into<String>) -> Self {
        self.y_label = y_label.into();
        self
    }
}

fn plot_error(err: impl std::fmt::Display) -> Error {
    Error::Plot {
        message: err.to_string(),
    }
}

/// Axis range covering `values`, padded by 10% so flat lines stay visible.
pub fn amplitude_range(values: &[f64]) -> (f64, f64) {
    let (min, max) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));

    if !min.is_finite() || !max.is_finite() {
        return (-1.0, 1.0);
    }
    if max - min < f64::EPSILON {
        return (min - 1.0, max + 1.0);
    }

    let pad = 0.1 * (max - min);
    (min - pad, max + pad)
}

fn time_range(waveform: &Waveform) -> (f64, f64) {
    match (waveform.time().first(), waveform.time().last()) {
        (Some(&start), Some(&end)) if end > start => (start, end),
        (Some(&start), _) => (start, start + 1.0),
        _ => (0.0, 1.0),
    }
}

/// Render `panels` top to bottom into a PNG at `path`.
///
/// Only the bottom panel gets the "Time (s)" axis description.
#[instrument(skip(panels), fields(panels = panels.len()))]
pub fn render_stacked(path: &Path, panels: &[Panel], size: (u32, u32)) -> Result<()> {
    ensure!(
        !panels.is_empty(),
        PlotSnafu {
            message: "no panels to draw"
        }
    );

    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE).map_err(plot_error)?;

    let areas = root.split_evenly((panels.len(), 1));
    let last = panels.len() - 1;

    for (index, (area, panel)) in areas.iter().zip(panels).enumerate() {
        let (t_start, t_end) = time_range(&panel.waveform);
        let (y_min, y_max) = amplitude_range(panel.waveform.amplitude());

        let mut chart = ChartBuilder::on(area)
            .caption(&panel.title, ("sans-serif", 18))
            .margin(8)
            .x_label_area_size(if index == last { 35 } else { 20 })
            .y_label_area_size(55)
            .build_cartesian_2d(t_start..t_end, y_min..y_max)
            .map_err(plot_error)?;

        let mut mesh = chart.configure_mesh();
        mesh.y_desc(panel.y_label.as_str());
        if index == last {
            mesh.x_desc("Time (s)");
        }
        mesh.draw().map_err(plot_error)?;

        chart
            .draw_series(LineSeries::new(panel.waveform.points(), &panel.color))
            .map_err(plot_error)?;
    }

    root.present().map_err(plot_error)?;
    info!(path = %path.display(), "plot saved");

    Ok(())
}
