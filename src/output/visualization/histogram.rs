//! Histogram of sampled ∞-norms
//!
//! Bars show how often the producing solver reached each `||∇u + Φ||∞`; a red
//! dashed vertical line marks `||∇u||∞` of the stored gradient for
//! comparison.

use std::error::Error;
use std::path::Path;

use plotters::prelude::*;

use super::config::{PlotConfig, NO_TITLE};
use super::{axis_range, OutputFormat};
use crate::error::{LatticeError, Result};
use crate::lattice::Samples;

/// Default number of bins
pub const DEFAULT_BINS: usize = 50;

const STEELBLUE: RGBColor = RGBColor(70, 130, 180);

/// Equal-width bin counts over `[lo, hi]`
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    pub lo: f64,
    pub hi: f64,
    pub counts: Vec<usize>,
}

impl Histogram {
    pub fn bin_width(&self) -> f64 {
        self.half_span() / self.counts.len() as f64 * 2.0
    }

    /// `(hi - lo) / 2`, finite for any finite bounds
    fn half_span(&self) -> f64 {
        0.5 * self.hi - 0.5 * self.lo
    }

    /// Left and right edge of bin `k`
    pub fn bin_range(&self, k: usize) -> (f64, f64) {
        (self.edge(k), self.edge(k + 1))
    }

    /// Interpolated so that no intermediate exceeds the bounds
    fn edge(&self, k: usize) -> f64 {
        let f = k as f64 / self.counts.len() as f64;
        self.lo * (1.0 - f) + self.hi * f
    }

    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// Count samples into `bins` equal-width bins spanning their range
///
/// The last bin is closed on the right, so the maximum is counted. A
/// collapsed range `[v, v]` is widened to `[v - 0.5, v + 0.5]`. Non-finite
/// samples are skipped.
pub fn histogram_counts(samples: &Samples, bins: usize) -> Histogram {
    let bins = bins.max(1);
    let finite: Vec<f64> = samples
        .as_slice()
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .collect();
    if finite.len() < samples.len() {
        log::warn!(
            "Skipping {} non-finite samples in '{}'",
            samples.len() - finite.len(),
            samples.name()
        );
    }

    let (mut lo, mut hi) = finite
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    if finite.is_empty() {
        lo = 0.0;
        hi = 0.0;
    }
    if hi <= lo {
        lo -= 0.5;
        hi += 0.5;
    }

    let mut histogram = Histogram {
        lo,
        hi,
        counts: vec![0; bins],
    };
    let half_span = histogram.half_span();
    for v in finite {
        let t = (0.5 * v - 0.5 * lo) / half_span;
        let k = ((t * bins as f64).floor() as usize).min(bins - 1);
        histogram.counts[k] += 1;
    }

    histogram
}

/// Plot the sample histogram with a reference line
///
/// # Arguments
///
/// * `samples`     - Sampled ∞-norms of `∇u + Φ`
/// * `reference`   - `||∇u||∞`, drawn as a red dashed vertical line
/// * `output_path` - Output file path (`.png` or `.svg`)
/// * `config`      - Optional configuration; defaults to [`PlotConfig::histogram`]
///
/// # Example
///
/// ```rust,ignore
/// let samples = load_samples("energies", "energies.csv")?;
/// plot_histogram(&samples, infinity_norm(&grad_u), "hist_infty_norms.png", None)?;
/// ```
pub fn plot_histogram(
    samples: &Samples,
    reference: f64,
    output_path: impl AsRef<Path>,
    config: Option<&PlotConfig>,
) -> Result<()> {
    let path = output_path.as_ref();
    let default_config = PlotConfig::histogram(NO_TITLE);
    let config = config.unwrap_or(&default_config);

    let histogram = histogram_counts(samples, DEFAULT_BINS);

    let rendered = match OutputFormat::from_path(path) {
        OutputFormat::Svg => {
            let backend = SVGBackend::new(path, (config.width, config.height));
            plot_histogram_impl(backend, &histogram, reference, config)
        }
        OutputFormat::Png => {
            let backend = BitMapBackend::new(path, (config.width, config.height));
            plot_histogram_impl(backend, &histogram, reference, config)
        }
    };
    rendered.map_err(|e| LatticeError::plot(path, e))?;

    log::info!(
        "Saved histogram of {} samples to {}",
        histogram.total(),
        path.display()
    );
    Ok(())
}

fn plot_histogram_impl<DB: DrawingBackend>(
    backend: DB,
    histogram: &Histogram,
    reference: f64,
    config: &PlotConfig,
) -> std::result::Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    let reference = if reference.is_finite() {
        Some(reference)
    } else {
        log::warn!("Reference norm {} is not finite; omitting the reference line", reference);
        None
    };

    // x range covers the bins and the reference
    let (mut x_min, mut x_max) = (histogram.lo, histogram.hi);
    if let Some(r) = reference {
        x_min = x_min.min(r);
        x_max = x_max.max(r);
    }
    let (x_min, x_max) = axis_range(x_min, x_max);
    let pad = 0.05 * (x_max - x_min);
    let y_max = (histogram.max_count().max(1) as f64) * 1.1;

    let mut chart = ChartBuilder::on(&root)
        .caption(&config.title, ("sans-serif", 28).into_font())
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(55)
        .build_cartesian_2d((x_min - pad)..(x_max + pad), 0.0..y_max)?;

    let x_format = |x: &f64| format!("{:.3}", x);
    let y_format = |y: &f64| format!("{:.0}", y);
    let mut mesh = chart.configure_mesh();
    mesh.x_desc(&config.xlabel)
        .y_desc(&config.ylabel)
        .x_label_formatter(&x_format)
        .y_label_formatter(&y_format);
    if config.show_grid {
        mesh.light_line_style(BLACK.mix(0.05)).draw()?;
    } else {
        mesh.disable_mesh().draw()?;
    }

    let bar_style = STEELBLUE.mix(0.7).filled();
    chart
        .draw_series(histogram.counts.iter().enumerate().map(|(k, &count)| {
            let (left, right) = histogram.bin_range(k);
            Rectangle::new([(left, 0.0), (right, count as f64)], bar_style)
        }))?
        .label("||∇u + Φ||∞")
        .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 20, y + 5)], bar_style));

    if let Some(r) = reference {
        let line_style = RED.stroke_width(config.line_width);
        chart
            .draw_series(dashed_vertical(r, y_max).map(|segment| {
                PathElement::new(segment, line_style)
            }))?
            .label("||∇u||∞")
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 8, y)], line_style)
            });
    }

    chart
        .configure_series_labels()
        .background_style(config.background.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

/// Dash segments of a vertical line at `x` from 0 to `top`
fn dashed_vertical(x: f64, top: f64) -> impl Iterator<Item = Vec<(f64, f64)>> {
    const DASHES: usize = 20;
    let period = top / DASHES as f64;
    (0..DASHES).map(move |k| {
        let y0 = k as f64 * period;
        vec![(x, y0), (x, y0 + 0.6 * period)]
    })
}

// =================================================================================================
// Tests
// =================================================================================================
