//! Heatmap of a scalar potential
//!
//! Cell `(i, j)` is filled with the colormap value of `u[i, j]` normalized to
//! the field's finite `[min, max]`. Row 0 sits at the bottom (`origin = lower`),
//! column `j` runs left to right. A vertical colorbar labeled `u(x)` is drawn
//! to the right of the field.

use std::error::Error;
use std::path::Path;

use plotters::prelude::*;

use super::colormap::Colormap;
use super::config::{PlotConfig, NO_TITLE};
use super::{axis_range, OutputFormat};
use crate::error::{LatticeError, Result};
use crate::lattice::ScalarField;

/// Colorbar resolution
const COLORBAR_STEPS: usize = 100;

/// Corners of cell `(i, j)` in chart coordinates, row 0 at the bottom
pub fn cell_rectangle(i: usize, j: usize) -> [(f64, f64); 2] {
    [(j as f64, i as f64), ((j + 1) as f64, (i + 1) as f64)]
}

/// Plot a scalar field as a heatmap with colorbar
///
/// # Arguments
///
/// * `u`           - Scalar field
/// * `output_path` - Output file path (`.png` or `.svg`)
/// * `config`      - Optional plot configuration; defaults to [`PlotConfig::heatmap`]
///
/// # Example
///
/// ```rust,ignore
/// plot_heatmap(&u, "plot_u.png", None)?;
/// ```
pub fn plot_heatmap(
    u: &ScalarField,
    output_path: impl AsRef<Path>,
    config: Option<&PlotConfig>,
) -> Result<()> {
    let path = output_path.as_ref();
    let default_config = PlotConfig::heatmap(NO_TITLE);
    let config = config.unwrap_or(&default_config);

    let rendered = match OutputFormat::from_path(path) {
        OutputFormat::Svg => {
            let backend = SVGBackend::new(path, (config.width, config.height));
            plot_heatmap_impl(backend, u, config)
        }
        OutputFormat::Png => {
            let backend = BitMapBackend::new(path, (config.width, config.height));
            plot_heatmap_impl(backend, u, config)
        }
    };
    rendered.map_err(|e| LatticeError::plot(path, e))?;

    log::info!("Saved heatmap of '{}' to {}", u.name(), path.display());
    Ok(())
}

fn plot_heatmap_impl<DB: DrawingBackend>(
    backend: DB,
    u: &ScalarField,
    config: &PlotConfig,
) -> std::result::Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    let colormap = Colormap::new(config.colormap);
    let n = u.side();
    let (lo, hi) = u.range();

    let bar_width = (config.width / 6).max(80);
    let (field_area, bar_area) = root.split_horizontally(config.width.saturating_sub(bar_width));

    let mut chart = ChartBuilder::on(&field_area)
        .caption(&config.title, ("sans-serif", 24).into_font())
        .margin(15)
        .x_label_area_size(35)
        .y_label_area_size(45)
        .build_cartesian_2d(0.0..n as f64, 0.0..n as f64)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_label_formatter(&|x| format!("{:.0}", x))
        .y_label_formatter(&|y| format!("{:.0}", y))
        .draw()?;

    chart.draw_series(
        (0..n)
            .flat_map(|i| (0..n).map(move |j| (i, j)))
            .map(|(i, j)| {
                let color = colormap.color_in_range(u.values()[(i, j)], lo, hi);
                Rectangle::new(cell_rectangle(i, j), color.filled())
            }),
    )?;

    // Colorbar
    let (bar_lo, bar_hi) = axis_range(lo, hi);
    let mut bar = ChartBuilder::on(&bar_area)
        .margin_top(55)
        .margin_bottom(50)
        .margin_right(10)
        .right_y_label_area_size(60)
        .build_cartesian_2d(0.0..1.0, bar_lo..bar_hi)?;

    bar.configure_mesh()
        .disable_mesh()
        .disable_x_axis()
        .y_desc("u(x)")
        .y_label_formatter(&|v| format!("{:.2}", v))
        .draw()?;

    let step = (bar_hi - bar_lo) / COLORBAR_STEPS as f64;
    bar.draw_series((0..COLORBAR_STEPS).map(|k| {
        let y0 = bar_lo + k as f64 * step;
        let color = colormap.color_in_range(y0 + 0.5 * step, lo, hi);
        Rectangle::new([(0.0, y0), (1.0, y0 + step)], color.filled())
    }))?;

    root.present()?;
    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_plot_heatmap_png() {
        let u = ScalarField::from_fn("u", 6, |i, j| (i as f64).sin() + j as f64).unwrap();
        let tmp = NamedTempFile::new().unwrap();
        let path = tmp.path().with_extension("png");
        plot_heatmap(&u, &path, None).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_plot_heatmap_svg_constant_field() {
        let u = ScalarField::from_fn("u", 3, |_, _| 1.25).unwrap();
        let tmp = NamedTempFile::new().unwrap();
        let path = tmp.path().with_extension("svg");
        plot_heatmap(&u, &path, None).unwrap();

        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.contains("<svg"));
        assert!(!svg.contains("NaN"));
    }

    #[test]
    fn test_cells_start_at_bottom_left() {
        assert_eq!(cell_rectangle(0, 0), [(0.0, 0.0), (1.0, 1.0)]);
        // Row 0, last column: bottom right
        assert_eq!(cell_rectangle(0, 3), [(3.0, 0.0), (4.0, 1.0)]);
        // Last row, column 0: top left, ending on the upper limit N
        assert_eq!(cell_rectangle(3, 0), [(0.0, 3.0), (1.0, 4.0)]);
        assert_eq!(cell_rectangle(3, 3), [(3.0, 3.0), (4.0, 4.0)]);
    }

    #[test]
    fn test_plot_heatmap_with_infinite_cell_finishes() {
        let u = ScalarField::from_fn("u", 3, |i, j| {
            if (i, j) == (1, 1) { f64::INFINITY } else { (i + j) as f64 }
        })
        .unwrap();
        let tmp = NamedTempFile::new().unwrap();
        let path = tmp.path().with_extension("svg");
        plot_heatmap(&u, &path, None).unwrap();
        assert!(path.exists());

        let blank = ScalarField::from_fn("u", 2, |_, _| f64::NAN).unwrap();
        plot_heatmap(&blank, &path, None).unwrap();
    }

    #[test]
    fn test_plot_heatmap_huge_span() {
        let u = ScalarField::from_fn("u", 2, |i, _| if i == 0 { -1e308 } else { 1e308 }).unwrap();
        let tmp = NamedTempFile::new().unwrap();
        let path = tmp.path().with_extension("png");
        plot_heatmap(&u, &path, None).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_plot_heatmap_missing_directory_is_plot_error() {
        let u = ScalarField::from_fn("u", 2, |i, j| (i * j) as f64).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("plot_u.png");
        assert!(matches!(
            plot_heatmap(&u, &path, None),
            Err(LatticeError::Plot { .. })
        ));
    }
}
