//! Edge-colored lattice plots
//!
//! Every vertex `(i, j)` owns two segments: `(i, j) → (i+1, j)` colored by
//! `|x[i, j]|` and `(i, j) → (i, j+1)` colored by `|y[i, j]|`. The first
//! index runs along the horizontal axis. Colors are normalized by
//! `vmax = max(|x|, |y|)` over the whole field, so panels drawn side by side
//! do not share a color scale.
//!
//! Segments of the last row and column end on the periodic image at `N`,
//! which is where the axis limits stop. Both axes carry tick labels, without
//! a grid.

use std::error::Error;
use std::path::Path;

use nalgebra::DMatrix;
use plotters::coord::Shift;
use plotters::prelude::*;

use super::colormap::Colormap;
use super::config::{IntoOptionalTitle, PlotConfig, NO_TITLE};
use super::{square_area, OutputFormat};
use crate::error::{LatticeError, Result};
use crate::lattice::{map_elements, EdgeField};

/// Pixels reserved above a panel for its title
const PANEL_CAPTION: u32 = 40;

/// Colormap positions `|x| / vmax` and `|y| / vmax` in `[0, 1]`
///
/// When `vmax` is zero or not finite every position is 0 (the low end of the
/// colormap) and a warning is logged.
pub fn edge_color_positions(field: &EdgeField) -> (DMatrix<f64>, DMatrix<f64>) {
    let vmax = field.max_abs_component();
    if vmax > 0.0 && vmax.is_finite() {
        (
            map_elements(field.x(), |v| v.abs() / vmax),
            map_elements(field.y(), |v| v.abs() / vmax),
        )
    } else {
        log::warn!(
            "Edge field '{}' has degenerate color scale (vmax = {}); drawing all edges at the low end",
            field.name(),
            vmax
        );
        let n = field.side();
        (DMatrix::zeros(n, n), DMatrix::zeros(n, n))
    }
}

/// The two segments owned by vertex `(i, j)`: first the `x` edge, then the `y` edge
///
/// Segments of the last row and column end at `N`, not back at 0.
pub fn edge_segments(i: usize, j: usize) -> [[(f64, f64); 2]; 2] {
    let (x, y) = (i as f64, j as f64);
    [[(x, y), (x + 1.0, y)], [(x, y), (x, y + 1.0)]]
}

/// Draw an edge field onto a caller-supplied area
///
/// The area is reduced to its largest centered square so both axes share a
/// scale. Colormap and line width come from `config`.
///
/// # Example
///
/// ```rust,ignore
/// let root = BitMapBackend::new("grad.png", (600, 600)).into_drawing_area();
/// root.fill(&WHITE)?;
/// draw_edges(&root, &grad_u, "Gradient ∇u", &PlotConfig::edges(NO_TITLE))?;
/// root.present()?;
/// ```
pub fn draw_edges<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    field: &EdgeField,
    title: &str,
    config: &PlotConfig,
) -> std::result::Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let n = field.side();
    let panel = square_area(area, PANEL_CAPTION);

    let mut chart = ChartBuilder::on(&panel)
        .caption(title, ("sans-serif", 22).into_font())
        .margin(8)
        .x_label_area_size(30)
        .y_label_area_size(35)
        .build_cartesian_2d(0.0..n as f64, 0.0..n as f64)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_label_formatter(&|x| format!("{:.0}", x))
        .y_label_formatter(&|y| format!("{:.0}", y))
        .draw()?;

    let colormap = Colormap::new(config.colormap);
    let (tx, ty) = edge_color_positions(field);
    let style = |t: f64| colormap.color(t).stroke_width(config.line_width);

    chart.draw_series(
        (0..n)
            .flat_map(|i| (0..n).map(move |j| (i, j)))
            .flat_map(|(i, j)| {
                let [along_x, along_y] = edge_segments(i, j);
                [
                    PathElement::new(along_x, style(tx[(i, j)])),
                    PathElement::new(along_y, style(ty[(i, j)])),
                ]
            }),
    )?;

    Ok(())
}

/// Plot one edge field to a file
///
/// # Arguments
///
/// * `field`       - Edge field
/// * `output_path` - Output file path (`.png` or `.svg`)
/// * `title`       - Panel title (`&str`, `String`) or [`NO_TITLE`] for `config.title`
/// * `config`      - Optional configuration; defaults to [`PlotConfig::edges`]
///
/// # Example
///
/// ```rust,ignore
/// plot_edges(&phi, "plot_phi.png", "Cycle field Φ", None)?;
/// ```
pub fn plot_edges(
    field: &EdgeField,
    output_path: impl AsRef<Path>,
    title: impl IntoOptionalTitle,
    config: Option<&PlotConfig>,
) -> Result<()> {
    let path = output_path.as_ref();
    let default_config = PlotConfig::edges(NO_TITLE);
    let config = config.unwrap_or(&default_config);
    let title = title
        .into_optional_title()
        .unwrap_or_else(|| config.title.clone());

    let rendered = match OutputFormat::from_path(path) {
        OutputFormat::Svg => {
            let backend = SVGBackend::new(path, (config.width, config.height));
            plot_edges_impl(backend, &[(field, title.as_str())], None, config)
        }
        OutputFormat::Png => {
            let backend = BitMapBackend::new(path, (config.width, config.height));
            plot_edges_impl(backend, &[(field, title.as_str())], None, config)
        }
    };
    rendered.map_err(|e| LatticeError::plot(path, e))?;

    log::info!("Saved edge plot of '{}' to {}", field.name(), path.display());
    Ok(())
}

/// Plot several edge fields side by side, each with its own color scale
///
/// `config.title` is drawn above the row of panels.
///
/// # Example
///
/// ```rust,ignore
/// let config = PlotConfig::edges("Fields").with_size(1800, 650);
/// plot_edges_panels(
///     &[(&grad_u, "∇u"), (&phi, "Φ"), (&sum, "∇u + Φ")],
///     "edges.png",
///     Some(&config),
/// )?;
/// ```
pub fn plot_edges_panels(
    panels: &[(&EdgeField, &str)],
    output_path: impl AsRef<Path>,
    config: Option<&PlotConfig>,
) -> Result<()> {
    let path = output_path.as_ref();
    let default_config = PlotConfig::edges(NO_TITLE).with_size(600 * panels.len().max(1) as u32, 650);
    let config = config.unwrap_or(&default_config);

    let rendered = match OutputFormat::from_path(path) {
        OutputFormat::Svg => {
            let backend = SVGBackend::new(path, (config.width, config.height));
            plot_edges_impl(backend, panels, Some(config.title.as_str()), config)
        }
        OutputFormat::Png => {
            let backend = BitMapBackend::new(path, (config.width, config.height));
            plot_edges_impl(backend, panels, Some(config.title.as_str()), config)
        }
    };
    rendered.map_err(|e| LatticeError::plot(path, e))?;

    log::info!("Saved {} edge panels to {}", panels.len(), path.display());
    Ok(())
}

fn plot_edges_impl<DB: DrawingBackend>(
    backend: DB,
    panels: &[(&EdgeField, &str)],
    figure_title: Option<&str>,
    config: &PlotConfig,
) -> std::result::Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    let root = match figure_title {
        Some(title) if !title.is_empty() => root.titled(title, ("sans-serif", 28))?,
        _ => root,
    };

    if !panels.is_empty() {
        let areas = root.split_evenly((1, panels.len()));
        for (area, (field, title)) in areas.iter().zip(panels) {
            draw_edges(area, field, title, config)?;
        }
    }

    root.present()?;
    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
