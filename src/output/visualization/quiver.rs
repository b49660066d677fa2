//! Quiver plots of vertex vectors
//!
//! Three panels side by side: `∇u`, `Φ` and `∇u + Φ`, each converted to one
//! vector per vertex by scaling with `1/h`. The vector at vertex `(i, j)` is
//! drawn at column `j`, row `i`, with row 0 at the top of the panel and
//! positive `V` pointing up the screen. Arrows are scaled per panel so the
//! longest one spans 0.9 of a cell.

use std::error::Error;
use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;

use super::config::{IntoOptionalTitle, PlotConfig, NO_TITLE};
use super::{square_area, OutputFormat};
use crate::error::{LatticeError, Result};
use crate::lattice::{
    forward_gradient, infinity_norm, vertex_vectors, EdgeField, ScalarField, VertexField,
};

/// Length of the longest arrow, in cells
const LONGEST_ARROW: f64 = 0.9;

/// Pixels reserved above a panel for its title
const PANEL_CAPTION: u32 = 40;

const PANEL_TITLES: [&str; 3] = [
    "Vertex vectors of ∇u",
    "Vertex vectors of Φ",
    "Vertex vectors of ∇u + Φ",
];

/// One arrow in panel coordinates (column to the right, rows upward from the bottom row)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arrow {
    pub tail: (f64, f64),
    pub tip: (f64, f64),
}

impl Arrow {
    pub fn length(&self) -> f64 {
        (self.tip.0 - self.tail.0).hypot(self.tip.1 - self.tail.1)
    }

    /// Triangle of the arrowhead: tip, then the two barbs
    ///
    /// A degenerate arrow collapses its head onto the tip.
    fn head(&self) -> Vec<(f64, f64)> {
        let length = self.length();
        if !(length > 0.0 && length.is_finite()) {
            return vec![self.tip; 3];
        }
        let (dx, dy) = (
            (self.tip.0 - self.tail.0) / length,
            (self.tip.1 - self.tail.1) / length,
        );
        let size = (0.35 * length).min(0.25);
        let base = (self.tip.0 - dx * size, self.tip.1 - dy * size);
        let half = 0.5 * size;
        vec![
            self.tip,
            (base.0 - dy * half, base.1 + dx * half),
            (base.0 + dy * half, base.1 - dx * half),
        ]
    }
}

/// Arrows of a vertex field, scaled so the longest spans 0.9 cell
///
/// Vertex `(i, j)` is placed at `(j, N - 1 - i)`. Vectors that scale to zero
/// length in panel coordinates produce no arrow, so an all-zero field yields
/// an empty list.
pub fn vertex_arrows(field: &VertexField) -> Vec<Arrow> {
    let n = field.side();
    let longest = field.max_magnitude();
    if !(longest > 0.0 && longest.is_finite()) {
        return Vec::new();
    }
    let scale = LONGEST_ARROW / longest;

    (0..n)
        .flat_map(|i| (0..n).map(move |j| (i, j)))
        .map(|(i, j)| {
            let tail = (j as f64, (n - 1 - i) as f64);
            Arrow {
                tail,
                tip: (
                    tail.0 + field.u()[(i, j)] * scale,
                    tail.1 + field.v()[(i, j)] * scale,
                ),
            }
        })
        .filter(|arrow| arrow.length() > 0.0)
        .collect()
}

/// Plot the vertex vectors of `∇u`, `Φ` and `∇u + Φ`
///
/// The gradient is always recomputed from `u`.
///
/// # Arguments
///
/// * `u`           - Scalar potential
/// * `phi`         - Cycle field, same size as `u`
/// * `title`       - Figure title (`&str`, `String`) or [`NO_TITLE`] for `config.title`
/// * `output_path` - Output file path (`.png` or `.svg`)
/// * `config`      - Optional configuration; `series_colors` overrides red, green, blue
///
/// # Errors
///
/// `ShapeMismatch` when `u` and `phi` differ in size; nothing is drawn then.
pub fn plot_vertex_quiver(
    u: &ScalarField,
    phi: &EdgeField,
    title: impl IntoOptionalTitle,
    output_path: impl AsRef<Path>,
    config: Option<&PlotConfig>,
) -> Result<()> {
    if u.side() != phi.side() {
        return Err(LatticeError::shape_mismatch(
            u.name(),
            u.values().shape(),
            phi.name(),
            phi.x().shape(),
        ));
    }

    let path = output_path.as_ref();
    let default_config = PlotConfig::quiver(NO_TITLE);
    let config = config.unwrap_or(&default_config);
    let title = title
        .into_optional_title()
        .unwrap_or_else(|| config.title.clone());

    let grad_u = forward_gradient(u);
    let combined = grad_u.checked_add(phi, "grad_u + phi")?;
    log::info!(
        "Quiver: ||∇u||∞={:.6} ||Φ||∞={:.6}",
        infinity_norm(&grad_u),
        infinity_norm(phi)
    );
    let fields = [
        vertex_vectors(&grad_u),
        vertex_vectors(phi),
        vertex_vectors(&combined),
    ];

    let rendered = match OutputFormat::from_path(path) {
        OutputFormat::Svg => {
            let backend = SVGBackend::new(path, (config.width, config.height));
            plot_quiver_impl(backend, &fields, &title, config)
        }
        OutputFormat::Png => {
            let backend = BitMapBackend::new(path, (config.width, config.height));
            plot_quiver_impl(backend, &fields, &title, config)
        }
    };
    rendered.map_err(|e| LatticeError::plot(path, e))?;

    log::info!("Saved quiver plot to {}", path.display());
    Ok(())
}

fn plot_quiver_impl<DB: DrawingBackend>(
    backend: DB,
    fields: &[VertexField; 3],
    title: &str,
    config: &PlotConfig,
) -> std::result::Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&config.background)?;
    let root = root.titled(title, ("sans-serif", 28))?;

    let areas = root.split_evenly((1, 3));
    for (k, (area, field)) in areas.iter().zip(fields).enumerate() {
        let color = config.get_series_color(k);
        draw_quiver_panel(area, field, PANEL_TITLES[k], color, config.line_width)?;
    }

    root.present()?;
    Ok(())
}

fn draw_quiver_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    field: &VertexField,
    title: &str,
    color: RGBColor,
    line_width: u32,
) -> std::result::Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let n = field.side() as f64;
    let panel = square_area(area, PANEL_CAPTION);

    let mut chart = ChartBuilder::on(&panel)
        .caption(title, ("sans-serif", 22).into_font())
        .margin(8)
        .build_cartesian_2d(-0.5..n - 0.5, -0.5..n - 0.5)?;

    // Frame only, no ticks
    chart.draw_series(std::iter::once(Rectangle::new(
        [(-0.5, -0.5), (n - 0.5, n - 0.5)],
        BLACK.mix(0.4).stroke_width(1),
    )))?;

    let arrows = vertex_arrows(field);
    chart.draw_series(
        arrows
            .iter()
            .map(|a| PathElement::new(vec![a.tail, a.tip], color.stroke_width(line_width))),
    )?;
    chart.draw_series(
        arrows
            .iter()
            .map(|a| Polygon::new(a.head(), color.filled())),
    )?;

    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
