//! Visualization of lattice fields
//!
//! This module renders fields using the `plotters` library. Every public
//! `plot_*` function writes one image file; the format follows the file
//! extension (`.svg` selects the SVG backend, anything else a PNG bitmap).
//!
//! # Organization
//!
//! - **config**: Shared plot configuration (`PlotConfig`)
//! - **colormap**: Viridis and inferno colormaps
//! - **heatmap**: Scalar potential `u` as colored cells with a colorbar
//! - **edges**: Edge fields drawn as colored lattice segments
//! - **quiver**: Vertex vectors of `∇u`, `Φ` and `∇u + Φ` as arrows
//! - **histogram**: Distribution of sampled ∞-norms
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use lattice_viz::output::visualization::{plot_edges, plot_heatmap, PlotConfig, NO_TITLE};
//!
//! plot_heatmap(&u, "plot_u.png", None)?;
//!
//! // Edge plot with a custom title
//! plot_edges(&grad_u, "plot_grad_u.png", "Gradient ∇u", None)?;
//!
//! // Same plot as SVG, larger
//! let config = PlotConfig::edges(NO_TITLE).with_size(1200, 1200);
//! plot_edges(&grad_u, "plot_grad_u.svg", "Gradient ∇u", Some(&config))?;
//! ```
//!
//! # When to Use Which Module
//!
//! | Data | Module | Function |
//! |------|--------|----------|
//! | Scalar potential | `heatmap` | `plot_heatmap` |
//! | Edge field, one panel | `edges` | `plot_edges` |
//! | Edge fields side by side | `edges` | `plot_edges_panels` |
//! | Edge field on your own area | `edges` | `draw_edges` |
//! | Vertex vectors | `quiver` | `plot_vertex_quiver` |
//! | Sampled ∞-norms | `histogram` | `plot_histogram` |

use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;

pub mod colormap;
pub mod config;
pub mod edges;
pub mod heatmap;
pub mod histogram;
pub mod quiver;

pub use colormap::{Colormap, ColormapKind};
pub use config::{IntoOptionalTitle, PlotConfig, NO_TITLE};
pub use edges::{draw_edges, edge_color_positions, edge_segments, plot_edges, plot_edges_panels};
pub use heatmap::{cell_rectangle, plot_heatmap};
pub use histogram::{histogram_counts, plot_histogram, Histogram};
pub use quiver::{plot_vertex_quiver, vertex_arrows, Arrow};

/// Image format chosen from the output path
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum OutputFormat {
    Png,
    Svg,
}

impl OutputFormat {
    pub(crate) fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|s| s.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("svg") => OutputFormat::Svg,
            _ => OutputFormat::Png,
        }
    }
}

/// Largest centered square sub-area, leaving `caption` pixels above it
pub(crate) fn square_area<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    caption: u32,
) -> DrawingArea<DB, Shift> {
    let (width, height) = area.dim_in_pixel();
    let side = width.min(height.saturating_sub(caption)).max(1);
    let left = width.saturating_sub(side) / 2;
    let top = height.saturating_sub(side + caption) / 2;
    area.clone().shrink((left, top), (side, side + caption))
}

/// Largest bound an axis may take, so the span and its padding stay finite
const AXIS_LIMIT: f64 = f64::MAX / 4.0;

/// Finite, non-empty axis range covering `[lo, hi]` where possible
///
/// A non-finite bound falls back to the other one (or 0), bounds are clamped
/// to `±f64::MAX / 4`, and a collapsed range is widened by at least 0.5 on
/// each side.
pub(crate) fn axis_range(lo: f64, hi: f64) -> (f64, f64) {
    let (lo, hi) = match (lo.is_finite(), hi.is_finite()) {
        (true, true) => (lo, hi),
        (true, false) => (lo, lo),
        (false, true) => (hi, hi),
        (false, false) => (0.0, 0.0),
    };
    let (lo, hi) = (lo.clamp(-AXIS_LIMIT, AXIS_LIMIT), hi.clamp(-AXIS_LIMIT, AXIS_LIMIT));
    if hi > lo {
        (lo, hi)
    } else {
        let half = f64::max(0.5, lo.abs() * 1e-9);
        (lo - half, lo + half)
    }
}
