//! Output module for lattice diagnostics
//!
//! Figures are written with `plotters`; tabular data goes through
//! [`crate::io`].
//!
//! # Architecture
//!
//! ```text
//! output/
//! ├── mod.rs              ← This file
//! └── visualization/      ← Plots and graphics
//!     ├── mod.rs
//!     ├── config.rs
//!     ├── colormap.rs
//!     ├── heatmap.rs
//!     ├── edges.rs
//!     ├── quiver.rs
//!     └── histogram.rs
//! ```
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use lattice_viz::output::{plot_heatmap, plot_histogram};
//!
//! plot_heatmap(&u, "plot_u.png", None)?;
//! plot_histogram(&energies, infinity_norm(&grad_u), "hist_infty_norms.png", None)?;
//! ```

pub mod visualization;

// Re-export commonly used items for convenience
pub use visualization::{
    draw_edges, plot_edges, plot_edges_panels, plot_heatmap, plot_histogram, plot_vertex_quiver,
    ColormapKind, PlotConfig,
};
