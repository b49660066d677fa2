//! lattice-viz: diagnostics for fields on a periodic 2D lattice
//!
//! Renders quiver plots, edge-colored lattice plots, heatmaps and histograms
//! for a scalar potential `u` and a cycle field `Φ` produced by an external
//! solver on an N×N torus. The crate does not simulate anything; it loads the
//! solver's CSV output, derives `∇u` and `∇u + Φ`, and draws them.
//!
//! # Architecture
//!
//! The crate is built on two layers:
//!
//! 1. **Numerics** ([`lattice`])
//!    - Periodic field containers (`ScalarField`, `EdgeField`, `VertexField`)
//!    - Forward gradient with wraparound and the vertex-vector assembler
//!    - ∞-norm diagnostics
//!
//! 2. **Input / output** ([`io`], [`output`], [`pipeline`])
//!    - Comma-delimited matrix loading and writing
//!    - `plotters` renderers writing PNG or SVG files
//!    - The fixed-filename pipelines driven by a [`pipeline::PipelineConfig`]
//!
//! # Quick Start
//!
//! ```rust
//! use lattice_viz::lattice::{forward_gradient, vertex_vectors, ScalarField};
//!
//! # fn main() -> lattice_viz::Result<()> {
//! // u[i, j] = i + j on a 4×4 torus
//! let u = ScalarField::from_fn("u", 4, |i, j| (i + j) as f64)?;
//!
//! let grad = forward_gradient(&u);
//! assert_eq!(grad.x()[(0, 0)], 1.0);
//! assert_eq!(grad.x()[(0, 3)], -3.0);
//!
//! // Edge differences scaled by 1/h = N
//! let vertices = vertex_vectors(&grad);
//! assert_eq!(vertices.u()[(0, 0)], 4.0);
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`lattice`]: Field types and finite-difference operators
//! - [`io`]: CSV loading and writing
//! - [`output`]: Plot rendering
//! - [`pipeline`]: Static and quiver figure pipelines

pub mod error;
pub mod io;
pub mod lattice;
pub mod output;
pub mod pipeline;

pub use error::{LatticeError, Result};

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //!
    //! use lattice_viz::prelude::*;
    //! ```
    pub use crate::error::{LatticeError, Result};
    pub use crate::lattice::{
        forward_gradient, infinity_norm, vertex_vectors, EdgeField, FieldSummary, Samples,
        ScalarField, VertexField,
    };
    pub use crate::output::visualization::{ColormapKind, PlotConfig};
    pub use crate::pipeline::{run_quiver, run_static, PipelineConfig};
}
