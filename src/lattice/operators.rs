//! Finite-difference operators on the periodic lattice
//!
//! # Forward gradient
//!
//! ```text
//! grad_x[i, j] = u[i, (j+1) mod N] - u[i, j]
//! grad_y[i, j] = u[(i+1) mod N, j] - u[i, j]
//! ```
//!
//! Boundary cells wrap rather than clamp: the lattice is a torus. This is
//! the only differencing scheme offered.
//!
//! # Vertex vectors
//!
//! Each vertex receives the value of its outgoing edges divided by the
//! lattice spacing `h = 1/N`. The incoming edge is ignored, so this is a
//! one-sided estimate of the directional derivative, not a central one.

use nalgebra::DMatrix;

use super::fields::{EdgeField, ScalarField, VertexField};
use super::map_elements;

/// Periodic forward differences of a scalar field
///
/// The result is an [`EdgeField`] named `grad_<name>`.
pub fn forward_gradient(u: &ScalarField) -> EdgeField {
    let n = u.side();
    let x = DMatrix::from_fn(n, n, |i, j| u.at(i, j + 1) - u.at(i, j));
    let y = DMatrix::from_fn(n, n, |i, j| u.at(i + 1, j) - u.at(i, j));
    EdgeField::from_parts(format!("grad_{}", u.name()), x, y)
}

/// Scale outgoing edge values by `1/h = N` to obtain one vector per vertex
pub fn vertex_vectors(edges: &EdgeField) -> VertexField {
    let inv_h = edges.side() as f64;
    VertexField::from_components(
        map_elements(edges.x(), |e| e * inv_h),
        map_elements(edges.y(), |e| e * inv_h),
    )
}

/// Largest per-vertex magnitude `max sqrt(x² + y²)` of an edge field
///
/// This is the ∞-norm the producing solver minimises and samples, and the
/// reference line of the ∞-norm histogram.
pub fn infinity_norm(edges: &EdgeField) -> f64 {
    let n = edges.side();
    (0..n)
        .flat_map(|i| (0..n).map(move |j| (i, j)))
        .map(|(i, j)| edges.magnitude(i, j))
        .fold(0.0, f64::max)
}

// =================================================================================================
// Tests
// =================================================================================================
