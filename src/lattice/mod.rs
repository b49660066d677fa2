//! Periodic lattice fields and finite-difference operators
//!
//! An N×N lattice with torus topology: index arithmetic wraps modulo N.
//! Three kinds of data live on it:
//!
//! - **Scalar field** (`u`): one value per vertex
//! - **Edge field** (`∇u`, `Φ`): per vertex `(i, j)`, one value on the outgoing
//!   edge to `(i, j+1)` and one on the outgoing edge to `(i+1, j)`
//! - **Vertex field**: a 2D vector per vertex, obtained by scaling the edge
//!   values by `1/h` with `h = 1/N`
//!
//! # Example
//!
//! ```rust
//! use lattice_viz::lattice::{forward_gradient, infinity_norm, EdgeField, ScalarField};
//! use nalgebra::DMatrix;
//!
//! # fn main() -> lattice_viz::Result<()> {
//! let u = ScalarField::from_fn("u", 8, |i, _| i as f64)?;
//! let phi = EdgeField::new("phi", DMatrix::zeros(8, 8), DMatrix::zeros(8, 8))?;
//!
//! let grad = forward_gradient(&u);
//! let improved = grad.checked_add(&phi, "grad_u + phi")?;
//! assert_eq!(infinity_norm(&improved), 7.0);
//! # Ok(())
//! # }
//! ```

mod fields;
mod operators;
mod summary;

pub use fields::{EdgeField, Samples, ScalarField, VertexField};
pub use operators::{forward_gradient, infinity_norm, vertex_vectors};
pub use summary::{FieldSummary, SampleStats};

use nalgebra::DMatrix;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Apply `f` to every element of a matrix, in parallel for large fields
pub(crate) fn map_elements<F>(matrix: &DMatrix<f64>, f: F) -> DMatrix<f64>
where
    F: Fn(f64) -> f64 + Sync + Send,
{
    let mut result = matrix.clone();
    if result.len() > 999 {
        #[cfg(feature = "parallel")]
        result.as_mut_slice().par_iter_mut().for_each(|x| *x = f(*x));
        #[cfg(not(feature = "parallel"))]
        result.iter_mut().for_each(|x| *x = f(*x));
    } else {
        result.iter_mut().for_each(|x| *x = f(*x));
    }
    result
}
