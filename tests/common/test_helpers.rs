//! Helper functions for integration tests

use std::path::Path;

use lattice_viz::io::read_matrix;
use nalgebra::DMatrix;

/// Assert that two matrices have the same shape and agree element-wise
pub fn assert_matrices_close(a: &DMatrix<f64>, b: &DMatrix<f64>, tolerance: f64, message: &str) {
    assert_eq!(a.shape(), b.shape(), "{}: shape mismatch", message);

    for ((i, j), (&va, &vb)) in (0..a.nrows())
        .flat_map(|i| (0..a.ncols()).map(move |j| (i, j)))
        .zip(a.transpose().iter().zip(b.transpose().iter()))
    {
        let diff = (va - vb).abs();
        assert!(
            diff <= tolerance,
            "{}: element ({}, {}) differs by {} (tolerance {})",
            message, i, j, diff, tolerance
        );
    }
}

/// Read a matrix file written by a test, panicking with the path on failure
pub fn read_back(path: &Path) -> DMatrix<f64> {
    read_matrix(path).unwrap_or_else(|e| panic!("cannot read {}: {}", path.display(), e))
}
