//! Lattice fields and solver output directories for integration tests

use std::path::Path;

use lattice_viz::io::{write_field, write_samples};
use lattice_viz::lattice::{forward_gradient, EdgeField, Samples, ScalarField};
use nalgebra::DMatrix;

/// `u[i, j] = i + j` on an `n × n` torus
pub fn diagonal_ramp(n: usize) -> ScalarField {
    ScalarField::from_fn("u", n, |i, j| (i + j) as f64).unwrap()
}

/// Smooth periodic edge field: `x` varies with the row, `y` with the column
pub fn rotating_cycle(n: usize, amplitude: f64) -> EdgeField {
    let angle = |k: usize| 2.0 * std::f64::consts::PI * k as f64 / n as f64;
    let x = DMatrix::from_fn(n, n, |i, _| amplitude * angle(i).cos());
    let y = DMatrix::from_fn(n, n, |_, j| amplitude * angle(j).sin());
    EdgeField::new("phi", x, y).unwrap()
}

/// Write the six CSV files the producing solver leaves behind
///
/// `ux`/`uy` are the forward gradient of `u`; `energies` holds `samples`.
pub fn write_solver_output(dir: &Path, u: &ScalarField, phi: &EdgeField, samples: &[f64]) {
    let grad = forward_gradient(u);
    write_field(dir.join("u.csv"), u.values(), None).unwrap();
    write_field(dir.join("ux.csv"), grad.x(), None).unwrap();
    write_field(dir.join("uy.csv"), grad.y(), None).unwrap();
    write_field(dir.join("phi_x.csv"), phi.x(), None).unwrap();
    write_field(dir.join("phi_y.csv"), phi.y(), None).unwrap();

    let energies = Samples::new("energies", samples.to_vec()).unwrap();
    write_samples(dir.join("energies.csv"), &energies, None).unwrap();
}
