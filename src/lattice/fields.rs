//! Field containers for the periodic lattice
//!
//! All containers are immutable once built. Constructors validate shape so
//! that the operators and renderers can index without bounds surprises.

use nalgebra::{DMatrix, DVector};

use crate::error::{LatticeError, Result};

// =================================================================================================
// Scalar field
// =================================================================================================

/// Scalar value per vertex of an N×N periodic lattice
///
/// Row index `i`, column index `j`. [`ScalarField::at`] wraps both indices.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarField {
    name: String,
    values: DMatrix<f64>,
}

impl ScalarField {
    /// Wrap a matrix, rejecting empty and non-square input
    pub fn new(name: impl Into<String>, values: DMatrix<f64>) -> Result<Self> {
        let name = name.into();
        check_square(&name, &values)?;
        Ok(Self { name, values })
    }

    /// Build an `n × n` field from a function of `(i, j)`
    pub fn from_fn<F>(name: impl Into<String>, n: usize, f: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> f64,
    {
        Self::new(name, DMatrix::from_fn(n, n, f))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Lattice size N
    pub fn side(&self) -> usize {
        self.values.nrows()
    }

    /// Lattice spacing `h = 1/N`
    pub fn spacing(&self) -> f64 {
        1.0 / self.side() as f64
    }

    pub fn values(&self) -> &DMatrix<f64> {
        &self.values
    }

    /// Value at `(i, j)` with both indices taken modulo N
    pub fn at(&self, i: usize, j: usize) -> f64 {
        let n = self.side();
        self.values[(i % n, j % n)]
    }

    /// Cyclic shift: the result holds `u[(i + di) mod N, (j + dj) mod N]` at `(i, j)`
    pub fn shifted(&self, di: usize, dj: usize) -> Self {
        let n = self.side();
        Self {
            name: self.name.clone(),
            values: DMatrix::from_fn(n, n, |i, j| self.at(i + di, j + dj)),
        }
    }

    /// Smallest and largest finite value, `(0.0, 0.0)` when there is none
    pub fn range(&self) -> (f64, f64) {
        self.values
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |range, v| match range {
                None => Some((v, v)),
                Some((lo, hi)) => Some((f64::min(lo, v), f64::max(hi, v))),
            })
            .unwrap_or((0.0, 0.0))
    }
}

// =================================================================================================
// Edge field
// =================================================================================================

/// Values attached to the two outgoing edges of every vertex
///
/// `x[(i, j)]` lives on the edge `(i, j) → (i, j+1)`, `y[(i, j)]` on the edge
/// `(i, j) → (i+1, j)`, both modulo N.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeField {
    name: String,
    x: DMatrix<f64>,
    y: DMatrix<f64>,
}

impl EdgeField {
    /// Pair two N×N components, rejecting non-square or mismatched shapes
    pub fn new(name: impl Into<String>, x: DMatrix<f64>, y: DMatrix<f64>) -> Result<Self> {
        let name = name.into();
        check_square(&format!("{name}.x"), &x)?;
        check_square(&format!("{name}.y"), &y)?;
        if x.shape() != y.shape() {
            return Err(LatticeError::shape_mismatch(
                &format!("{name}.x"),
                x.shape(),
                &format!("{name}.y"),
                y.shape(),
            ));
        }
        Ok(Self { name, x, y })
    }

    /// Components already known to be square and of equal size
    pub(crate) fn from_parts(name: String, x: DMatrix<f64>, y: DMatrix<f64>) -> Self {
        debug_assert_eq!(x.shape(), y.shape());
        Self { name, x, y }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn side(&self) -> usize {
        self.x.nrows()
    }

    pub fn x(&self) -> &DMatrix<f64> {
        &self.x
    }

    pub fn y(&self) -> &DMatrix<f64> {
        &self.y
    }

    /// Element-wise sum of two edge fields of equal size
    pub fn checked_add(&self, other: &EdgeField, name: impl Into<String>) -> Result<EdgeField> {
        if self.side() != other.side() {
            return Err(LatticeError::shape_mismatch(
                &self.name,
                self.x.shape(),
                &other.name,
                other.x.shape(),
            ));
        }
        Ok(EdgeField {
            name: name.into(),
            x: &self.x + &other.x,
            y: &self.y + &other.y,
        })
    }

    /// Global `max(|x|, |y|)`, the color normalization of the edge renderer
    pub fn max_abs_component(&self) -> f64 {
        self.x.amax().max(self.y.amax())
    }

    /// Euclidean length of the edge pair at `(i, j)`
    pub fn magnitude(&self, i: usize, j: usize) -> f64 {
        self.x[(i, j)].hypot(self.y[(i, j)])
    }
}

// =================================================================================================
// Vertex field
// =================================================================================================

/// A 2D vector `(u, v)` per vertex
#[derive(Debug, Clone, PartialEq)]
pub struct VertexField {
    u: DMatrix<f64>,
    v: DMatrix<f64>,
}

impl VertexField {
    pub(crate) fn from_components(u: DMatrix<f64>, v: DMatrix<f64>) -> Self {
        Self { u, v }
    }

    pub fn side(&self) -> usize {
        self.u.nrows()
    }

    /// Component along the `x` edges
    pub fn u(&self) -> &DMatrix<f64> {
        &self.u
    }

    /// Component along the `y` edges
    pub fn v(&self) -> &DMatrix<f64> {
        &self.v
    }

    pub fn magnitude(&self, i: usize, j: usize) -> f64 {
        self.u[(i, j)].hypot(self.v[(i, j)])
    }

    /// Longest vector in the field (0 for an all-zero field)
    pub fn max_magnitude(&self) -> f64 {
        let n = self.side();
        (0..n)
            .flat_map(|i| (0..n).map(move |j| (i, j)))
            .map(|(i, j)| self.magnitude(i, j))
            .fold(0.0, f64::max)
    }

    /// Element-wise sum of two vertex fields of equal size
    pub fn checked_add(&self, other: &VertexField) -> Result<VertexField> {
        if self.side() != other.side() {
            return Err(LatticeError::shape_mismatch(
                "vertex field",
                self.u.shape(),
                "vertex field",
                other.u.shape(),
            ));
        }
        Ok(VertexField {
            u: &self.u + &other.u,
            v: &self.v + &other.v,
        })
    }
}

// =================================================================================================
// Samples
// =================================================================================================

/// One-dimensional set of scalar samples (∞-norms per stored configuration)
#[derive(Debug, Clone, PartialEq)]
pub struct Samples {
    name: String,
    values: DVector<f64>,
}

impl Samples {
    /// Wrap a non-empty list of samples
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Result<Self> {
        let name = name.into();
        if values.is_empty() {
            return Err(LatticeError::EmptySamples { name });
        }
        Ok(Self {
            name,
            values: DVector::from_vec(values),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false: construction rejects empty sets
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        self.values.as_slice()
    }

    pub fn min(&self) -> f64 {
        self.values.iter().cloned().fold(f64::INFINITY, f64::min)
    }

    pub fn max(&self) -> f64 {
        self.values.iter().cloned().fold(f64::NEG_INFINITY, f64::max)
    }

    pub fn mean(&self) -> f64 {
        self.values.mean()
    }
}

fn check_square(name: &str, values: &DMatrix<f64>) -> Result<()> {
    let (rows, cols) = values.shape();
    if rows == 0 || rows != cols {
        return Err(LatticeError::NotSquare {
            name: name.to_string(),
            rows,
            cols,
        });
    }
    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_field_rejects_non_square() {
        let err = ScalarField::new("u", DMatrix::zeros(3, 4)).unwrap_err();
        assert!(matches!(err, LatticeError::NotSquare { rows: 3, cols: 4, .. }));
    }

    #[test]
    fn test_scalar_range_ignores_non_finite_values() {
        let u = ScalarField::new(
            "u",
            DMatrix::from_row_slice(2, 2, &[f64::INFINITY, -2.0, f64::NAN, 3.5]),
        )
        .unwrap();
        assert_eq!(u.range(), (-2.0, 3.5));

        let blank = ScalarField::from_fn("u", 2, |_, _| f64::NEG_INFINITY).unwrap();
        assert_eq!(blank.range(), (0.0, 0.0));
    }

    #[test]
    fn test_scalar_field_rejects_empty() {
        assert!(ScalarField::new("u", DMatrix::zeros(0, 0)).is_err());
    }

    #[test]
    fn test_scalar_field_wraps_indices() {
        let u = ScalarField::from_fn("u", 3, |i, j| (10 * i + j) as f64).unwrap();
        assert_eq!(u.at(3, 4), u.at(0, 1));
        assert_eq!(u.side(), 3);
        assert!((u.spacing() - 1.0 / 3.0).abs() < 1e-15);
    }

    #[test]
    fn test_shifted_moves_values() {
        let u = ScalarField::from_fn("u", 4, |i, j| (4 * i + j) as f64).unwrap();
        let s = u.shifted(1, 3);
        assert_eq!(s.values()[(0, 0)], u.values()[(1, 3)]);
        assert_eq!(s.values()[(3, 1)], u.values()[(0, 0)]);
    }

    #[test]
    fn test_edge_field_rejects_mismatched_components() {
        let err = EdgeField::new("phi", DMatrix::zeros(3, 3), DMatrix::zeros(4, 4)).unwrap_err();
        assert!(matches!(err, LatticeError::ShapeMismatch { .. }));
    }

    #[test]
    fn test_edge_field_add_rejects_other_size() {
        let a = EdgeField::new("a", DMatrix::zeros(3, 3), DMatrix::zeros(3, 3)).unwrap();
        let b = EdgeField::new("b", DMatrix::zeros(4, 4), DMatrix::zeros(4, 4)).unwrap();
        assert!(a.checked_add(&b, "sum").is_err());
    }

    #[test]
    fn test_max_abs_component() {
        let x = DMatrix::from_row_slice(2, 2, &[0.5, -2.0, 1.0, 0.0]);
        let y = DMatrix::from_row_slice(2, 2, &[0.0, 1.5, -1.0, 0.25]);
        let field = EdgeField::new("e", x, y).unwrap();
        assert_eq!(field.max_abs_component(), 2.0);
        assert_eq!(field.magnitude(0, 1), 2.5);
    }

    #[test]
    fn test_samples_statistics() {
        let samples = Samples::new("energies", vec![1.0, 3.0, 2.0]).unwrap();
        assert_eq!(samples.len(), 3);
        assert_eq!(samples.min(), 1.0);
        assert_eq!(samples.max(), 3.0);
        assert!((samples.mean() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_samples_reject_empty() {
        assert!(matches!(
            Samples::new("energies", vec![]),
            Err(LatticeError::EmptySamples { .. })
        ));
    }
}
