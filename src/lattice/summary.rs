//! Scalar diagnostics of a field set
//!
//! The producing solver searches for a cycle field `Φ` that lowers
//! `||∇u + Φ||∞`. [`FieldSummary`] reports how far it got: the ∞-norm of the
//! plain gradient, of `Φ`, of their sum, and the spread of the sampled norms.

use std::fmt;

use super::fields::{EdgeField, Samples};
use super::operators::infinity_norm;

/// Count, extremes and mean of a sample set
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleStats {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

impl SampleStats {
    pub fn from_samples(samples: &Samples) -> Self {
        Self {
            count: samples.len(),
            min: samples.min(),
            max: samples.max(),
            mean: samples.mean(),
        }
    }
}

/// ∞-norms of `∇u`, `Φ` and `∇u + Φ` on one lattice
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSummary {
    /// Lattice size N
    pub side: usize,
    pub gradient_norm: f64,
    pub cycle_norm: f64,
    pub combined_norm: f64,
    pub samples: Option<SampleStats>,
}

impl FieldSummary {
    /// Summarise a gradient, a cycle field and their precomputed sum
    pub fn new(grad_u: &EdgeField, phi: &EdgeField, combined: &EdgeField) -> Self {
        Self {
            side: grad_u.side(),
            gradient_norm: infinity_norm(grad_u),
            cycle_norm: infinity_norm(phi),
            combined_norm: infinity_norm(combined),
            samples: None,
        }
    }

    pub fn with_samples(mut self, samples: &Samples) -> Self {
        self.samples = Some(SampleStats::from_samples(samples));
        self
    }

    /// Fraction by which `Φ` lowers the ∞-norm (0 when `∇u` vanishes)
    pub fn improvement(&self) -> f64 {
        if self.gradient_norm > 0.0 {
            1.0 - self.combined_norm / self.gradient_norm
        } else {
            0.0
        }
    }
}

impl fmt::Display for FieldSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "N={} ||∇u||∞={:.6} ||Φ||∞={:.6} ||∇u+Φ||∞={:.6} ({:+.2}%)",
            self.side,
            self.gradient_norm,
            self.cycle_norm,
            self.combined_norm,
            -100.0 * self.improvement()
        )?;
        if let Some(stats) = &self.samples {
            write!(
                f,
                " samples: n={} min={:.6} max={:.6} mean={:.6}",
                stats.count, stats.min, stats.max, stats.mean
            )?;
        }
        Ok(())
    }
}
