//! Error types
//!
//! Every failure names the file or field it concerns, so a broken input set
//! can be fixed without a debugger.

use std::path::PathBuf;

use thiserror::Error;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, LatticeError>;

/// Errors raised while loading, validating or rendering lattice fields
#[derive(Error, Debug)]
pub enum LatticeError {
    /// The file could not be opened, read or written
    #[error("cannot access '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The delimited reader failed below the cell level
    #[error("cannot read delimited data from '{}': {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A cell is not a floating-point number
    #[error("'{}' line {row}, column {column}: '{value}' is not a number", path.display())]
    Parse {
        path: PathBuf,
        row: usize,
        column: usize,
        value: String,
    },

    /// A cell parses as infinity or NaN
    #[error("'{}' line {row}, column {column}: '{value}' is not finite", path.display())]
    NonFinite {
        path: PathBuf,
        row: usize,
        column: usize,
        value: String,
    },

    /// Rows of a matrix file have different lengths
    #[error("'{}' line {row}: {found} values, expected {expected}", path.display())]
    Ragged {
        path: PathBuf,
        row: usize,
        expected: usize,
        found: usize,
    },

    /// The file holds no numeric rows
    #[error("'{}' contains no data", path.display())]
    Empty { path: PathBuf },

    /// A lattice field must be N×N with N ≥ 1
    #[error("field '{name}' must be a non-empty square matrix, got {rows}x{cols}")]
    NotSquare {
        name: String,
        rows: usize,
        cols: usize,
    },

    /// Two fields combined in one figure or operation differ in shape
    #[error("field '{left}' is {}x{} but '{right}' is {}x{}", left_shape.0, left_shape.1, right_shape.0, right_shape.1)]
    ShapeMismatch {
        left: String,
        left_shape: (usize, usize),
        right: String,
        right_shape: (usize, usize),
    },

    /// A histogram needs at least one sample
    #[error("sample set '{name}' is empty")]
    EmptySamples { name: String },

    /// The drawing backend failed
    #[error("cannot render '{}': {message}", path.display())]
    Plot { path: PathBuf, message: String },
}

impl LatticeError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn shape_mismatch(
        left: &str,
        left_shape: (usize, usize),
        right: &str,
        right_shape: (usize, usize),
    ) -> Self {
        Self::ShapeMismatch {
            left: left.to_string(),
            left_shape,
            right: right.to_string(),
            right_shape,
        }
    }

    pub(crate) fn plot(path: impl Into<PathBuf>, error: impl std::fmt::Display) -> Self {
        Self::Plot {
            path: path.into(),
            message: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_mismatch_message_names_both_fields() {
        let err = LatticeError::shape_mismatch("u", (4, 4), "phi", (5, 5));
        let message = err.to_string();
        assert!(message.contains("'u' is 4x4"));
        assert!(message.contains("'phi' is 5x5"));
    }

    #[test]
    fn test_parse_message_locates_cell() {
        let err = LatticeError::Parse {
            path: PathBuf::from("u.csv"),
            row: 3,
            column: 2,
            value: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "'u.csv' line 3, column 2: 'abc' is not a number");
    }
}
