//! Delimited text matrices
//!
//! # Input format
//!
//! ```csv
//! # optional comment lines are skipped
//! 0.00000000,0.12500000,0.25000000
//! 0.12500000,0.25000000,0.37500000
//! 0.25000000,0.37500000,0.50000000
//! ```
//!
//! Blank lines and lines starting with `#` are ignored. Every remaining line
//! must hold the same number of finite numeric cells (`inf` and `NaN` are
//! rejected). Failures name the file, the line and the column.
//!
//! # Output format
//!
//! [`write_field`] and [`write_samples`] use the configured delimiter and
//! precision (default `,` and 8 decimals), optionally preceded by a
//! metadata header:
//!
//! ```csv
//! # Lattice Field Data
//! # Generated: 2026-10-19T08:00:00+00:00
//! # Title: potential u
//! # Side: 3
//! #
//! 0.00000000,0.12500000,0.25000000
//! ...
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use nalgebra::DMatrix;

use crate::error::{LatticeError, Result};
use crate::lattice::{EdgeField, Samples, ScalarField};

// =============================================================================
// Configuration Structures
// =============================================================================

/// Configuration for writing delimited files
///
/// # Example
///
/// ```rust,ignore
/// let config = CsvConfig {
///     precision: 12,
///     ..Default::default()
/// };
/// ```
#[derive(Clone, Debug)]
pub struct CsvConfig {
    /// Column delimiter (default: ',')
    pub delimiter: char,

    /// Number of decimal places (default: 8, as the producing solver writes)
    pub precision: usize,

    /// Metadata written as `#` comment lines before the data
    pub metadata: Option<CsvMetadata>,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            precision: 8,
            metadata: None,
        }
    }
}

impl CsvConfig {
    /// Builder pattern: set delimiter
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Builder pattern: set precision
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Builder pattern: enable metadata
    pub fn with_metadata(mut self, metadata: CsvMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

/// Metadata for header comments
///
/// Only fields that are set end up in the header.
#[derive(Clone, Debug, Default)]
pub struct CsvMetadata {
    /// Free-form description of the data
    pub title: Option<String>,

    /// Additional key/value lines
    pub custom: Vec<(String, String)>,
}

impl CsvMetadata {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    /// Add custom parameter
    pub fn add_custom(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.custom.push((key.into(), value.into()));
    }
}

// =============================================================================
// Reading
// =============================================================================

/// Read a comma-delimited numeric matrix of any rectangular shape
pub fn read_matrix(path: impl AsRef<Path>) -> Result<DMatrix<f64>> {
    let path = path.as_ref();

    let file = File::open(path).map_err(|e| LatticeError::io(path, e))?;
    let mut reader = ::csv::ReaderBuilder::new()
        .has_headers(false)
        .delimiter(b',')
        .comment(Some(b'#'))
        .trim(::csv::Trim::All)
        .flexible(true)
        .from_reader(file);

    let mut values = Vec::new();
    let mut columns: Option<usize> = None;
    let mut rows = 0;

    for (index, record) in reader.records().enumerate() {
        let record = record.map_err(|e| csv_error(path, e))?;
        let line = record
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(index + 1);

        // A trailing delimiter leaves one empty cell behind
        let cells: Vec<&str> = record
            .iter()
            .enumerate()
            .filter(|(k, cell)| !(cell.is_empty() && *k + 1 == record.len() && *k > 0))
            .map(|(_, cell)| cell)
            .collect();

        if cells.iter().all(|cell| cell.is_empty()) {
            continue;
        }

        match columns {
            None => columns = Some(cells.len()),
            Some(expected) if expected != cells.len() => {
                return Err(LatticeError::Ragged {
                    path: path.to_path_buf(),
                    row: line,
                    expected,
                    found: cells.len(),
                });
            }
            Some(_) => {}
        }

        for (column, cell) in cells.iter().enumerate() {
            let value = cell.parse::<f64>().map_err(|_| LatticeError::Parse {
                path: path.to_path_buf(),
                row: line,
                column: column + 1,
                value: cell.to_string(),
            })?;
            if !value.is_finite() {
                return Err(LatticeError::NonFinite {
                    path: path.to_path_buf(),
                    row: line,
                    column: column + 1,
                    value: cell.to_string(),
                });
            }
            values.push(value);
        }
        rows += 1;
    }

    let columns = columns.ok_or_else(|| LatticeError::Empty {
        path: path.to_path_buf(),
    })?;

    log::debug!("Read {}x{} matrix from {}", rows, columns, path.display());
    Ok(DMatrix::from_row_slice(rows, columns, &values))
}

/// Load an N×N scalar field
pub fn load_field(name: &str, path: impl AsRef<Path>) -> Result<ScalarField> {
    ScalarField::new(name, read_matrix(path)?)
}

/// Load the two components of an edge field from separate files
pub fn load_edge_field(
    name: &str,
    x_path: impl AsRef<Path>,
    y_path: impl AsRef<Path>,
) -> Result<EdgeField> {
    EdgeField::new(name, read_matrix(x_path)?, read_matrix(y_path)?)
}

/// Load a one-dimensional sample set
///
/// A single column and a single row are both accepted. Wider matrices are
/// flattened row by row.
pub fn load_samples(name: &str, path: impl AsRef<Path>) -> Result<Samples> {
    let matrix = read_matrix(path)?;
    if matrix.nrows() > 1 && matrix.ncols() > 1 {
        log::debug!(
            "Flattening {}x{} sample matrix '{}'",
            matrix.nrows(),
            matrix.ncols(),
            name
        );
    }
    // Row-major order, matching the file layout
    let values = matrix.transpose().iter().copied().collect();
    Samples::new(name, values)
}

// =============================================================================
// Writing
// =============================================================================

/// Write metadata header comments
fn write_metadata_header<W: Write>(
    writer: &mut W,
    metadata: &CsvMetadata,
    side: usize,
) -> std::io::Result<()> {
    writeln!(writer, "# Lattice Field Data")?;

    let now = chrono::Utc::now();
    writeln!(writer, "# Generated: {}", now.to_rfc3339())?;

    if let Some(title) = &metadata.title {
        writeln!(writer, "# Title: {}", title)?;
    }
    writeln!(writer, "# Side: {}", side)?;

    for (key, value) in &metadata.custom {
        writeln!(writer, "# {}: {}", key, value)?;
    }

    writeln!(writer, "#")?;
    Ok(())
}

/// Format number with configured precision
fn format_number(value: f64, config: &CsvConfig) -> String {
    format!("{:.prec$}", value, prec = config.precision)
}

fn write_rows<I>(path: &Path, rows: I, side: usize, config: &CsvConfig) -> Result<()>
where
    I: Iterator<Item = Vec<f64>>,
{
    let file = File::create(path).map_err(|e| LatticeError::io(path, e))?;
    let mut writer = BufWriter::new(file);

    let result = (|| -> std::io::Result<()> {
        if let Some(metadata) = &config.metadata {
            write_metadata_header(&mut writer, metadata, side)?;
        }
        let delimiter = config.delimiter.to_string();
        for row in rows {
            let line: Vec<String> = row.iter().map(|v| format_number(*v, config)).collect();
            writeln!(writer, "{}", line.join(&delimiter))?;
        }
        writer.flush()
    })();

    result.map_err(|e| LatticeError::io(path, e))
}

/// Write a matrix, one row per line
pub fn write_field(
    path: impl AsRef<Path>,
    values: &DMatrix<f64>,
    config: Option<&CsvConfig>,
) -> Result<()> {
    let path = path.as_ref();
    let binding = CsvConfig::default();
    let config = config.unwrap_or(&binding);

    let rows = values
        .row_iter()
        .map(|row| row.iter().copied().collect::<Vec<f64>>());
    write_rows(path, rows, values.nrows(), config)?;

    log::debug!("Wrote {}x{} matrix to {}", values.nrows(), values.ncols(), path.display());
    Ok(())
}

/// Write samples as a single column
pub fn write_samples(
    path: impl AsRef<Path>,
    samples: &Samples,
    config: Option<&CsvConfig>,
) -> Result<()> {
    let path = path.as_ref();
    let binding = CsvConfig::default();
    let config = config.unwrap_or(&binding);

    let rows = samples.as_slice().iter().map(|v| vec![*v]);
    write_rows(path, rows, samples.len(), config)
}

fn csv_error(path: &Path, error: ::csv::Error) -> LatticeError {
    LatticeError::Csv {
        path: path.to_path_buf(),
        source: error,
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::NamedTempFile;

    fn temp_with(content: &str) -> NamedTempFile {
        let file = NamedTempFile::new().unwrap();
        fs::write(file.path(), content).unwrap();
        file
    }

    #[test]
    fn test_read_square_matrix() {
        let file = temp_with("1.0,2.0\n3.0,4.0\n");
        let m = read_matrix(file.path()).unwrap();
        assert_eq!(m.shape(), (2, 2));
        assert_eq!(m[(0, 1)], 2.0);
        assert_eq!(m[(1, 0)], 3.0);
    }

    #[test]
    fn test_read_skips_comments_blank_lines_and_spaces() {
        let file = temp_with("# header\n\n 1.5 , -2.5\n\n0.0,1e-3\n");
        let m = read_matrix(file.path()).unwrap();
        assert_eq!(m.shape(), (2, 2));
        assert_eq!(m[(0, 0)], 1.5);
        assert_eq!(m[(1, 1)], 0.001);
    }

    #[test]
    fn test_read_accepts_trailing_delimiter() {
        let file = temp_with("1,2,\n3,4,\n");
        let m = read_matrix(file.path()).unwrap();
        assert_eq!(m.shape(), (2, 2));
    }

    #[test]
    fn test_read_reports_non_numeric_cell() {
        let file = temp_with("1.0,2.0\n3.0,abc\n");
        match read_matrix(file.path()) {
            Err(LatticeError::Parse { row, column, value, .. }) => {
                assert_eq!(row, 2);
                assert_eq!(column, 2);
                assert_eq!(value, "abc");
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_read_rejects_infinite_and_nan_cells() {
        let file = temp_with("0.0,1.0\n2.0,inf\n");
        match read_matrix(file.path()) {
            Err(LatticeError::NonFinite { row, column, value, .. }) => {
                assert_eq!((row, column), (2, 2));
                assert_eq!(value, "inf");
            }
            other => panic!("expected non-finite error, got {:?}", other),
        }

        let file = temp_with("NaN\n");
        assert!(matches!(read_matrix(file.path()), Err(LatticeError::NonFinite { .. })));
    }

    #[test]
    fn test_read_reports_ragged_rows() {
        let file = temp_with("1.0,2.0\n3.0\n");
        assert!(matches!(
            read_matrix(file.path()),
            Err(LatticeError::Ragged { expected: 2, found: 1, .. })
        ));
    }

    #[test]
    fn test_read_reports_empty_file() {
        let file = temp_with("# nothing here\n");
        assert!(matches!(read_matrix(file.path()), Err(LatticeError::Empty { .. })));
    }

    #[test]
    fn test_read_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("u.csv");
        match read_matrix(&missing) {
            Err(LatticeError::Io { path, .. }) => assert_eq!(path, missing),
            other => panic!("expected io error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_field_requires_square() {
        let file = temp_with("1,2,3\n4,5,6\n");
        assert!(matches!(
            load_field("u", file.path()),
            Err(LatticeError::NotSquare { rows: 2, cols: 3, .. })
        ));
    }

    #[test]
    fn test_load_samples_column_and_row() {
        let column = temp_with("0.5\n1.5\n2.5\n");
        let row = temp_with("0.5,1.5,2.5\n");
        let a = load_samples("energies", column.path()).unwrap();
        let b = load_samples("energies", row.path()).unwrap();
        assert_eq!(a.as_slice(), &[0.5, 1.5, 2.5]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_write_then_read_preserves_values() {
        let file = NamedTempFile::new().unwrap();
        let original = DMatrix::from_fn(4, 4, |i, j| (i as f64 - 1.5) * 0.123456789 + j as f64);

        write_field(file.path(), &original, None).unwrap();
        let reread = read_matrix(file.path()).unwrap();

        for (a, b) in original.iter().zip(reread.iter()) {
            assert!((a - b).abs() <= 5e-9, "{} vs {}", a, b);
        }
    }

    #[test]
    fn test_write_uses_solver_format() {
        let file = NamedTempFile::new().unwrap();
        let m = DMatrix::from_row_slice(2, 2, &[0.0, 0.5, -1.0, 2.0]);
        write_field(file.path(), &m, None).unwrap();

        let content = fs::read_to_string(file.path()).unwrap();
        assert_eq!(content, "0.00000000,0.50000000\n-1.00000000,2.00000000\n");
    }

    #[test]
    fn test_metadata_header_is_skipped_on_read() {
        let file = NamedTempFile::new().unwrap();
        let mut metadata = CsvMetadata::titled("potential u");
        metadata.add_custom("Source", "unit test");
        let config = CsvConfig::default().precision(4).with_metadata(metadata);

        let m = DMatrix::from_element(3, 3, 0.25);
        write_field(file.path(), &m, Some(&config)).unwrap();

        let content = fs::read_to_string(file.path()).unwrap();
        assert!(content.starts_with("# Lattice Field Data\n# Generated: "));
        assert!(content.contains("# Title: potential u"));
        assert!(content.contains("# Source: unit test"));
        assert!(content.contains("0.2500,0.2500,0.2500"));

        assert_eq!(read_matrix(file.path()).unwrap(), m);
    }

    #[test]
    fn test_write_samples_single_column() {
        let file = NamedTempFile::new().unwrap();
        let samples = Samples::new("energies", vec![1.0, 2.0]).unwrap();
        write_samples(file.path(), &samples, None).unwrap();

        let content = fs::read_to_string(file.path()).unwrap();
        assert_eq!(content, "1.00000000\n2.00000000\n");
        assert_eq!(load_samples("energies", file.path()).unwrap(), samples);
    }
}
