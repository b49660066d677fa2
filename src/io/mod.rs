//! Reading and writing lattice data
//!
//! The producing solver writes every field as a comma-delimited text matrix,
//! one lattice row per line, values formatted `%.8f`. Sampled ∞-norms go to
//! a single-column file. This module reads both shapes back and can write
//! them in the same format.
//!
//! # Usage example
//!
//! ```rust,ignore
//! use lattice_viz::io::{load_field, load_samples, write_field, CsvConfig, CsvMetadata};
//!
//! let u = load_field("u", "u.csv")?;
//! let energies = load_samples("energies", "energies.csv")?;
//!
//! // Write a copy with a provenance header
//! let config = CsvConfig::default().with_metadata(CsvMetadata::titled("potential u"));
//! write_field("u_copy.csv", u.values(), Some(&config))?;
//! ```

pub mod csv;

pub use self::csv::{
    load_edge_field, load_field, load_samples, read_matrix, write_field, write_samples,
    CsvConfig, CsvMetadata,
};
