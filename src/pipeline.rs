//! Fixed-filename figure pipelines
//!
//! The producing solver leaves a directory of CSV files behind. The static
//! pipeline turns them into five figures, the quiver pipeline into one. All
//! inputs are loaded and cross-checked before the first figure is written,
//! so a broken input set leaves no partial output. Each figure owns its
//! drawing backend for the duration of one `plot_*` call.
//!
//! # Example
//!
//! ```rust,ignore
//! use lattice_viz::pipeline::{run_quiver, run_static, PipelineConfig};
//!
//! let config = PipelineConfig::default()
//!     .with_input_dir("results")
//!     .with_output_dir("figures");
//!
//! let report = run_static(&config)?;
//! println!("{}", report.summary);
//! run_quiver(&config)?;
//! ```

use std::path::{Path, PathBuf};

use crate::error::{LatticeError, Result};
use crate::io::{load_edge_field, load_field, load_samples};
use crate::lattice::{infinity_norm, EdgeField, FieldSummary, ScalarField};
use crate::output::visualization::{
    plot_edges, plot_heatmap, plot_histogram, plot_vertex_quiver, PlotConfig, NO_TITLE,
};

// =================================================================================================
// Configuration
// =================================================================================================

/// Input file names, resolved against [`PipelineConfig::input_dir`]
#[derive(Clone, Debug, PartialEq)]
pub struct InputFiles {
    pub u: PathBuf,
    pub phi_x: PathBuf,
    pub phi_y: PathBuf,
    pub ux: PathBuf,
    pub uy: PathBuf,
    pub energies: PathBuf,
}

impl Default for InputFiles {
    fn default() -> Self {
        Self {
            u: "u.csv".into(),
            phi_x: "phi_x.csv".into(),
            phi_y: "phi_y.csv".into(),
            ux: "ux.csv".into(),
            uy: "uy.csv".into(),
            energies: "energies.csv".into(),
        }
    }
}

/// Output file names, resolved against [`PipelineConfig::output_dir`]
#[derive(Clone, Debug, PartialEq)]
pub struct OutputFiles {
    pub potential: PathBuf,
    pub gradient: PathBuf,
    pub cycle: PathBuf,
    pub improved: PathBuf,
    pub histogram: PathBuf,
    pub quiver: PathBuf,
}

impl Default for OutputFiles {
    fn default() -> Self {
        Self {
            potential: "plot_u.png".into(),
            gradient: "plot_grad_u.png".into(),
            cycle: "plot_phi.png".into(),
            improved: "plot_grad_u_plus_phi.png".into(),
            histogram: "hist_infty_norms.png".into(),
            quiver: "plot_quivers.png".into(),
        }
    }
}

/// Plot configuration per figure kind
#[derive(Clone, Debug)]
pub struct FigureConfigs {
    pub heatmap: PlotConfig,
    pub edges: PlotConfig,
    pub histogram: PlotConfig,
    pub quiver: PlotConfig,
}

impl Default for FigureConfigs {
    fn default() -> Self {
        Self {
            heatmap: PlotConfig::heatmap(NO_TITLE),
            edges: PlotConfig::edges(NO_TITLE),
            histogram: PlotConfig::histogram(NO_TITLE),
            quiver: PlotConfig::quiver(NO_TITLE),
        }
    }
}

/// Where to read, where to write and how to draw
#[derive(Clone, Debug)]
pub struct PipelineConfig {
    /// Directory holding the solver output (default: current directory)
    pub input_dir: PathBuf,

    /// Directory receiving the figures, created if missing (default: current directory)
    pub output_dir: PathBuf,

    pub inputs: InputFiles,
    pub outputs: OutputFiles,

    /// Figure title of the quiver plot
    pub quiver_title: String,

    pub figures: FigureConfigs,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("."),
            output_dir: PathBuf::from("."),
            inputs: InputFiles::default(),
            outputs: OutputFiles::default(),
            quiver_title: "Vertex vector fields scaled by lattice spacing".to_string(),
            figures: FigureConfigs::default(),
        }
    }
}

impl PipelineConfig {
    /// Builder pattern: set input directory
    pub fn with_input_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.input_dir = dir.into();
        self
    }

    /// Builder pattern: set output directory
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn input(&self, name: &Path) -> PathBuf {
        self.input_dir.join(name)
    }

    pub fn output(&self, name: &Path) -> PathBuf {
        self.output_dir.join(name)
    }
}

// =================================================================================================
// Pipelines
// =================================================================================================

/// What a static run produced
#[derive(Clone, Debug)]
pub struct PipelineReport {
    pub summary: FieldSummary,
    /// Figures in the order they were written
    pub written: Vec<PathBuf>,
}

/// Render the heatmap, the three edge plots and the ∞-norm histogram
///
/// | Figure | Source |
/// |--------|--------|
/// | `plot_u.png` | `u.csv` |
/// | `plot_grad_u.png` | `ux.csv`, `uy.csv` |
/// | `plot_phi.png` | `phi_x.csv`, `phi_y.csv` |
/// | `plot_grad_u_plus_phi.png` | sum of the two above |
/// | `hist_infty_norms.png` | `energies.csv`, reference `||(ux, uy)||∞` |
///
/// Existing files are overwritten.
pub fn run_static(config: &PipelineConfig) -> Result<PipelineReport> {
    let inputs = &config.inputs;

    let u = load_field("u", config.input(&inputs.u))?;
    let grad_u = load_edge_field("grad_u", config.input(&inputs.ux), config.input(&inputs.uy))?;
    let phi = load_edge_field("phi", config.input(&inputs.phi_x), config.input(&inputs.phi_y))?;
    let energies = load_samples("energies", config.input(&inputs.energies))?;

    check_same_side(&u, &grad_u)?;
    let improved = grad_u.checked_add(&phi, "grad_u + phi")?;

    log::debug!(
        "Loaded N={} lattice and {} samples from {}",
        u.side(),
        energies.len(),
        config.input_dir.display()
    );

    prepare_output_dir(&config.output_dir)?;
    let outputs = &config.outputs;
    let figures = &config.figures;
    let mut written = Vec::with_capacity(5);

    let path = config.output(&outputs.potential);
    plot_heatmap(&u, &path, Some(&figures.heatmap))?;
    written.push(path);

    for (field, title, name) in [
        (&grad_u, "Gradient ∇u", &outputs.gradient),
        (&phi, "Cycle field Φ", &outputs.cycle),
        (&improved, "Improved field ∇u + Φ", &outputs.improved),
    ] {
        let path = config.output(name);
        plot_edges(field, &path, title, Some(&figures.edges))?;
        written.push(path);
    }

    let reference = infinity_norm(&grad_u);
    let path = config.output(&outputs.histogram);
    plot_histogram(&energies, reference, &path, Some(&figures.histogram))?;
    written.push(path);

    let summary = FieldSummary::new(&grad_u, &phi, &improved).with_samples(&energies);
    log::info!("{}", summary);

    Ok(PipelineReport { summary, written })
}

/// Render the three-panel quiver figure from `u`, `phi_x` and `phi_y`
///
/// Returns the path of the written figure.
pub fn run_quiver(config: &PipelineConfig) -> Result<PathBuf> {
    let inputs = &config.inputs;
    let u = load_field("u", config.input(&inputs.u))?;
    let phi = load_edge_field("phi", config.input(&inputs.phi_x), config.input(&inputs.phi_y))?;
    check_same_side(&u, &phi)?;

    prepare_output_dir(&config.output_dir)?;
    let path = config.output(&config.outputs.quiver);
    plot_vertex_quiver(
        &u,
        &phi,
        config.quiver_title.as_str(),
        &path,
        Some(&config.figures.quiver),
    )?;
    Ok(path)
}

fn check_same_side(u: &ScalarField, edges: &EdgeField) -> Result<()> {
    if u.side() != edges.side() {
        return Err(LatticeError::shape_mismatch(
            u.name(),
            u.values().shape(),
            edges.name(),
            edges.x().shape(),
        ));
    }
    Ok(())
}

fn prepare_output_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir).map_err(|e| LatticeError::io(dir, e))
}

// =================================================================================================
// Tests
// =================================================================================================
