//! Command-line entry point
//!
//! ```text
//! lattice-viz [--input-dir DIR] [--output-dir DIR] [static|quiver|all]
//! ```
//!
//! Verbosity follows `RUST_LOG` (default `info`).

use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};

use lattice_viz::pipeline::{run_quiver, run_static, PipelineConfig};

/// Which figures to render
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Heatmap, three edge plots and the ∞-norm histogram
    Static,
    /// Three-panel vertex-vector quiver plot
    Quiver,
    /// Both of the above
    All,
}

/// Diagnostics plots for potential and cycle fields on a periodic 2D lattice
#[derive(Parser, Debug)]
#[command(name = "lattice-viz", version, about, long_about = None)]
struct Cli {
    /// Directory holding u.csv, phi_x.csv, phi_y.csv, ux.csv, uy.csv and energies.csv
    #[arg(long, value_name = "DIR", default_value = ".")]
    input_dir: PathBuf,

    /// Directory receiving the figures (created if missing)
    #[arg(long, value_name = "DIR", default_value = ".")]
    output_dir: PathBuf,

    /// Figures to render
    #[arg(value_enum, default_value_t = Mode::Static)]
    mode: Mode,
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let config = PipelineConfig::default()
        .with_input_dir(&cli.input_dir)
        .with_output_dir(&cli.output_dir);

    if matches!(cli.mode, Mode::Static | Mode::All) {
        let report = run_static(&config)?;
        log::info!("Wrote {} figures", report.written.len());
    }
    if matches!(cli.mode, Mode::Quiver | Mode::All) {
        let path = run_quiver(&config)?;
        log::info!("Wrote {}", path.display());
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            let mut source = error.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}
