//! Plot configuration shared across visualization modules
//!
//! This module defines the configuration used by the heatmap, edge, quiver
//! and histogram renderers.

use plotters::prelude::*;

use super::colormap::ColormapKind;

/// Configuration for customizing plots
///
/// # Fields
///
/// - `width`, `height`: Dimensions in pixels
/// - `title`: Figure title
/// - `xlabel`, `ylabel`: Axis labels (ignored by the lattice plots, which hide ticks)
/// - `series_colors`: Optional colors for multi-panel or multi-series plots
/// - `colormap`: Colormap of the color-coded plots
/// - `background`: Background color
/// - `line_width`: Line thickness in pixels
/// - `show_grid`: Whether to show grid lines
///
/// # Example
///
/// ```rust,ignore
/// use lattice_viz::output::visualization::PlotConfig;
/// use plotters::prelude::*;
///
/// let mut config = PlotConfig::edges("Gradient ∇u");
/// config.width = 1200;
/// config.height = 1200;
/// config.line_width = 3;
/// ```
#[derive(Clone, Debug)]
pub struct PlotConfig {
    /// Image width in pixels (default: 800)
    pub width: u32,

    /// Image height in pixels (default: 600)
    pub height: u32,

    /// Plot title (default: "Plot")
    pub title: String,

    /// X-axis label (default: auto-set by plot type)
    pub xlabel: String,

    /// Y-axis label (default: auto-set by plot type)
    pub ylabel: String,

    /// Optional colors for multi-series plots
    ///
    /// If None, uses default palette: [RED, GREEN, BLUE, ...]
    pub series_colors: Option<Vec<RGBColor>>,

    /// Colormap for color-coded values (default: viridis)
    pub colormap: ColormapKind,

    /// Background color (default: WHITE)
    pub background: RGBColor,

    /// Line width in pixels (default: 2)
    pub line_width: u32,

    /// Show grid lines (default: true)
    pub show_grid: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            title: "Plot".to_string(),
            xlabel: String::new(), // Set by specific plot type
            ylabel: String::new(),
            series_colors: None,
            colormap: ColormapKind::Viridis,
            background: WHITE,
            line_width: 2,
            show_grid: true,
        }
    }
}

/// Helper trait to accept both `String` and `None` for optional titles
pub trait IntoOptionalTitle {
    fn into_optional_title(self) -> Option<String>;
}

impl IntoOptionalTitle for &str {
    fn into_optional_title(self) -> Option<String> {
        Some(self.to_string())
    }
}

impl IntoOptionalTitle for String {
    fn into_optional_title(self) -> Option<String> {
        Some(self)
    }
}

impl<T: IntoOptionalTitle> IntoOptionalTitle for Option<T> {
    fn into_optional_title(self) -> Option<String> {
        self.and_then(|t| t.into_optional_title())
    }
}

/// Constant for no title (default title will be used)
///
/// # Example
///
/// ```rust,ignore
/// let config = PlotConfig::heatmap(NO_TITLE);
/// ```
pub const NO_TITLE: Option<&str> = None;

impl PlotConfig {
    /// Heatmap of a scalar potential, 600×500, inferno
    ///
    /// Title defaults to "Potential u(x)".
    pub fn heatmap(title: impl IntoOptionalTitle) -> Self {
        Self {
            width: 600,
            height: 500,
            title: title
                .into_optional_title()
                .unwrap_or_else(|| "Potential u(x)".to_string()),
            colormap: ColormapKind::Inferno,
            show_grid: false,
            ..Self::default()
        }
    }

    /// Edge-colored lattice, 600×600, viridis
    ///
    /// Title defaults to "Edge field".
    pub fn edges(title: impl IntoOptionalTitle) -> Self {
        Self {
            width: 600,
            height: 600,
            title: title
                .into_optional_title()
                .unwrap_or_else(|| "Edge field".to_string()),
            show_grid: false,
            ..Self::default()
        }
    }

    /// Three quiver panels side by side, 1800×600
    ///
    /// Title defaults to "Vertex vector fields scaled by lattice spacing".
    pub fn quiver(title: impl IntoOptionalTitle) -> Self {
        Self {
            width: 1800,
            height: 600,
            title: title
                .into_optional_title()
                .unwrap_or_else(|| "Vertex vector fields scaled by lattice spacing".to_string()),
            show_grid: false,
            ..Self::default()
        }
    }

    /// Histogram of sampled ∞-norms, 700×500
    ///
    /// Sets xlabel to "∞-norm", ylabel to "Frequency" and title to custom
    /// value or "Histogram of ||∇u + Φ||∞".
    pub fn histogram(title: impl IntoOptionalTitle) -> Self {
        Self {
            width: 700,
            height: 500,
            title: title
                .into_optional_title()
                .unwrap_or_else(|| "Histogram of ||∇u + Φ||∞".to_string()),
            xlabel: "∞-norm".to_string(),
            ylabel: "Frequency".to_string(),
            ..Self::default()
        }
    }

    /// Builder pattern: set pixel size
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Get color for series at index i
    ///
    /// Uses custom colors if provided, otherwise falls back to default palette
    pub(crate) fn get_series_color(&self, series_index: usize) -> RGBColor {
        if let Some(ref colors) = self.series_colors {
            if series_index < colors.len() {
                return colors[series_index];
            }
        }

        let default_colors = [
            RED,
            GREEN,
            BLUE,
            MAGENTA,
            CYAN,
            BLACK,
            RGBColor(255, 165, 0), // Orange
        ];

        default_colors[series_index % default_colors.len()]
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plot_config_default() {
        let config = PlotConfig::default();
        assert_eq!(config.width, 800);
        assert_eq!(config.height, 600);
        assert_eq!(config.colormap, ColormapKind::Viridis);
        assert!(config.show_grid);
    }

    #[test]
    fn test_heatmap_config_default() {
        let config = PlotConfig::heatmap(NO_TITLE);
        assert_eq!(config.title, "Potential u(x)");
        assert_eq!(config.colormap, ColormapKind::Inferno);
        assert_eq!((config.width, config.height), (600, 500));
    }

    #[test]
    fn test_edges_config_with_str() {
        let config = PlotConfig::edges("Cycle field Φ");
        assert_eq!(config.title, "Cycle field Φ");
        assert_eq!(config.width, config.height);
    }

    #[test]
    fn test_histogram_config_labels() {
        let config = PlotConfig::histogram(NO_TITLE);
        assert_eq!(config.xlabel, "∞-norm");
        assert_eq!(config.ylabel, "Frequency");
        assert_eq!(config.title, "Histogram of ||∇u + Φ||∞");
    }

    #[test]
    fn test_quiver_config_with_string() {
        let title = format!("Run {}", 3);
        let config = PlotConfig::quiver(title).with_size(900, 300);
        assert_eq!(config.title, "Run 3");
        assert_eq!((config.width, config.height), (900, 300));
    }

    #[test]
    fn test_series_color_default_palette() {
        let config = PlotConfig::default();
        assert_eq!(config.get_series_color(0), RED);
        assert_eq!(config.get_series_color(1), GREEN);
        assert_eq!(config.get_series_color(2), BLUE);
        assert_eq!(config.get_series_color(7), RED); // Wraparound
    }

    #[test]
    fn test_series_color_custom() {
        use plotters::style::full_palette::{ORANGE, PURPLE};
        let mut config = PlotConfig::quiver(NO_TITLE);
        config.series_colors = Some(vec![ORANGE, PURPLE]);
        assert_eq!(config.get_series_color(0), ORANGE);
        assert_eq!(config.get_series_color(1), PURPLE);
        assert_eq!(config.get_series_color(2), BLUE);
    }
}
