//! Continuous colormaps for value-coded plots

use plotters::style::RGBColor;

/// Available colormaps
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ColormapKind {
    /// Perceptually uniform blue to yellow, used for edge fields
    #[default]
    Viridis,
    /// Black through red to pale yellow, used for the potential heatmap
    Inferno,
}

/// A colormap sampled on `[0, 1]`
pub struct Colormap {
    gradient: Box<dyn colorgrad::Gradient>,
}

impl Colormap {
    pub fn new(kind: ColormapKind) -> Self {
        let gradient: Box<dyn colorgrad::Gradient> = match kind {
            ColormapKind::Viridis => Box::new(colorgrad::preset::viridis()),
            ColormapKind::Inferno => Box::new(colorgrad::preset::inferno()),
        };
        Self { gradient }
    }

    /// Color at position `t`, clamped to `[0, 1]`; NaN maps to the low end
    pub fn color(&self, t: f64) -> RGBColor {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let rgba = self.gradient.at(t as f32).to_rgba8();
        RGBColor(rgba[0], rgba[1], rgba[2])
    }

    /// Color of `value` normalized linearly from `[lo, hi]`
    ///
    /// A collapsed or non-finite range maps every value to mid-scale.
    pub fn color_in_range(&self, value: f64, lo: f64, hi: f64) -> RGBColor {
        let span = hi - lo;
        if span > 0.0 && span.is_finite() {
            self.color((value - lo) / span)
        } else {
            self.color(0.5)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_differ() {
        let map = Colormap::new(ColormapKind::Viridis);
        assert_ne!(map.color(0.0), map.color(1.0));
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        let map = Colormap::new(ColormapKind::Inferno);
        assert_eq!(map.color(-3.0), map.color(0.0));
        assert_eq!(map.color(7.0), map.color(1.0));
    }

    #[test]
    fn test_nan_maps_to_low_end() {
        let map = Colormap::new(ColormapKind::Viridis);
        assert_eq!(map.color(f64::NAN), map.color(0.0));
    }

    #[test]
    fn test_viridis_low_end_is_dark_purple() {
        let RGBColor(r, g, b) = Colormap::new(ColormapKind::Viridis).color(0.0);
        assert!(b > r && b > g, "got ({r}, {g}, {b})");
    }

    #[test]
    fn test_collapsed_range_maps_to_mid_scale() {
        let map = Colormap::new(ColormapKind::Inferno);
        assert_eq!(map.color_in_range(2.0, 2.0, 2.0), map.color(0.5));
        assert_eq!(map.color_in_range(1.0, 0.0, 2.0), map.color(0.5));
    }
}
