use serde::{Deserialize, Serialize};

use crate::core::{ChartKind, PlotArea, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

use super::ChartStyle;
use super::validation::validate_chart_config;

/// Plot padding used on every side when the host does not override it.
pub const DEFAULT_PADDING_PX: f64 = 40.0;

/// Default accent (`#3b82f6`).
pub const DEFAULT_ACCENT: Color = Color::from_rgb8(0x3b, 0x82, 0xf6);

/// Ten-color cycle used for pie slices unless a palette is injected.
pub const DEFAULT_PALETTE: [Color; 10] = [
    Color::from_rgb8(0x3b, 0x82, 0xf6),
    Color::from_rgb8(0x10, 0xb9, 0x81),
    Color::from_rgb8(0xf5, 0x9e, 0x0b),
    Color::from_rgb8(0xef, 0x44, 0x44),
    Color::from_rgb8(0x8b, 0x5c, 0xf6),
    Color::from_rgb8(0x06, 0xb6, 0xd4),
    Color::from_rgb8(0xf9, 0x73, 0x16),
    Color::from_rgb8(0x84, 0xcc, 0x16),
    Color::from_rgb8(0xec, 0x48, 0x99),
    Color::from_rgb8(0x6b, 0x72, 0x80),
];

/// Per-chart configuration supplied by the host page.
///
/// This type is serializable so hosts can persist dashboard widget setup
/// without inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub viewport: Viewport,
    #[serde(default = "default_accent")]
    pub color: Color,
    #[serde(default = "default_padding")]
    pub padding: f64,
    #[serde(default = "default_palette")]
    pub palette: Vec<Color>,
    #[serde(default)]
    pub style: ChartStyle,
}

impl ChartConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            color: default_accent(),
            padding: default_padding(),
            palette: default_palette(),
            style: ChartStyle::default(),
        }
    }

    /// Config with the default surface size of `kind`.
    #[must_use]
    pub fn default_for(kind: ChartKind) -> Self {
        Self::new(kind.default_viewport())
    }

    #[must_use]
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Sets the accent from a `#rrggbb`-style string.
    pub fn with_hex_color(self, hex: &str) -> ChartResult<Self> {
        Ok(self.with_color(Color::from_hex(hex)?))
    }

    #[must_use]
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn with_palette(mut self, palette: Vec<Color>) -> Self {
        self.palette = palette;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }

    pub fn plot_area(&self) -> ChartResult<PlotArea> {
        PlotArea::new(self.viewport, self.padding)
    }

    /// Palette entry for slice `index`, cycling by `index mod len`. An empty
    /// palette paints every slice in the accent color.
    #[must_use]
    pub fn palette_color(&self, index: usize) -> Color {
        if self.palette.is_empty() {
            return self.color;
        }
        self.palette[index % self.palette.len()]
    }

    pub fn validate(&self) -> ChartResult<()> {
        validate_chart_config(self)
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes and validates config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}

fn default_accent() -> Color {
    DEFAULT_ACCENT
}

fn default_padding() -> f64 {
    DEFAULT_PADDING_PX
}

fn default_palette() -> Vec<Color> {
    DEFAULT_PALETTE.to_vec()
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::{ChartConfig, DEFAULT_PALETTE};
    use crate::core::{ChartKind, Viewport};
    use crate::render::Color;

    #[test]
    fn palette_cycles_by_index_modulo_length() {
        let config = ChartConfig::default_for(ChartKind::Pie);
        assert_eq!(config.palette_color(0), DEFAULT_PALETTE[0]);
        assert_eq!(config.palette_color(12), DEFAULT_PALETTE[2]);

        let injected = config.with_palette(vec![Color::WHITE, Color::rgb(0.0, 0.0, 0.0)]);
        assert_eq!(injected.palette_color(3), Color::rgb(0.0, 0.0, 0.0));
    }

    #[test]
    fn empty_palette_falls_back_to_accent_color() {
        let accent = Color::rgb(1.0, 0.0, 0.0);
        let config = ChartConfig::default_for(ChartKind::Pie)
            .with_color(accent)
            .with_palette(Vec::new());
        assert!(config.validate().is_ok());
        assert_eq!(config.palette_color(0), accent);
        assert_eq!(config.palette_color(7), accent);
    }

    #[test]
    fn json_fills_defaults_for_missing_fields() {
        let config = ChartConfig::from_json_str(r#"{"viewport":{"width":400,"height":200}}"#)
            .expect("config");
        assert_eq!(config, ChartConfig::new(Viewport::new(400, 200)));
    }

    #[test]
    fn json_round_trip_preserves_accent() {
        let config = ChartConfig::default_for(ChartKind::Line)
            .with_hex_color("#10b981")
            .expect("hex");
        let json = config.to_json_pretty().expect("json");
        let restored = ChartConfig::from_json_str(&json).expect("parse");
        assert_abs_diff_eq!(restored.color.green, config.color.green, epsilon = 1e-12);
        assert_abs_diff_eq!(restored.color.blue, config.color.blue, epsilon = 1e-12);
        assert_eq!(restored.palette.len(), config.palette.len());
    }

    #[test]
    fn invalid_json_config_is_rejected() {
        assert!(ChartConfig::from_json_str(r#"{"viewport":{"width":60,"height":60}}"#).is_err());
        assert!(ChartConfig::from_json_str("not json").is_err());
    }
}
