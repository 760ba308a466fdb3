use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};

/// Padded plot rectangle inside a viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl PlotArea {
    pub fn new(viewport: Viewport, padding: f64) -> ChartResult<Self> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        if !padding.is_finite() || padding < 0.0 {
            return Err(ChartError::InvalidData(
                "padding must be finite and >= 0".to_owned(),
            ));
        }

        let width = f64::from(viewport.width);
        let height = f64::from(viewport.height);
        if width <= 2.0 * padding || height <= 2.0 * padding {
            return Err(ChartError::InvalidData(format!(
                "viewport {}x{} leaves no plot area with padding {padding}",
                viewport.width, viewport.height
            )));
        }

        Ok(Self {
            width,
            height,
            padding,
        })
    }

    #[must_use]
    pub fn chart_width(self) -> f64 {
        self.width - 2.0 * self.padding
    }

    #[must_use]
    pub fn chart_height(self) -> f64 {
        self.height - 2.0 * self.padding
    }

    #[must_use]
    pub fn left(self) -> f64 {
        self.padding
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.width - self.padding
    }

    #[must_use]
    pub fn top(self) -> f64 {
        self.padding
    }

    /// Y coordinate of the x axis.
    #[must_use]
    pub fn baseline(self) -> f64 {
        self.height - self.padding
    }
}

#[cfg(test)]
mod tests {
    use super::PlotArea;
    use crate::core::Viewport;

    #[test]
    fn plot_area_subtracts_padding_on_both_sides() {
        let plot = PlotArea::new(Viewport::new(400, 200), 40.0).expect("plot");
        assert_eq!(plot.chart_width(), 320.0);
        assert_eq!(plot.chart_height(), 120.0);
        assert_eq!(plot.baseline(), 160.0);
        assert_eq!(plot.right(), 360.0);
    }

    #[test]
    fn padding_consuming_the_viewport_is_rejected() {
        assert!(PlotArea::new(Viewport::new(80, 200), 40.0).is_err());
        assert!(PlotArea::new(Viewport::new(0, 200), 40.0).is_err());
        assert!(PlotArea::new(Viewport::new(400, 200), -1.0).is_err());
    }
}
