use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Pixel dimensions of one drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// One labeled sample fed to a chart.
///
/// Order inside a dataset is significant: it is the x position for line and
/// bar charts and the clockwise slice order for pie charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub label: String,
    pub value: f64,
}

impl DataPoint {
    #[must_use]
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Chart primitive families driven by a [`crate::api::ChartEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartKind {
    Line,
    Bar,
    Pie,
}

impl ChartKind {
    /// Default surface size used when the host does not pass one.
    #[must_use]
    pub const fn default_viewport(self) -> Viewport {
        match self {
            Self::Line | Self::Bar => Viewport {
                width: 400,
                height: 200,
            },
            Self::Pie => Viewport {
                width: 300,
                height: 300,
            },
        }
    }
}

/// Rejects datasets containing non-finite values.
pub fn validate_points(points: &[DataPoint]) -> ChartResult<()> {
    if let Some(point) = points.iter().find(|point| !point.value.is_finite()) {
        return Err(ChartError::InvalidData(format!(
            "value for `{}` must be finite",
            point.label
        )));
    }
    Ok(())
}
