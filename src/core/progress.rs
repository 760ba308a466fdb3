use std::f64::consts::{FRAC_PI_2, TAU};

use serde::{Deserialize, Serialize};

use crate::core::Viewport;

/// Discrete surface presets for progress rings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ProgressSize {
    #[must_use]
    pub const fn viewport(self) -> Viewport {
        match self {
            Self::Small => Viewport {
                width: 120,
                height: 80,
            },
            Self::Medium => Viewport {
                width: 200,
                height: 120,
            },
            Self::Large => Viewport {
                width: 300,
                height: 180,
            },
        }
    }
}

/// Completed fraction `min(value / max, 1)`, floored at zero. A non-positive
/// or non-finite `max` reads as no progress.
#[must_use]
pub fn progress_fraction(value: f64, max: f64) -> f64 {
    if !max.is_finite() || max <= 0.0 || !value.is_finite() {
        return 0.0;
    }
    (value / max).clamp(0.0, 1.0)
}

/// Integer percentage shown inside the ring.
#[must_use]
pub fn progress_percentage_label(fraction: f64) -> String {
    format!("{}%", (fraction * 100.0).round() as i64)
}

/// Shared circle of the track and foreground arcs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RingGeometry {
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
    pub stroke_width: f64,
}

impl RingGeometry {
    /// Fits a ring of `stroke_width` inside `viewport`, stroke included.
    #[must_use]
    pub fn fit(viewport: Viewport, stroke_width: f64) -> Self {
        let width = f64::from(viewport.width);
        let height = f64::from(viewport.height);
        Self {
            center_x: width / 2.0,
            center_y: height / 2.0,
            radius: (width.min(height) / 2.0 - stroke_width).max(stroke_width),
            stroke_width,
        }
    }

    /// Foreground arc bounds for `fraction`, starting at 12 o'clock.
    #[must_use]
    pub fn arc_angles(self, fraction: f64) -> (f64, f64) {
        let start = -FRAC_PI_2;
        (start, start + fraction.clamp(0.0, 1.0) * TAU)
    }

    #[must_use]
    pub fn circumference(self) -> f64 {
        TAU * self.radius
    }
}
