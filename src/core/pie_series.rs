use std::f64::consts::{FRAC_PI_2, TAU};

use serde::{Deserialize, Serialize};

use crate::core::{DataPoint, PlotArea, pie_total};

/// Angle where the first slice starts (12 o'clock).
pub const PIE_START_ANGLE: f64 = -FRAC_PI_2;

/// Radius ratio of the percentage-label anchor.
pub const PIE_LABEL_RADIUS_RATIO: f64 = 0.7;

/// Angular span of one slice. Angles are radians, clockwise in screen space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliceGeometry {
    pub index: usize,
    pub start_angle: f64,
    pub end_angle: f64,
    /// Fraction of the total, in `[0, 1]`.
    pub share: f64,
}

impl SliceGeometry {
    #[must_use]
    pub fn sweep(self) -> f64 {
        self.end_angle - self.start_angle
    }

    #[must_use]
    pub fn bisector(self) -> f64 {
        self.start_angle + self.sweep() * 0.5
    }

    /// Half-open containment on `[start, end)`.
    #[must_use]
    pub fn contains(self, angle: f64) -> bool {
        angle >= self.start_angle && angle < self.end_angle
    }

    /// Offset of `distance` pixels along the bisector.
    #[must_use]
    pub fn offset(self, distance: f64) -> (f64, f64) {
        let angle = self.bisector();
        (angle.cos() * distance, angle.sin() * distance)
    }

    /// Percentage label text, one decimal.
    #[must_use]
    pub fn percentage_label(self) -> String {
        format!("{:.1}%", self.share * 100.0)
    }
}

/// Circle placement and cumulative slice angles for one pie frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieLayout {
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
    pub total: f64,
    pub slices: Vec<SliceGeometry>,
}

impl PieLayout {
    /// Returns `None` when the dataset is empty or sums to nothing.
    #[must_use]
    pub fn new(plot: PlotArea, points: &[DataPoint]) -> Option<Self> {
        let total = pie_total(points);
        if points.is_empty() || total <= 0.0 {
            return None;
        }

        // Slice bounds come from value prefix sums, so the last slice ends at
        // exactly start + 2π.
        let mut prefix = 0.0;
        let mut slices = Vec::with_capacity(points.len());
        for (index, point) in points.iter().enumerate() {
            let value = point.value.max(0.0);
            let start_angle = PIE_START_ANGLE + prefix / total * TAU;
            prefix += value;
            let end_angle = PIE_START_ANGLE + prefix / total * TAU;
            slices.push(SliceGeometry {
                index,
                start_angle,
                end_angle,
                share: value / total,
            });
        }

        Some(Self {
            center_x: plot.width / 2.0,
            center_y: plot.height / 2.0,
            radius: plot.width.min(plot.height) / 2.0 - plot.padding,
            total,
            slices,
        })
    }

    /// Percentage-label anchor of `slice`, before any hover offset.
    #[must_use]
    pub fn label_anchor(&self, slice: SliceGeometry) -> (f64, f64) {
        let angle = slice.bisector();
        let distance = self.radius * PIE_LABEL_RADIUS_RATIO;
        (
            self.center_x + angle.cos() * distance,
            self.center_y + angle.sin() * distance,
        )
    }

    /// Point on the rim along the bisector, used to anchor tooltips.
    #[must_use]
    pub fn rim_point(&self, slice: SliceGeometry) -> (f64, f64) {
        let angle = slice.bisector();
        (
            self.center_x + angle.cos() * self.radius,
            self.center_y + angle.sin() * self.radius,
        )
    }

    /// Polar coordinates of a pixel relative to the center. The angle is
    /// shifted into `[-π/2, 3π/2)` so it can be compared against slice bounds.
    #[must_use]
    pub fn polar(&self, x: f64, y: f64) -> (f64, f64) {
        let dx = x - self.center_x;
        let dy = y - self.center_y;
        let mut angle = dy.atan2(dx);
        if angle < PIE_START_ANGLE {
            angle += TAU;
        }
        (angle, dx.hypot(dy))
    }

    /// Radial and angular hit test. Points outside the radius never hit.
    #[must_use]
    pub fn slice_at(&self, x: f64, y: f64) -> Option<usize> {
        let (angle, distance) = self.polar(x, y);
        if !distance.is_finite() || distance > self.radius {
            return None;
        }
        self.slices
            .iter()
            .find(|slice| slice.contains(angle))
            .map(|slice| slice.index)
    }
}
