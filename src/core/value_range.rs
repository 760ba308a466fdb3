use serde::{Deserialize, Serialize};

use crate::core::DataPoint;

/// `[min, max]` over a dataset's values.
///
/// Derived on every frame build and every hit test; never cached.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    /// Returns `None` for an empty dataset.
    #[must_use]
    pub fn from_points(points: &[DataPoint]) -> Option<Self> {
        let first = points.first()?;
        let (min, max) = points
            .iter()
            .fold((first.value, first.value), |(min, max), point| {
                (min.min(point.value), max.max(point.value))
            });
        Some(Self { min, max })
    }

    /// Normalization span. A flat dataset falls back to `1.0` so the
    /// value-to-pixel transform stays defined.
    #[must_use]
    pub fn span(self) -> f64 {
        let span = self.max - self.min;
        if span == 0.0 { 1.0 } else { span }
    }

    /// Position of `value` within the range, `0.0` at `min` and `1.0` at
    /// `max`. Stays finite when `max - min` overflows `f64`.
    #[must_use]
    pub fn normalize(self, value: f64) -> f64 {
        if (self.max - self.min).is_finite() {
            (value - self.min) / self.span()
        } else {
            (value / 2.0 - self.min / 2.0) / (self.max / 2.0 - self.min / 2.0)
        }
    }

    /// Inverse of [`ValueRange::normalize`].
    #[must_use]
    pub fn value_at(self, fraction: f64) -> f64 {
        if (self.max - self.min).is_finite() {
            self.min + self.span() * fraction
        } else {
            self.min * (1.0 - fraction) + self.max * fraction
        }
    }

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Sum of slice contributions for pie charts. Negative values contribute
/// nothing.
#[must_use]
pub fn pie_total(points: &[DataPoint]) -> f64 {
    points.iter().map(|point| point.value.max(0.0)).sum()
}
