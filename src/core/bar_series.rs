use serde::{Deserialize, Serialize};

use crate::core::cartesian::checked_index;
use crate::core::{CartesianLayout, DataPoint, PlotArea, ValueRange};

/// Share of each bucket occupied by its bar.
pub const BAR_WIDTH_RATIO: f64 = 0.6;

/// Bar rectangle in pixel coordinates, anchored on the baseline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarGeometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BarGeometry {
    #[must_use]
    pub fn center_x(self) -> f64 {
        self.x + self.width * 0.5
    }
}

/// Bucket layout: each element owns `chart_width / n` pixels and bar heights
/// normalize against the dataset maximum, so every bar grows from zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarLayout {
    plot: PlotArea,
    range: ValueRange,
    len: usize,
}

impl BarLayout {
    /// Returns `None` for an empty dataset.
    #[must_use]
    pub fn new(plot: PlotArea, points: &[DataPoint]) -> Option<Self> {
        let range = ValueRange::from_points(points)?;
        Some(Self {
            plot,
            range,
            len: points.len(),
        })
    }

    #[must_use]
    pub fn spacing(&self) -> f64 {
        self.plot.chart_width() / self.len as f64
    }

    #[must_use]
    pub fn bar_width(&self) -> f64 {
        self.spacing() * BAR_WIDTH_RATIO
    }

    #[must_use]
    pub fn left_edge(&self, index: usize) -> f64 {
        let spacing = self.spacing();
        self.plot.left() + spacing * index as f64 + (spacing - self.bar_width()) / 2.0
    }

    /// Height relative to the dataset maximum. Non-positive maxima and
    /// negative values yield an empty bar.
    #[must_use]
    pub fn bar_height(&self, value: f64) -> f64 {
        if self.range.max <= 0.0 {
            return 0.0;
        }
        (value / self.range.max * self.plot.chart_height()).max(0.0)
    }

    #[must_use]
    pub fn geometry(&self, index: usize, value: f64) -> BarGeometry {
        let height = self.bar_height(value);
        BarGeometry {
            x: self.left_edge(index),
            y: self.plot.baseline() - height,
            width: self.bar_width(),
            height,
        }
    }

    /// Projects the whole dataset in order.
    #[must_use]
    pub fn project(&self, points: &[DataPoint]) -> Vec<BarGeometry> {
        points
            .iter()
            .enumerate()
            .map(|(index, point)| self.geometry(index, point.value))
            .collect()
    }
}

impl CartesianLayout for BarLayout {
    fn plot(&self) -> PlotArea {
        self.plot
    }

    fn range(&self) -> ValueRange {
        self.range
    }

    fn len(&self) -> usize {
        self.len
    }

    fn anchor(&self, index: usize, value: f64) -> (f64, f64) {
        let bar = self.geometry(index, value);
        (bar.center_x(), bar.y)
    }

    fn label_x(&self, index: usize) -> f64 {
        self.plot.left() + self.spacing() * (index as f64 + 0.5)
    }

    fn index_at(&self, x: f64) -> Option<usize> {
        checked_index(((x - self.plot.left()) / self.spacing()).floor(), self.len)
    }
}

#[cfg(test)]
mod tests {
    use super::BarLayout;
    use crate::core::{CartesianLayout, DataPoint, PlotArea, Viewport};

    fn layout(points: &[DataPoint]) -> BarLayout {
        let plot = PlotArea::new(Viewport::new(400, 200), 40.0).expect("plot");
        BarLayout::new(plot, points).expect("layout")
    }

    #[test]
    fn heights_normalize_against_maximum_only() {
        let points = vec![
            DataPoint::new("A", 0.0),
            DataPoint::new("B", 50.0),
            DataPoint::new("C", 100.0),
        ];
        let layout = layout(&points);
        let heights: Vec<f64> = layout.project(&points).iter().map(|b| b.height).collect();
        assert_eq!(heights, vec![0.0, 60.0, 120.0]);
    }

    #[test]
    fn bars_are_centered_in_their_bucket() {
        let points = vec![DataPoint::new("A", 1.0), DataPoint::new("B", 2.0)];
        let layout = layout(&points);
        assert_eq!(layout.spacing(), 160.0);
        assert_eq!(layout.bar_width(), 96.0);
        assert_eq!(layout.left_edge(0), 72.0);
        assert_eq!(layout.left_edge(1), 232.0);
        assert_eq!(layout.label_x(1), 280.0);
    }

    #[test]
    fn reverse_mapping_floors_into_buckets() {
        let points = vec![DataPoint::new("A", 1.0), DataPoint::new("B", 2.0)];
        let layout = layout(&points);
        assert_eq!(layout.index_at(40.0), Some(0));
        assert_eq!(layout.index_at(199.9), Some(0));
        assert_eq!(layout.index_at(200.0), Some(1));
        assert_eq!(layout.index_at(359.9), Some(1));
        assert_eq!(layout.index_at(360.0), None);
        assert_eq!(layout.index_at(39.9), None);
    }

    #[test]
    fn non_positive_maximum_collapses_bars() {
        let points = vec![DataPoint::new("A", -4.0), DataPoint::new("B", 0.0)];
        let layout = layout(&points);
        assert!(layout.project(&points).iter().all(|b| b.height == 0.0));
    }
}
