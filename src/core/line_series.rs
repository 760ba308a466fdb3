use serde::{Deserialize, Serialize};

use crate::core::cartesian::{checked_index, round_half_up};
use crate::core::{CartesianLayout, DataPoint, PlotArea, ValueRange};

/// Projected line-chart point in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinePoint {
    pub x: f64,
    pub y: f64,
}

/// Point-indexed layout: points span the plot width edge to edge and values
/// normalize against the observed `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineLayout {
    plot: PlotArea,
    range: ValueRange,
    len: usize,
}

impl LineLayout {
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

    /// Horizontal distance between consecutive points. A single point has no
    /// spacing and sits on the left edge.
    #[must_use]
    pub fn step(&self) -> f64 {
        if self.len < 2 {
            0.0
        } else {
            self.plot.chart_width() / (self.len - 1) as f64
        }
    }

    #[must_use]
    pub fn x_at(&self, index: usize) -> f64 {
        self.plot.left() + self.step() * index as f64
    }

    #[must_use]
    pub fn y_at(&self, value: f64) -> f64 {
        let normalized = self.range.normalize(value);
        self.plot.baseline() - normalized * self.plot.chart_height()
    }

    /// Projects the whole dataset in order.
    #[must_use]
    pub fn project(&self, points: &[DataPoint]) -> Vec<LinePoint> {
        points
            .iter()
            .enumerate()
            .map(|(index, point)| LinePoint {
                x: self.x_at(index),
                y: self.y_at(point.value),
            })
            .collect()
    }
}

impl CartesianLayout for LineLayout {
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
        (self.x_at(index), self.y_at(value))
    }

    fn label_x(&self, index: usize) -> f64 {
        self.x_at(index)
    }

    fn index_at(&self, x: f64) -> Option<usize> {
        let ratio = (x - self.plot.left()) / self.plot.chart_width();
        let steps = self.len.saturating_sub(1) as f64;
        checked_index(round_half_up(ratio * steps), self.len)
    }
}

#[cfg(test)]
mod tests {
    use super::LineLayout;
    use crate::core::{CartesianLayout, DataPoint, PlotArea, Viewport};

    fn months() -> Vec<DataPoint> {
        vec![
            DataPoint::new("Jan", 10.0),
            DataPoint::new("Feb", 20.0),
            DataPoint::new("Mar", 15.0),
        ]
    }

    fn layout(points: &[DataPoint]) -> LineLayout {
        let plot = PlotArea::new(Viewport::new(400, 200), 40.0).expect("plot");
        LineLayout::new(plot, points).expect("layout")
    }

    #[test]
    fn max_sits_on_top_padding_and_min_on_baseline() {
        let points = months();
        let layout = layout(&points);
        assert_eq!(layout.y_at(20.0), 40.0);
        assert_eq!(layout.y_at(10.0), 160.0);
        assert_eq!(layout.x_at(0), 40.0);
        assert_eq!(layout.x_at(2), 360.0);
    }

    #[test]
    fn reverse_mapping_rounds_to_nearest_point() {
        let points = months();
        let layout = layout(&points);
        assert_eq!(layout.index_at(40.0), Some(0));
        assert_eq!(layout.index_at(119.0), Some(0));
        assert_eq!(layout.index_at(120.0), Some(1));
        assert_eq!(layout.index_at(439.0), Some(2));
        assert_eq!(layout.index_at(440.0), None);
        assert_eq!(layout.index_at(-50.0), None);
    }

    #[test]
    fn single_point_sits_on_left_edge_and_always_hits() {
        let points = vec![DataPoint::new("only", 3.0)];
        let layout = layout(&points);
        assert_eq!(layout.x_at(0), 40.0);
        assert_eq!(layout.index_at(300.0), Some(0));
        assert_eq!(layout.y_at(3.0), 160.0);
    }

    #[test]
    fn empty_dataset_has_no_layout() {
        let plot = PlotArea::new(Viewport::new(400, 200), 40.0).expect("plot");
        assert!(LineLayout::new(plot, &[]).is_none());
    }
}
