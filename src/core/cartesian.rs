use crate::core::{PlotArea, ValueRange};

/// Coordinate strategy shared by index-positioned chart kinds.
///
/// Grid, axis, tick-label and tooltip drawing only talk to this trait; the
/// per-kind normalization (range-based for lines, zero-anchored for bars) and
/// the reverse rounding rule live in the implementations.
pub trait CartesianLayout {
    fn plot(&self) -> PlotArea;

    fn range(&self) -> ValueRange;

    /// Number of elements laid out.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Pixel point where emphasis and tooltips attach for element `index`.
    fn anchor(&self, index: usize, value: f64) -> (f64, f64);

    /// Horizontal center used for the x-axis label of element `index`.
    fn label_x(&self, index: usize) -> f64;

    /// Reverse mapping of a pointer x coordinate. Vertical position is ignored.
    fn index_at(&self, x: f64) -> Option<usize>;
}

/// Converts a fractional index into a dataset index, rejecting anything
/// outside `0..len`.
pub(crate) fn checked_index(raw: f64, len: usize) -> Option<usize> {
    if !raw.is_finite() || raw < 0.0 || raw >= len as f64 {
        return None;
    }
    Some(raw as usize)
}

/// Rounds halves toward positive infinity (`-0.5 -> 0`, `2.5 -> 3`).
pub(crate) fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

#[cfg(test)]
mod tests {
    use super::{checked_index, round_half_up};

    #[test]
    fn round_half_up_differs_from_round_for_negative_halves() {
        assert_eq!(round_half_up(-0.5), 0.0);
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(1.49), 1.0);
    }

    #[test]
    fn checked_index_bounds() {
        assert_eq!(checked_index(0.0, 3), Some(0));
        assert_eq!(checked_index(2.0, 3), Some(2));
        assert_eq!(checked_index(3.0, 3), None);
        assert_eq!(checked_index(-1.0, 3), None);
        assert_eq!(checked_index(f64::NAN, 3), None);
    }
}
