use serde::{Deserialize, Serialize};

/// Z-ordered layers of one chart frame, bottom to top.
///
/// Frame builders must emit commands in this order; `RenderFrame::validate`
/// rejects frames that step back to a lower layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CanvasLayerKind {
    Grid,
    Axis,
    /// Static background track (progress ring).
    Track,
    Series,
    Decoration,
    Hover,
    AxisLabels,
    Legend,
}

impl CanvasLayerKind {
    pub const CANONICAL_ORDER: [Self; 8] = [
        Self::Grid,
        Self::Axis,
        Self::Track,
        Self::Series,
        Self::Decoration,
        Self::Hover,
        Self::AxisLabels,
        Self::Legend,
    ];

    /// Position in [`Self::CANONICAL_ORDER`].
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Grid => 0,
            Self::Axis => 1,
            Self::Track => 2,
            Self::Series => 3,
            Self::Decoration => 4,
            Self::Hover => 5,
            Self::AxisLabels => 6,
            Self::Legend => 7,
        }
    }
}
