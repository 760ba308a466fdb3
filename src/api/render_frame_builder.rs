use crate::core::{ChartKind, DataPoint};
use crate::error::ChartResult;
use crate::interaction::HoverState;
use crate::render::RenderFrame;

use super::ChartConfig;
use super::bar_render_frame_builder::build_bar_frame;
use super::line_render_frame_builder::build_line_frame;
use super::pie_render_frame_builder::build_pie_frame;

/// Pure render cycle: `(dataset, config, hover) -> frame`.
///
/// `Ok(None)` means there is nothing to draw (empty dataset, or a pie whose
/// values sum to zero) and the host should leave its surface untouched.
pub fn build_render_frame(
    kind: ChartKind,
    points: &[DataPoint],
    config: &ChartConfig,
    hover: HoverState,
) -> ChartResult<Option<RenderFrame>> {
    match kind {
        ChartKind::Line => build_line_frame(points, config, hover),
        ChartKind::Bar => build_bar_frame(points, config, hover),
        ChartKind::Pie => build_pie_frame(points, config, hover),
    }
}
