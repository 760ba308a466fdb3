use crate::core::{BarLayout, CartesianLayout, DataPoint};
use crate::error::ChartResult;
use crate::interaction::{HoverState, HoverTarget};
use crate::render::{CanvasLayerKind, RectPrimitive, RenderFrame};

use super::ChartConfig;
use super::chart_chrome::{push_axes, push_axis_labels, push_grid, push_tooltip, tooltip_text};

/// Builds one bar-chart frame. Returns `Ok(None)` for an empty dataset.
pub fn build_bar_frame(
    points: &[DataPoint],
    config: &ChartConfig,
    hover: HoverState,
) -> ChartResult<Option<RenderFrame>> {
    let plot = config.plot_area()?;
    let Some(layout) = BarLayout::new(plot, points) else {
        return Ok(None);
    };
    let style = &config.style;
    let accent = config.color;

    let hovered = match hover.target() {
        Some(HoverTarget::Bar(index)) if index < points.len() => Some(index),
        _ => None,
    };

    let mut frame = RenderFrame::new(config.viewport, style.background_color);
    push_grid(&mut frame, plot, style);
    push_axes(&mut frame, plot, style);

    let bars = layout.project(points);
    for (index, bar) in bars.iter().enumerate() {
        let fill = if hovered == Some(index) {
            accent
        } else {
            accent.with_alpha(accent.alpha * style.bar_idle_alpha)
        };
        frame.push(
            CanvasLayerKind::Series,
            RectPrimitive::new(bar.x, bar.y, bar.width, bar.height, fill),
        );
    }

    if let Some(index) = hovered {
        let bar = bars[index];
        frame.push(
            CanvasLayerKind::Hover,
            RectPrimitive::new(bar.x, bar.y, bar.width, bar.height, accent)
                .with_border(style.bar_hover_border_width, style.bar_hover_border_color),
        );
        push_tooltip(
            &mut frame,
            config.viewport,
            layout.anchor(index, points[index].value),
            tooltip_text(&points[index]),
            style,
        );
    }

    push_axis_labels(&mut frame, &layout, points, style);
    Ok(Some(frame))
}
