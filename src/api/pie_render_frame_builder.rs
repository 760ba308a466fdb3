use crate::core::{DataPoint, PieLayout};
use crate::error::ChartResult;
use crate::interaction::{HoverState, HoverTarget};
use crate::render::{
    CanvasLayerKind, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive, WedgePrimitive,
};

use super::ChartConfig;
use super::chart_chrome::{format_value, push_tooltip, tooltip_text};

/// Builds one pie-chart frame.
///
/// Returns `Ok(None)` for an empty dataset or one whose values sum to zero.
/// Pie frames carry no grid or axes.
pub fn build_pie_frame(
    points: &[DataPoint],
    config: &ChartConfig,
    hover: HoverState,
) -> ChartResult<Option<RenderFrame>> {
    let plot = config.plot_area()?;
    let Some(pie) = PieLayout::new(plot, points) else {
        return Ok(None);
    };
    let style = &config.style;

    let hovered = match hover.target() {
        Some(HoverTarget::Slice(index)) if index < points.len() => Some(index),
        _ => None,
    };
    let offset_of = |index: usize| {
        if hovered == Some(index) {
            pie.slices[index].offset(style.slice_hover_offset_px)
        } else {
            (0.0, 0.0)
        }
    };

    let mut frame = RenderFrame::new(config.viewport, style.background_color);

    for slice in pie.slices.iter().filter(|slice| slice.sweep() > 0.0) {
        let (dx, dy) = offset_of(slice.index);
        frame.push(
            CanvasLayerKind::Series,
            WedgePrimitive {
                center_x: pie.center_x + dx,
                center_y: pie.center_y + dy,
                radius: pie.radius,
                start_angle: slice.start_angle,
                end_angle: slice.end_angle,
                fill_color: config.palette_color(slice.index),
                border_color: style.slice_border_color,
                border_width: style.slice_border_width,
            },
        );
    }

    for slice in pie.slices.iter().filter(|slice| slice.sweep() > 0.0) {
        let (dx, dy) = offset_of(slice.index);
        let (x, y) = pie.label_anchor(*slice);
        frame.push(
            CanvasLayerKind::Decoration,
            TextPrimitive::new(
                slice.percentage_label(),
                x + dx,
                y + dy,
                style.slice_label_font_size_px,
                style.slice_label_color,
                TextHAlign::Center,
            )
            .bold(),
        );
    }

    if let Some(index) = hovered {
        let (dx, dy) = offset_of(index);
        let (x, y) = pie.rim_point(pie.slices[index]);
        push_tooltip(
            &mut frame,
            config.viewport,
            (x + dx, y + dy),
            tooltip_text(&points[index]),
            style,
        );
    }

    push_legend(&mut frame, points, config);
    Ok(Some(frame))
}

fn push_legend(frame: &mut RenderFrame, points: &[DataPoint], config: &ChartConfig) {
    let style = &config.style;
    let x = f64::from(config.viewport.width) - style.legend_offset_from_right_px;
    let swatch = style.legend_swatch_size_px;

    for (index, point) in points.iter().enumerate() {
        let top = style.legend_top_px + style.legend_row_height_px * index as f64;
        frame.push(
            CanvasLayerKind::Legend,
            RectPrimitive::new(x, top, swatch, swatch, config.palette_color(index)),
        );
        let text = if point.label.is_empty() {
            format_value(point.value)
        } else {
            format!("{} ({})", point.label, format_value(point.value))
        };
        frame.push(
            CanvasLayerKind::Legend,
            TextPrimitive::new(
                text,
                x + swatch + 6.0,
                top + swatch / 2.0,
                style.legend_font_size_px,
                style.legend_text_color,
                TextHAlign::Left,
            ),
        );
    }
}
