//! Drawing pieces shared by every chart kind: grid, axes, tick labels and the
//! hover tooltip.

use smallvec::SmallVec;

use crate::core::{CartesianLayout, DataPoint, PlotArea, ValueRange, Viewport};
use crate::render::{
    CanvasLayerKind, LinePrimitive, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive,
};

use super::ChartStyle;

pub(crate) const GRID_LINE_COUNT: usize = 5;
pub(crate) const Y_LABEL_COUNT: usize = 6;
/// Upper bound on drawn x labels; the stride is `ceil(n / MAX_X_LABELS)`.
pub(crate) const MAX_X_LABELS: usize = 6;

const TOOLTIP_CORNER_RADIUS_PX: f64 = 4.0;

/// Deterministic, backend-independent text width estimate.
pub(crate) fn estimate_text_width_px(text: &str, font_size_px: f64) -> f64 {
    let units = text.chars().fold(0.0, |acc, ch| {
        acc + match ch {
            '0'..='9' => 0.62,
            '.' | ',' | ':' => 0.34,
            '-' | '+' | '%' => 0.42,
            ' ' => 0.33,
            'A'..='Z' => 0.68,
            _ => 0.58,
        }
    });
    (units * font_size_px).max(font_size_px)
}

/// Exact value as shown in tooltips and the legend.
pub(crate) fn format_value(value: f64) -> String {
    if value == 0.0 {
        // Avoid "-0".
        return "0".to_owned();
    }
    format!("{value}")
}

pub(crate) fn tooltip_text(point: &DataPoint) -> String {
    if point.label.is_empty() {
        format_value(point.value)
    } else {
        format!("{}: {}", point.label, format_value(point.value))
    }
}

/// Every `stride`-th x label is drawn.
pub(crate) fn x_label_stride(len: usize) -> usize {
    len.div_ceil(MAX_X_LABELS).max(1)
}

/// Y-axis label values, bottom to top, rounded to integers.
pub(crate) fn y_label_values(range: ValueRange) -> SmallVec<[f64; Y_LABEL_COUNT]> {
    let steps = (Y_LABEL_COUNT - 1) as f64;
    (0..Y_LABEL_COUNT)
        .map(|step| {
            let rounded = range.value_at(step as f64 / steps).round();
            if rounded == 0.0 { 0.0 } else { rounded }
        })
        .collect()
}

pub(crate) fn push_grid(frame: &mut RenderFrame, plot: PlotArea, style: &ChartStyle) {
    let steps = (GRID_LINE_COUNT - 1) as f64;
    for line in 0..GRID_LINE_COUNT {
        let y = plot.top() + plot.chart_height() * line as f64 / steps;
        frame.push(
            CanvasLayerKind::Grid,
            LinePrimitive::new(
                plot.left(),
                y,
                plot.right(),
                y,
                style.grid_line_width,
                style.grid_line_color,
            ),
        );
    }
}

pub(crate) fn push_axes(frame: &mut RenderFrame, plot: PlotArea, style: &ChartStyle) {
    let color = style.axis_line_color;
    let width = style.axis_line_width;
    frame.push(
        CanvasLayerKind::Axis,
        LinePrimitive::new(
            plot.left(),
            plot.top(),
            plot.left(),
            plot.baseline(),
            width,
            color,
        ),
    );
    frame.push(
        CanvasLayerKind::Axis,
        LinePrimitive::new(
            plot.left(),
            plot.baseline(),
            plot.right(),
            plot.baseline(),
            width,
            color,
        ),
    );
}

/// Subsampled x labels under each element and integer y labels left of the
/// axis.
pub(crate) fn push_axis_labels<L: CartesianLayout>(
    frame: &mut RenderFrame,
    layout: &L,
    points: &[DataPoint],
    style: &ChartStyle,
) {
    let plot = layout.plot();
    let font = style.axis_label_font_size_px;
    let color = style.axis_label_color;

    let label_y = plot.baseline() + style.x_label_offset_px;
    for (index, point) in points
        .iter()
        .enumerate()
        .step_by(x_label_stride(points.len()))
    {
        if point.label.is_empty() {
            continue;
        }
        frame.push(
            CanvasLayerKind::AxisLabels,
            TextPrimitive::new(
                point.label.clone(),
                layout.label_x(index),
                label_y,
                font,
                color,
                TextHAlign::Center,
            ),
        );
    }

    let range = layout.range();
    let label_x = plot.left() - style.y_label_gap_px;
    let steps = (Y_LABEL_COUNT - 1) as f64;
    for (step, value) in y_label_values(range)
        .into_iter()
        .enumerate()
    {
        let y = plot.baseline() - plot.chart_height() * step as f64 / steps;
        frame.push(
            CanvasLayerKind::AxisLabels,
            TextPrimitive::new(
                format!("{value:.0}"),
                label_x,
                y,
                font,
                color,
                TextHAlign::Right,
            ),
        );
    }
}

/// Floating value box centered above `anchor`, kept inside the viewport.
pub(crate) fn push_tooltip(
    frame: &mut RenderFrame,
    viewport: Viewport,
    anchor: (f64, f64),
    text: String,
    style: &ChartStyle,
) {
    let font = style.tooltip_font_size_px;
    let width = estimate_text_width_px(&text, font) + 2.0 * style.tooltip_padding_px;
    let height = font + 1.5 * style.tooltip_padding_px;
    let max_x = (f64::from(viewport.width) - width).max(0.0);
    let x = (anchor.0 - width / 2.0).clamp(0.0, max_x);
    let y = (anchor.1 - style.tooltip_gap_px - height).max(0.0);

    frame.push(
        CanvasLayerKind::Hover,
        RectPrimitive::new(x, y, width, height, style.tooltip_background_color)
            .with_corner_radius(TOOLTIP_CORNER_RADIUS_PX),
    );
    frame.push(
        CanvasLayerKind::Hover,
        TextPrimitive::new(
            text,
            x + width / 2.0,
            y + height / 2.0,
            font,
            style.tooltip_text_color,
            TextHAlign::Center,
        ),
    );
}
