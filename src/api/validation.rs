use crate::error::{ChartError, ChartResult};
use crate::render::Color;

use super::{ChartConfig, ChartStyle};

pub(super) fn validate_chart_config(config: &ChartConfig) -> ChartResult<()> {
    config.plot_area()?;
    config.color.validate()?;
    for color in &config.palette {
        color.validate()?;
    }
    validate_chart_style(config.style)
}

pub(super) fn validate_chart_style(style: ChartStyle) -> ChartResult<()> {
    for color in [
        style.background_color,
        style.grid_line_color,
        style.axis_line_color,
        style.axis_label_color,
        style.bar_hover_border_color,
        style.slice_border_color,
        style.slice_label_color,
        style.tooltip_background_color,
        style.tooltip_text_color,
        style.legend_text_color,
    ] {
        color.validate()?;
    }

    for (name, value) in [
        ("grid_line_width", style.grid_line_width),
        ("axis_line_width", style.axis_line_width),
        ("axis_label_font_size_px", style.axis_label_font_size_px),
        ("line_stroke_width", style.line_stroke_width),
        ("marker_radius", style.marker_radius),
        ("hover_ring_radius", style.hover_ring_radius),
        ("hover_ring_width", style.hover_ring_width),
        ("bar_hover_border_width", style.bar_hover_border_width),
        ("slice_label_font_size_px", style.slice_label_font_size_px),
        ("tooltip_font_size_px", style.tooltip_font_size_px),
        ("legend_row_height_px", style.legend_row_height_px),
        ("legend_swatch_size_px", style.legend_swatch_size_px),
        ("legend_font_size_px", style.legend_font_size_px),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(ChartError::InvalidData(format!(
                "style `{name}` must be finite and > 0"
            )));
        }
    }

    for (name, value) in [
        ("y_label_gap_px", style.y_label_gap_px),
        ("x_label_offset_px", style.x_label_offset_px),
        ("slice_border_width", style.slice_border_width),
        ("slice_hover_offset_px", style.slice_hover_offset_px),
        ("tooltip_padding_px", style.tooltip_padding_px),
        ("tooltip_gap_px", style.tooltip_gap_px),
        ("legend_offset_from_right_px", style.legend_offset_from_right_px),
        ("legend_top_px", style.legend_top_px),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(ChartError::InvalidData(format!(
                "style `{name}` must be finite and >= 0"
            )));
        }
    }

    if !(0.0..=1.0).contains(&style.bar_idle_alpha) {
        return Err(ChartError::InvalidData(
            "style `bar_idle_alpha` must be in [0, 1]".to_owned(),
        ));
    }

    Ok(())
}

pub(super) fn validate_color(color: Color) -> ChartResult<Color> {
    color.validate()?;
    Ok(color)
}
