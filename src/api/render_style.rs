use serde::{Deserialize, Serialize};

use crate::render::Color;

/// Visual constants shared by every chart kind.
///
/// Accent colors are not part of the style: they come from `ChartConfig`
/// (accent for line/bar/progress, palette for pie).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartStyle {
    pub background_color: Color,
    pub grid_line_color: Color,
    pub grid_line_width: f64,
    pub axis_line_color: Color,
    pub axis_line_width: f64,
    pub axis_label_color: Color,
    pub axis_label_font_size_px: f64,
    /// Gap between the left axis and right-aligned y labels.
    pub y_label_gap_px: f64,
    /// Distance from the baseline to the middle of x labels.
    pub x_label_offset_px: f64,
    pub line_stroke_width: f64,
    pub marker_radius: f64,
    pub hover_ring_radius: f64,
    pub hover_ring_width: f64,
    /// Opacity of bars that are not hovered.
    pub bar_idle_alpha: f64,
    pub bar_hover_border_color: Color,
    pub bar_hover_border_width: f64,
    pub slice_border_color: Color,
    pub slice_border_width: f64,
    pub slice_hover_offset_px: f64,
    pub slice_label_color: Color,
    pub slice_label_font_size_px: f64,
    pub tooltip_background_color: Color,
    pub tooltip_text_color: Color,
    pub tooltip_font_size_px: f64,
    pub tooltip_padding_px: f64,
    /// Gap between the hovered element and the tooltip's bottom edge.
    pub tooltip_gap_px: f64,
    pub legend_offset_from_right_px: f64,
    pub legend_top_px: f64,
    pub legend_row_height_px: f64,
    pub legend_swatch_size_px: f64,
    pub legend_text_color: Color,
    pub legend_font_size_px: f64,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            background_color: Color::WHITE,
            grid_line_color: Color::from_rgb8(0xf0, 0xf0, 0xf0),
            grid_line_width: 1.0,
            axis_line_color: Color::from_rgb8(0x9c, 0xa3, 0xaf),
            axis_line_width: 1.0,
            axis_label_color: Color::from_rgb8(0x6b, 0x72, 0x80),
            axis_label_font_size_px: 12.0,
            y_label_gap_px: 10.0,
            x_label_offset_px: 20.0,
            line_stroke_width: 2.0,
            marker_radius: 4.0,
            hover_ring_radius: 7.0,
            hover_ring_width: 2.0,
            bar_idle_alpha: 0.7,
            bar_hover_border_color: Color::from_rgb8(0x1f, 0x29, 0x37),
            bar_hover_border_width: 2.0,
            slice_border_color: Color::WHITE,
            slice_border_width: 2.0,
            slice_hover_offset_px: 10.0,
            slice_label_color: Color::WHITE,
            slice_label_font_size_px: 12.0,
            tooltip_background_color: Color::rgba(0.0, 0.0, 0.0, 0.8),
            tooltip_text_color: Color::WHITE,
            tooltip_font_size_px: 12.0,
            tooltip_padding_px: 8.0,
            tooltip_gap_px: 10.0,
            legend_offset_from_right_px: 100.0,
            legend_top_px: 20.0,
            legend_row_height_px: 20.0,
            legend_swatch_size_px: 12.0,
            legend_text_color: Color::from_rgb8(0x37, 0x41, 0x51),
            legend_font_size_px: 12.0,
        }
    }
}
