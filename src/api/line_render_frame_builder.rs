use crate::core::{CartesianLayout, DataPoint, LineLayout};
use crate::error::ChartResult;
use crate::interaction::{HoverState, HoverTarget};
use crate::render::{CanvasLayerKind, CirclePrimitive, PolylinePrimitive, RenderFrame};

use super::ChartConfig;
use super::chart_chrome::{push_axes, push_axis_labels, push_grid, push_tooltip, tooltip_text};

/// Builds one line-chart frame.
///
/// Returns `Ok(None)` for an empty dataset: nothing is drawn, not even the
/// background.
pub fn build_line_frame(
    points: &[DataPoint],
    config: &ChartConfig,
    hover: HoverState,
) -> ChartResult<Option<RenderFrame>> {
    let plot = config.plot_area()?;
    let Some(layout) = LineLayout::new(plot, points) else {
        return Ok(None);
    };
    let style = &config.style;
    let accent = config.color;

    let mut frame = RenderFrame::new(config.viewport, style.background_color);
    push_grid(&mut frame, plot, style);
    push_axes(&mut frame, plot, style);

    let projected = layout.project(points);
    if projected.len() >= 2 {
        frame.push(
            CanvasLayerKind::Series,
            PolylinePrimitive::new(
                projected.iter().map(|point| (point.x, point.y)).collect(),
                style.line_stroke_width,
                accent,
            ),
        );
    }

    for point in &projected {
        frame.push(
            CanvasLayerKind::Decoration,
            CirclePrimitive::filled(point.x, point.y, style.marker_radius, accent),
        );
    }

    let hovered = match hover.target() {
        Some(HoverTarget::Point(index)) if index < points.len() => Some(index),
        _ => None,
    };
    if let Some(index) = hovered {
        let (x, y) = layout.anchor(index, points[index].value);
        frame.push(
            CanvasLayerKind::Hover,
            CirclePrimitive::ring(x, y, style.hover_ring_radius, style.hover_ring_width, accent),
        );
        push_tooltip(
            &mut frame,
            config.viewport,
            (x, y - style.hover_ring_radius),
            tooltip_text(&points[index]),
            style,
        );
    }

    push_axis_labels(&mut frame, &layout, points, style);
    Ok(Some(frame))
}

#[cfg(test)]
mod tests {
    use super::build_line_frame;
    use crate::api::ChartConfig;
    use crate::core::{ChartKind, DataPoint};
    use crate::interaction::{HoverState, HoverTarget};
    use crate::render::{CanvasLayerKind, Primitive};

    fn months() -> Vec<DataPoint> {
        vec![
            DataPoint::new("Jan", 10.0),
            DataPoint::new("Feb", 20.0),
            DataPoint::new("Mar", 15.0),
        ]
    }

    #[test]
    fn frame_contains_grid_axes_path_markers_and_labels() {
        let config = ChartConfig::default_for(ChartKind::Line);
        let frame = build_line_frame(&months(), &config, HoverState::Idle)
            .expect("build")
            .expect("frame");
        frame.validate().expect("valid frame");

        assert_eq!(frame.count_in_layer(CanvasLayerKind::Grid), 5);
        assert_eq!(frame.count_in_layer(CanvasLayerKind::Axis), 2);
        assert_eq!(frame.count_in_layer(CanvasLayerKind::Series), 1);
        assert_eq!(frame.count_in_layer(CanvasLayerKind::Decoration), 3);
        assert_eq!(frame.count_in_layer(CanvasLayerKind::Hover), 0);
        assert_eq!(frame.count_in_layer(CanvasLayerKind::AxisLabels), 3 + 6);
    }

    #[test]
    fn hovered_point_gets_ring_and_tooltip() {
        let config = ChartConfig::default_for(ChartKind::Line);
        let frame = build_line_frame(
            &months(),
            &config,
            HoverState::Hovering(HoverTarget::Point(1)),
        )
        .expect("build")
        .expect("frame");

        let hover: Vec<&Primitive> = frame.primitives_in(CanvasLayerKind::Hover).collect();
        assert_eq!(hover.len(), 3);
        let Primitive::Circle(ring) = hover[0] else {
            panic!("expected emphasis ring first");
        };
        assert_eq!((ring.center_x, ring.center_y), (200.0, 40.0));
        let tooltip: Vec<_> = frame.texts_in(CanvasLayerKind::Hover).collect();
        assert_eq!(tooltip[0].text, "Feb: 20");
    }

    #[test]
    fn foreign_hover_targets_are_ignored() {
        let config = ChartConfig::default_for(ChartKind::Line);
        let frame = build_line_frame(
            &months(),
            &config,
            HoverState::Hovering(HoverTarget::Slice(0)),
        )
        .expect("build")
        .expect("frame");
        assert_eq!(frame.count_in_layer(CanvasLayerKind::Hover), 0);

        let stale = build_line_frame(
            &months(),
            &config,
            HoverState::Hovering(HoverTarget::Point(7)),
        )
        .expect("build")
        .expect("frame");
        assert_eq!(stale.count_in_layer(CanvasLayerKind::Hover), 0);
    }

    #[test]
    fn empty_dataset_draws_nothing() {
        let config = ChartConfig::default_for(ChartKind::Line);
        assert!(build_line_frame(&[], &config, HoverState::Idle)
            .expect("build")
            .is_none());
    }
}
