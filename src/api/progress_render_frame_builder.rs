use std::f64::consts::{FRAC_PI_2, TAU};

use crate::core::{RingGeometry, progress_percentage_label};
use crate::render::{ArcPrimitive, CanvasLayerKind, Color, RenderFrame, TextHAlign, TextPrimitive};

use super::ProgressRingConfig;

const PERCENT_FONT_RATIO: f64 = 0.45;
const MIN_PERCENT_FONT_PX: f64 = 10.0;
const LABEL_FONT_RATIO: f64 = 0.18;
const MIN_LABEL_FONT_PX: f64 = 9.0;
const LABEL_TEXT_COLOR: Color = Color::from_rgb8(0x6b, 0x72, 0x80);
const PERCENT_TEXT_COLOR: Color = Color::from_rgb8(0x11, 0x18, 0x27);

/// Builds a progress-ring frame with the foreground arc at
/// `displayed_fraction`.
///
/// The percentage text always shows the target fraction so it does not tick
/// during a transition.
#[must_use]
pub fn build_progress_frame(config: &ProgressRingConfig, displayed_fraction: f64) -> RenderFrame {
    let viewport = config.size.viewport();
    let ring = RingGeometry::fit(viewport, config.stroke_width);
    let mut frame = RenderFrame::new(viewport, Color::WHITE);

    frame.push(
        CanvasLayerKind::Track,
        ArcPrimitive::new(
            ring.center_x,
            ring.center_y,
            ring.radius,
            (-FRAC_PI_2, -FRAC_PI_2 + TAU),
            ring.stroke_width,
            config.track_color,
        ),
    );

    if displayed_fraction > 0.0 {
        frame.push(
            CanvasLayerKind::Series,
            ArcPrimitive::new(
                ring.center_x,
                ring.center_y,
                ring.radius,
                ring.arc_angles(displayed_fraction),
                ring.stroke_width,
                config.color,
            )
            .with_round_caps(),
        );
    }

    let percent_font = (ring.radius * PERCENT_FONT_RATIO).max(MIN_PERCENT_FONT_PX);
    let has_label = !config.label.is_empty();
    let percent_y = if has_label {
        ring.center_y - percent_font * 0.25
    } else {
        ring.center_y
    };
    frame.push(
        CanvasLayerKind::Decoration,
        TextPrimitive::new(
            progress_percentage_label(config.fraction()),
            ring.center_x,
            percent_y,
            percent_font,
            PERCENT_TEXT_COLOR,
            TextHAlign::Center,
        )
        .bold(),
    );

    if has_label {
        let label_font = (ring.radius * LABEL_FONT_RATIO).max(MIN_LABEL_FONT_PX);
        frame.push(
            CanvasLayerKind::Decoration,
            TextPrimitive::new(
                config.label.clone(),
                ring.center_x,
                percent_y + percent_font * 0.5 + label_font * 0.75,
                label_font,
                LABEL_TEXT_COLOR,
                TextHAlign::Center,
            ),
        );
    }

    frame
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use super::build_progress_frame;
    use crate::api::ProgressRingConfig;
    use crate::render::{CanvasLayerKind, Primitive};

    #[test]
    fn zero_fraction_draws_only_track_and_text() {
        let config = ProgressRingConfig::new(0.0, 100.0);
        let frame = build_progress_frame(&config, 0.0);
        frame.validate().expect("valid frame");
        assert_eq!(frame.count_in_layer(CanvasLayerKind::Track), 1);
        assert_eq!(frame.count_in_layer(CanvasLayerKind::Series), 0);
        let texts: Vec<_> = frame.texts().map(|text| text.text.as_str()).collect();
        assert_eq!(texts, vec!["0%"]);
    }

    #[test]
    fn foreground_arc_starts_at_twelve_oclock_with_round_caps() {
        let config = ProgressRingConfig::new(25.0, 100.0).with_label("Disk");
        let frame = build_progress_frame(&config, 0.25);

        let Some(Primitive::Arc(arc)) = frame.primitives_in(CanvasLayerKind::Series).next() else {
            panic!("expected foreground arc");
        };
        assert!(arc.round_caps);
        assert_eq!(arc.start_angle, -FRAC_PI_2);
        assert!((arc.end_angle - 0.0).abs() < 1e-12);
        assert_eq!((arc.center_x, arc.center_y, arc.radius), (100.0, 60.0, 52.0));

        let texts: Vec<_> = frame
            .texts_in(CanvasLayerKind::Decoration)
            .map(|text| text.text.as_str())
            .collect();
        assert_eq!(texts, vec!["25%", "Disk"]);
    }

    #[test]
    fn percentage_follows_target_not_displayed_fraction() {
        let config = ProgressRingConfig::new(90.0, 100.0);
        let frame = build_progress_frame(&config, 0.3);
        assert_eq!(frame.texts().next().map(|t| t.text.as_str()), Some("90%"));
    }
}
