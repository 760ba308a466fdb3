use std::f64::consts::{FRAC_PI_2, PI, TAU};

use approx::assert_abs_diff_eq;
use dashboard_charts::api::{ChartConfig, ChartEngine, DEFAULT_PALETTE, build_pie_frame};
use dashboard_charts::core::{ChartKind, DataPoint, PieLayout};
use dashboard_charts::interaction::HoverState;
use dashboard_charts::render::{CanvasLayerKind, NullRenderer, Primitive};

fn halves() -> Vec<DataPoint> {
    vec![DataPoint::new("X", 50.0), DataPoint::new("Y", 50.0)]
}

#[test]
fn equal_halves_split_at_twelve_and_six_oclock() {
    let config = ChartConfig::default_for(ChartKind::Pie);
    let pie = PieLayout::new(config.plot_area().expect("plot"), &halves()).expect("pie");

    assert_abs_diff_eq!(pie.slices[0].start_angle, -FRAC_PI_2);
    assert_abs_diff_eq!(pie.slices[0].end_angle, FRAC_PI_2, epsilon = 1e-12);
    assert_abs_diff_eq!(pie.slices[1].start_angle, FRAC_PI_2, epsilon = 1e-12);
    assert_abs_diff_eq!(pie.slices[1].end_angle, 3.0 * FRAC_PI_2, epsilon = 1e-12);
    assert_eq!(pie.slices[0].percentage_label(), "50.0%");
    assert_eq!(pie.slices[1].percentage_label(), "50.0%");
}

#[test]
fn radius_fits_the_smaller_side_minus_padding() {
    let config = ChartConfig::default_for(ChartKind::Pie);
    let pie = PieLayout::new(config.plot_area().expect("plot"), &halves()).expect("pie");
    assert_eq!((pie.center_x, pie.center_y, pie.radius), (150.0, 150.0, 110.0));
}

#[test]
fn slices_cycle_through_the_palette() {
    let config = ChartConfig::default_for(ChartKind::Pie);
    let points: Vec<_> = (0..12)
        .map(|i| DataPoint::new(format!("s{i}"), 1.0))
        .collect();
    let frame = build_pie_frame(&points, &config, HoverState::Idle)
        .expect("build")
        .expect("frame");

    let fills: Vec<_> = frame
        .primitives_in(CanvasLayerKind::Series)
        .filter_map(|primitive| match primitive {
            Primitive::Wedge(wedge) => Some(wedge.fill_color),
            _ => None,
        })
        .collect();
    assert_eq!(fills.len(), 12);
    assert_eq!(fills[0], DEFAULT_PALETTE[0]);
    assert_eq!(fills[9], DEFAULT_PALETTE[9]);
    assert_eq!(fills[10], DEFAULT_PALETTE[0]);
    assert_eq!(fills[11], DEFAULT_PALETTE[1]);
}

#[test]
fn zero_valued_slices_keep_their_legend_row() {
    let config = ChartConfig::default_for(ChartKind::Pie);
    let points = vec![
        DataPoint::new("Used", 30.0),
        DataPoint::new("Reserved", 0.0),
        DataPoint::new("Free", 10.0),
    ];
    let frame = build_pie_frame(&points, &config, HoverState::Idle)
        .expect("build")
        .expect("frame");

    assert_eq!(frame.count_in_layer(CanvasLayerKind::Series), 2);
    let legend: Vec<_> = frame
        .texts_in(CanvasLayerKind::Legend)
        .map(|text| text.text.as_str())
        .collect();
    assert_eq!(legend, vec!["Used (30)", "Reserved (0)", "Free (10)"]);

    let labels: Vec<_> = frame
        .texts_in(CanvasLayerKind::Decoration)
        .map(|text| text.text.as_str())
        .collect();
    assert_eq!(labels, vec!["75.0%", "25.0%"]);
}

#[test]
fn last_slice_closes_the_circle_exactly() {
    let config = ChartConfig::default_for(ChartKind::Pie);
    let points = vec![
        DataPoint::new("a", 0.1),
        DataPoint::new("b", 0.2),
        DataPoint::new("c", 0.3),
    ];
    let pie = PieLayout::new(config.plot_area().expect("plot"), &points).expect("pie");
    let last = pie.slices.last().expect("slice");
    assert_eq!(last.end_angle, -FRAC_PI_2 + TAU);
    assert!(pie.slices[1].bisector() > 0.0 && pie.slices[1].bisector() < PI);
}

#[test]
fn engine_skips_pies_without_positive_total() {
    let mut engine = ChartEngine::new(
        NullRenderer::default(),
        ChartKind::Pie,
        ChartConfig::default_for(ChartKind::Pie),
    )
    .expect("engine init");
    engine
        .set_data(vec![DataPoint::new("a", 0.0), DataPoint::new("b", -3.0)])
        .expect("data");
    assert!(!engine.render().expect("render"));
    assert_eq!(engine.renderer().expect("mounted").frames_rendered, 0);
}
