mod bar_render_frame_builder;
mod chart_chrome;
mod chart_config;
mod engine;
mod interaction_controller;
mod invalidation;
mod invalidation_render_gate;
mod line_render_frame_builder;
mod pie_render_frame_builder;
mod progress_render_frame_builder;
mod progress_ring;
mod render_frame_builder;
mod render_style;
mod validation;

pub use bar_render_frame_builder::build_bar_frame;
pub use chart_config::{ChartConfig, DEFAULT_ACCENT, DEFAULT_PADDING_PX, DEFAULT_PALETTE};
pub use engine::ChartEngine;
pub use hit_test::{hit_test, hit_test_bar, hit_test_line, hit_test_pie};
pub use invalidation::{InvalidationLevel, InvalidationTopic, InvalidationTopics};
pub use line_render_frame_builder::build_line_frame;
pub use pie_render_frame_builder::build_pie_frame;
pub use progress_render_frame_builder::build_progress_frame;
pub use progress_ring::{ProgressRing, ProgressRingConfig, ProgressTransition};
pub use render_frame_builder::build_render_frame;
pub use render_style::ChartStyle;
