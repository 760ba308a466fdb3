//! dashboard-charts: canvas-style dashboard charts.
//!
//! Line, bar, pie and progress-ring charts are built as backend-agnostic
//! `RenderFrame`s by pure functions of `(dataset, config, hover)`, then drawn
//! by any `Renderer` (headless `NullRenderer`, or Cairo behind the
//! `cairo-backend` feature).

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{ChartConfig, ChartEngine, ProgressRing, ProgressRingConfig};
pub use error::{ChartError, ChartResult};
