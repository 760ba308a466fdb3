pub mod bar_series;
pub mod cartesian;
pub mod line_series;
pub mod pie_series;
pub mod plot_area;
pub mod progress;
pub mod types;
pub mod value_range;

pub use bar_series::{BAR_WIDTH_RATIO, BarGeometry, BarLayout};
pub use cartesian::CartesianLayout;
pub use line_series::{LineLayout, LinePoint};
pub use pie_series::{PIE_LABEL_RADIUS_RATIO, PIE_START_ANGLE, PieLayout, SliceGeometry};
pub use plot_area::PlotArea;
pub use progress::{ProgressSize, RingGeometry, progress_fraction, progress_percentage_label};
pub use types::{ChartKind, DataPoint, Viewport, validate_points};
pub use value_range::{ValueRange, pie_total};
