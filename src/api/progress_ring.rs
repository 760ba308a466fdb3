use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{ProgressSize, Viewport, progress_fraction};
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, Renderer};

use super::DEFAULT_ACCENT;
use super::progress_render_frame_builder::build_progress_frame;

/// Host-facing progress-ring inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressRingConfig {
    pub value: f64,
    pub max: f64,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub size: ProgressSize,
    #[serde(default = "default_accent")]
    pub color: Color,
    #[serde(default = "default_track_color")]
    pub track_color: Color,
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,
    /// Duration of the linear arc transition after a value change. Zero
    /// disables the transition.
    #[serde(default = "default_transition_seconds")]
    pub transition_seconds: f64,
}

impl ProgressRingConfig {
    #[must_use]
    pub fn new(value: f64, max: f64) -> Self {
        Self {
            value,
            max,
            label: String::new(),
            size: ProgressSize::default(),
            color: default_accent(),
            track_color: default_track_color(),
            stroke_width: default_stroke_width(),
            transition_seconds: default_transition_seconds(),
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    #[must_use]
    pub fn with_size(mut self, size: ProgressSize) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub fn with_transition_seconds(mut self, seconds: f64) -> Self {
        self.transition_seconds = seconds;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.value.is_finite() || !self.max.is_finite() {
            return Err(ChartError::InvalidData(
                "progress value and max must be finite".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "progress stroke width must be finite and > 0".to_owned(),
            ));
        }
        if !self.transition_seconds.is_finite() || self.transition_seconds < 0.0 {
            return Err(ChartError::InvalidData(
                "progress transition must be finite and >= 0".to_owned(),
            ));
        }
        self.color.validate()?;
        self.track_color.validate()
    }

    /// Target fraction `min(value / max, 1)`.
    #[must_use]
    pub fn fraction(&self) -> f64 {
        progress_fraction(self.value, self.max)
    }
}

/// Linear interpolation of the displayed arc fraction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressTransition {
    pub from: f64,
    pub to: f64,
    pub elapsed_seconds: f64,
    pub duration_seconds: f64,
}

impl ProgressTransition {
    #[must_use]
    pub fn settled(fraction: f64) -> Self {
        Self {
            from: fraction,
            to: fraction,
            elapsed_seconds: 0.0,
            duration_seconds: 0.0,
        }
    }

    #[must_use]
    pub fn is_finished(self) -> bool {
        self.duration_seconds <= 0.0 || self.elapsed_seconds >= self.duration_seconds
    }

    #[must_use]
    pub fn displayed(self) -> f64 {
        if self.is_finished() {
            return self.to;
        }
        let t = self.elapsed_seconds / self.duration_seconds;
        self.from + (self.to - self.from) * t
    }

    /// Steps the transition. Returns the displacement applied to the displayed
    /// fraction, or `None` when nothing moved.
    pub fn step(&mut self, delta_seconds: f64) -> Option<f64> {
        if self.is_finished() || !delta_seconds.is_finite() || delta_seconds <= 0.0 {
            return None;
        }
        let before = self.displayed();
        self.elapsed_seconds = (self.elapsed_seconds + delta_seconds).min(self.duration_seconds);
        Some(self.displayed() - before)
    }
}

/// Progress-ring component: declarative inputs plus transition state.
///
/// Unlike the interactive charts it has no hover state; a redraw is needed
/// only when inputs change or the transition advances.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressRing {
    config: ProgressRingConfig,
    transition: ProgressTransition,
}

impl ProgressRing {
    /// Creates a ring already settled at its initial value.
    pub fn new(config: ProgressRingConfig) -> ChartResult<Self> {
        config.validate()?;
        let transition = ProgressTransition::settled(config.fraction());
        Ok(Self { config, transition })
    }

    #[must_use]
    pub fn config(&self) -> &ProgressRingConfig {
        &self.config
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.config.size.viewport()
    }

    #[must_use]
    pub fn fraction(&self) -> f64 {
        self.config.fraction()
    }

    /// Fraction currently covered by the foreground arc.
    #[must_use]
    pub fn displayed_fraction(&self) -> f64 {
        self.transition.displayed()
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.transition.is_finished()
    }

    /// Updates the value and retargets the transition from the currently
    /// displayed fraction. Returns `true` when a redraw is needed.
    pub fn set_value(&mut self, value: f64) -> ChartResult<bool> {
        if !value.is_finite() {
            return Err(ChartError::InvalidData(
                "progress value must be finite".to_owned(),
            ));
        }
        if value == self.config.value {
            return Ok(false);
        }
        self.config.value = value;
        self.retarget();
        Ok(true)
    }

    pub fn set_max(&mut self, max: f64) -> ChartResult<bool> {
        if !max.is_finite() {
            return Err(ChartError::InvalidData(
                "progress max must be finite".to_owned(),
            ));
        }
        if max == self.config.max {
            return Ok(false);
        }
        self.config.max = max;
        self.retarget();
        Ok(true)
    }

    pub fn set_label(&mut self, label: impl Into<String>) -> bool {
        let label = label.into();
        if label == self.config.label {
            return false;
        }
        self.config.label = label;
        true
    }

    pub fn set_size(&mut self, size: ProgressSize) -> bool {
        if size == self.config.size {
            return false;
        }
        self.config.size = size;
        true
    }

    /// Advances the transition. Returns `true` when the arc moved.
    pub fn advance(&mut self, delta_seconds: f64) -> bool {
        match self.transition.step(delta_seconds) {
            Some(displacement) => {
                trace!(
                    displacement,
                    displayed = self.transition.displayed(),
                    "progress transition step"
                );
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn build_frame(&self) -> crate::render::RenderFrame {
        build_progress_frame(&self.config, self.displayed_fraction())
    }

    pub fn render<R: Renderer>(&self, renderer: &mut R) -> ChartResult<()> {
        renderer.render(&self.build_frame())
    }

    fn retarget(&mut self) {
        let from = self.transition.displayed();
        let to = self.config.fraction();
        debug!(from, to, "progress retarget");
        self.transition = if self.config.transition_seconds > 0.0 {
            ProgressTransition {
                from,
                to,
                elapsed_seconds: 0.0,
                duration_seconds: self.config.transition_seconds,
            }
        } else {
            ProgressTransition::settled(to)
        };
    }
}

fn default_accent() -> Color {
    DEFAULT_ACCENT
}

fn default_track_color() -> Color {
    Color::from_rgb8(0xe5, 0xe7, 0xeb)
}

fn default_stroke_width() -> f64 {
    8.0
}

fn default_transition_seconds() -> f64 {
    0.5
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::{ProgressRing, ProgressRingConfig, ProgressTransition};

    #[test]
    fn ring_starts_settled() {
        let ring = ProgressRing::new(ProgressRingConfig::new(45.0, 100.0)).expect("ring");
        assert!(!ring.is_animating());
        assert_abs_diff_eq!(ring.displayed_fraction(), 0.45);
    }

    #[test]
    fn value_change_animates_linearly() {
        let mut ring = ProgressRing::new(
            ProgressRingConfig::new(0.0, 100.0).with_transition_seconds(1.0),
        )
        .expect("ring");
        assert!(ring.set_value(80.0).expect("set"));
        assert!(ring.is_animating());
        assert_abs_diff_eq!(ring.displayed_fraction(), 0.0);

        assert!(ring.advance(0.25));
        assert_abs_diff_eq!(ring.displayed_fraction(), 0.2, epsilon = 1e-12);

        assert!(ring.advance(5.0));
        assert_abs_diff_eq!(ring.displayed_fraction(), 0.8);
        assert!(!ring.is_animating());
        assert!(!ring.advance(0.1));
    }

    #[test]
    fn retarget_starts_from_displayed_fraction() {
        let mut ring = ProgressRing::new(
            ProgressRingConfig::new(0.0, 100.0).with_transition_seconds(1.0),
        )
        .expect("ring");
        ring.set_value(100.0).expect("set");
        ring.advance(0.5);
        ring.set_value(0.0).expect("set");
        assert_abs_diff_eq!(ring.displayed_fraction(), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn zero_duration_jumps_immediately() {
        let mut ring = ProgressRing::new(
            ProgressRingConfig::new(10.0, 100.0).with_transition_seconds(0.0),
        )
        .expect("ring");
        ring.set_value(60.0).expect("set");
        assert!(!ring.is_animating());
        assert_abs_diff_eq!(ring.displayed_fraction(), 0.6);
    }

    #[test]
    fn unchanged_value_needs_no_redraw() {
        let mut ring = ProgressRing::new(ProgressRingConfig::new(10.0, 100.0)).expect("ring");
        assert!(!ring.set_value(10.0).expect("set"));
        assert!(ring.set_value(f64::NAN).is_err());
    }

    #[test]
    fn settled_transition_does_not_step() {
        let mut transition = ProgressTransition::settled(0.3);
        assert!(transition.step(1.0).is_none());
        assert_eq!(transition.displayed(), 0.3);
    }

    #[test]
    fn invalid_configs_are_rejected() {
        assert!(ProgressRing::new(ProgressRingConfig::new(f64::INFINITY, 100.0)).is_err());
        assert!(
            ProgressRing::new(ProgressRingConfig::new(1.0, 100.0).with_transition_seconds(-1.0))
                .is_err()
        );
    }
}
