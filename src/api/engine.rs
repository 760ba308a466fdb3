use tracing::{debug, trace, warn};

use crate::core::{ChartKind, DataPoint, Viewport, validate_points};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{HoverState, HoverTarget};
use crate::render::{Color, RenderFrame, Renderer};

use super::validation::validate_color;
use super::{ChartConfig, InvalidationTopic, InvalidationTopics, build_render_frame, hit_test};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// One chart instance: dataset, configuration, hover state and the drawing
/// surface it exclusively owns.
///
/// The engine records which watched inputs changed since the last render;
/// hosts either call `render` directly or poll `render_if_invalidated` from
/// their event handlers.
pub struct ChartEngine<R: Renderer> {
    pub(super) surface: Option<R>,
    pub(super) kind: ChartKind,
    pub(super) config: ChartConfig,
    pub(super) points: Vec<DataPoint>,
    pub(super) hover: HoverState,
    pub(super) pending: InvalidationTopics,
}

impl<R: Renderer> ChartEngine<R> {
    /// Creates a mounted engine drawing into `renderer`.
    pub fn new(renderer: R, kind: ChartKind, config: ChartConfig) -> ChartResult<Self> {
        let mut engine = Self::unmounted(kind, config)?;
        engine.surface = Some(renderer);
        Ok(engine)
    }

    /// Creates an engine with no surface yet; renders are skipped until
    /// `mount` is called.
    pub fn unmounted(kind: ChartKind, config: ChartConfig) -> ChartResult<Self> {
        config.validate()?;
        Ok(Self {
            surface: None,
            kind,
            config,
            points: Vec::new(),
            hover: HoverState::Idle,
            pending: InvalidationTopics::all(),
        })
    }

    pub fn mount(&mut self, renderer: R) {
        self.surface = Some(renderer);
        self.pending = InvalidationTopics::all();
    }

    /// Detaches and returns the surface.
    pub fn unmount(&mut self) -> Option<R> {
        self.surface.take()
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.surface.is_some()
    }

    #[must_use]
    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    /// Current hover state. Exposed for inspection; only pointer handlers and
    /// dataset swaps change it.
    #[must_use]
    pub fn hover_state(&self) -> HoverState {
        self.hover
    }

    #[must_use]
    pub fn renderer(&self) -> Option<&R> {
        self.surface.as_ref()
    }

    pub fn renderer_mut(&mut self) -> Option<&mut R> {
        self.surface.as_mut()
    }

    #[must_use]
    pub fn into_renderer(self) -> Option<R> {
        self.surface
    }

    /// Replaces the dataset. Any hover target is dropped since its index may
    /// not exist in the new data.
    pub fn set_data(&mut self, points: Vec<DataPoint>) -> ChartResult<()> {
        if let Err(err) = validate_points(&points) {
            warn!(error = %err, "rejected dataset");
            return Err(err);
        }
        debug!(count = points.len(), kind = ?self.kind, "set dataset");
        self.points = points;
        if self.hover.invalidate() {
            self.pending.insert(InvalidationTopic::Hover);
        }
        self.pending.insert(InvalidationTopic::Dataset);
        Ok(())
    }

    pub fn set_size(&mut self, width: u32, height: u32) -> ChartResult<()> {
        let viewport = Viewport::new(width, height);
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport { width, height });
        }
        if viewport == self.config.viewport {
            return Ok(());
        }
        let next = self.config.clone().with_viewport(viewport);
        next.validate()?;
        debug!(width, height, "resize");
        self.config = next;
        self.pending.insert(InvalidationTopic::Viewport);
        Ok(())
    }

    pub fn set_color(&mut self, color: Color) -> ChartResult<()> {
        let color = validate_color(color)?;
        if color != self.config.color {
            self.config.color = color;
            self.pending.insert(InvalidationTopic::Style);
        }
        Ok(())
    }

    /// Parses `#rgb`, `#rrggbb` or `#rrggbbaa` and applies it as accent.
    pub fn set_hex_color(&mut self, hex: &str) -> ChartResult<()> {
        self.set_color(Color::from_hex(hex)?)
    }

    pub fn set_config(&mut self, config: ChartConfig) -> ChartResult<()> {
        config.validate()?;
        if config == self.config {
            return Ok(());
        }
        if config.viewport != self.config.viewport {
            self.pending.insert(InvalidationTopic::Viewport);
        }
        self.pending.insert(InvalidationTopic::Style);
        self.config = config;
        Ok(())
    }

    /// Element under `(x, y)`, computed from the live dataset.
    pub fn hit_test(&self, x: f64, y: f64) -> ChartResult<Option<HoverTarget>> {
        hit_test(self.kind, &self.points, &self.config, x, y)
    }

    pub fn build_render_frame(&self) -> ChartResult<Option<RenderFrame>> {
        build_render_frame(self.kind, &self.points, &self.config, self.hover)
    }

    /// Runs one render cycle.
    ///
    /// Returns `Ok(false)` without touching the surface when nothing is
    /// mounted or there is nothing to draw.
    pub fn render(&mut self) -> ChartResult<bool> {
        if self.surface.is_none() {
            debug!(kind = ?self.kind, "render skipped: no surface mounted");
            return Ok(false);
        }
        let Some(frame) = self.build_render_frame()? else {
            trace!(kind = ?self.kind, "render skipped: nothing to draw");
            self.pending.clear();
            return Ok(false);
        };
        if let Some(surface) = self.surface.as_mut() {
            surface.render(&frame)?;
        }
        self.pending.clear();
        Ok(true)
    }

    /// Renders the current frame into an external cairo context.
    ///
    /// This is the path GTK draw callbacks use; the mounted renderer only
    /// supplies the drawing routines.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> ChartResult<bool>
    where
        R: CairoContextRenderer,
    {
        if self.surface.is_none() {
            debug!(kind = ?self.kind, "cairo render skipped: no surface mounted");
            return Ok(false);
        }
        let Some(frame) = self.build_render_frame()? else {
            trace!(kind = ?self.kind, "cairo render skipped: nothing to draw");
            self.pending.clear();
            return Ok(false);
        };
        if let Some(surface) = self.surface.as_mut() {
            surface.render_on_cairo_context(context, &frame)?;
        }
        self.pending.clear();
        Ok(true)
    }
}
