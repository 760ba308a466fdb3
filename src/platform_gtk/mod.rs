//! GTK4 host adapters.
//!
//! Each adapter owns one `DrawingArea` and forwards its draw callback and
//! pointer events into the engine. Redraws are queued only when the engine
//! reports a change.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gtk4 as gtk;
use gtk::glib::ControlFlow;
use gtk::prelude::*;
use tracing::warn;

use crate::api::{ChartEngine, ProgressRing};
use crate::core::{DataPoint, ProgressSize};
use crate::error::ChartResult;
use crate::render::{CairoContextRenderer, CairoRenderer, Renderer};

/// Interactive line/bar/pie chart hosted in a `gtk::DrawingArea`.
pub struct GtkChartAdapter<R>
where
    R: Renderer + CairoContextRenderer + 'static,
{
    engine: Rc<RefCell<ChartEngine<R>>>,
    area: gtk::DrawingArea,
}

impl<R> GtkChartAdapter<R>
where
    R: Renderer + CairoContextRenderer + 'static,
{
    #[must_use]
    pub fn new(engine: ChartEngine<R>) -> Self {
        let viewport = engine.config().viewport;
        let engine = Rc::new(RefCell::new(engine));
        let area = gtk::DrawingArea::new();
        area.set_content_width(i32::try_from(viewport.width).unwrap_or(i32::MAX));
        area.set_content_height(i32::try_from(viewport.height).unwrap_or(i32::MAX));

        let draw_engine = Rc::clone(&engine);
        area.set_draw_func(move |_area, context, width, height| {
            let mut engine = draw_engine.borrow_mut();
            if let (Ok(width), Ok(height)) = (u32::try_from(width), u32::try_from(height))
                && let Err(err) = engine.set_size(width, height)
            {
                warn!(error = %err, width, height, "chart resize rejected");
            }
            if let Err(err) = engine.render_on_cairo_context(context) {
                warn!(error = %err, "chart draw failed");
            }
        });

        let motion = gtk::EventControllerMotion::new();
        let move_engine = Rc::clone(&engine);
        let move_area = area.downgrade();
        motion.connect_motion(move |_controller, x, y| {
            let changed = move_engine.borrow_mut().pointer_move(x, y);
            match changed {
                Ok(true) => {
                    if let Some(area) = move_area.upgrade() {
                        area.queue_draw();
                    }
                }
                Ok(false) => {}
                Err(err) => warn!(error = %err, "pointer move rejected"),
            }
        });
        let leave_engine = Rc::clone(&engine);
        let leave_area = area.downgrade();
        motion.connect_leave(move |_controller| {
            if leave_engine.borrow_mut().pointer_leave()
                && let Some(area) = leave_area.upgrade()
            {
                area.queue_draw();
            }
        });
        area.add_controller(motion);

        Self { engine, area }
    }

    #[must_use]
    pub fn widget(&self) -> &gtk::DrawingArea {
        &self.area
    }

    #[must_use]
    pub fn engine(&self) -> Rc<RefCell<ChartEngine<R>>> {
        Rc::clone(&self.engine)
    }

    pub fn set_data(&self, points: Vec<DataPoint>) -> ChartResult<()> {
        self.engine.borrow_mut().set_data(points)?;
        self.queue_draw_if_invalidated();
        Ok(())
    }

    pub fn set_hex_color(&self, hex: &str) -> ChartResult<()> {
        self.engine.borrow_mut().set_hex_color(hex)?;
        self.queue_draw_if_invalidated();
        Ok(())
    }

    fn queue_draw_if_invalidated(&self) {
        if self.engine.borrow().has_pending_invalidation() {
            self.area.queue_draw();
        }
    }
}

impl GtkChartAdapter<CairoRenderer> {
    /// Convenience constructor with a Cairo renderer sized to the engine.
    pub fn with_cairo(
        kind: crate::core::ChartKind,
        config: crate::api::ChartConfig,
    ) -> ChartResult<Self> {
        let renderer = CairoRenderer::for_viewport(config.viewport)?;
        Ok(Self::new(ChartEngine::new(renderer, kind, config)?))
    }
}

struct ProgressSurface {
    ring: ProgressRing,
    renderer: CairoRenderer,
}

/// Progress ring hosted in a `gtk::DrawingArea`, animated from the widget
/// frame clock while a transition is running.
pub struct GtkProgressRingAdapter {
    state: Rc<RefCell<ProgressSurface>>,
    area: gtk::DrawingArea,
    ticking: Rc<Cell<bool>>,
}

impl GtkProgressRingAdapter {
    pub fn new(ring: ProgressRing) -> ChartResult<Self> {
        let viewport = ring.viewport();
        let renderer = CairoRenderer::for_viewport(viewport)?;
        let state = Rc::new(RefCell::new(ProgressSurface { ring, renderer }));

        let area = gtk::DrawingArea::new();
        area.set_content_width(i32::try_from(viewport.width).unwrap_or(i32::MAX));
        area.set_content_height(i32::try_from(viewport.height).unwrap_or(i32::MAX));

        let draw_state = Rc::clone(&state);
        area.set_draw_func(move |_area, context, _width, _height| {
            let mut state = draw_state.borrow_mut();
            let frame = state.ring.build_frame();
            if let Err(err) = state.renderer.render_on_cairo_context(context, &frame) {
                warn!(error = %err, "progress ring draw failed");
            }
        });

        Ok(Self {
            state,
            area,
            ticking: Rc::new(Cell::new(false)),
        })
    }

    #[must_use]
    pub fn widget(&self) -> &gtk::DrawingArea {
        &self.area
    }

    pub fn set_value(&self, value: f64) -> ChartResult<()> {
        if self.state.borrow_mut().ring.set_value(value)? {
            self.area.queue_draw();
            self.start_ticking();
        }
        Ok(())
    }

    pub fn set_label(&self, label: &str) {
        if self.state.borrow_mut().ring.set_label(label) {
            self.area.queue_draw();
        }
    }

    pub fn set_size(&self, size: ProgressSize) {
        if self.state.borrow_mut().ring.set_size(size) {
            let viewport = size.viewport();
            self.area
                .set_content_width(i32::try_from(viewport.width).unwrap_or(i32::MAX));
            self.area
                .set_content_height(i32::try_from(viewport.height).unwrap_or(i32::MAX));
            self.area.queue_draw();
        }
    }

    fn start_ticking(&self) {
        if self.ticking.replace(true) {
            return;
        }
        let state = Rc::clone(&self.state);
        let ticking = Rc::clone(&self.ticking);
        let last_frame_us: Cell<Option<i64>> = Cell::new(None);
        self.area.add_tick_callback(move |area, clock| {
            let now = clock.frame_time();
            let delta_seconds = last_frame_us
                .replace(Some(now))
                .map_or(0.0, |last| (now - last) as f64 / 1_000_000.0);

            let mut state = state.borrow_mut();
            if state.ring.advance(delta_seconds) {
                area.queue_draw();
            }
            if state.ring.is_animating() {
                ControlFlow::Continue
            } else {
                ticking.set(false);
                ControlFlow::Break
            }
        });
    }
}
