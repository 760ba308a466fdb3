use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

use super::{ChartEngine, InvalidationLevel, InvalidationTopics};

impl<R: Renderer> ChartEngine<R> {
    #[must_use]
    pub fn pending_invalidation(&self) -> InvalidationTopics {
        self.pending
    }

    #[must_use]
    pub fn pending_invalidation_level(&self) -> InvalidationLevel {
        self.pending.level()
    }

    #[must_use]
    pub fn has_pending_invalidation(&self) -> bool {
        !self.pending.is_none()
    }

    pub fn clear_pending_invalidation(&mut self) {
        self.pending.clear();
    }

    pub fn build_render_frame_if_invalidated(&self) -> ChartResult<Option<RenderFrame>> {
        if !self.has_pending_invalidation() {
            return Ok(None);
        }
        self.build_render_frame()
    }

    /// Renders only when a watched input changed since the last render.
    pub fn render_if_invalidated(&mut self) -> ChartResult<bool> {
        if !self.has_pending_invalidation() {
            return Ok(false);
        }
        self.render()
    }
}

#[cfg(test)]
mod tests {
    use crate::api::{ChartConfig, ChartEngine, InvalidationLevel};
    use crate::core::{ChartKind, DataPoint};
    use crate::render::NullRenderer;

    fn build_engine() -> ChartEngine<NullRenderer> {
        ChartEngine::new(
            NullRenderer::default(),
            ChartKind::Line,
            ChartConfig::default_for(ChartKind::Line),
        )
        .expect("engine init")
    }

    #[test]
    fn gate_build_returns_none_without_pending_invalidation() {
        let mut engine = build_engine();
        engine
            .set_data(vec![DataPoint::new("a", 1.0)])
            .expect("data");
        engine.clear_pending_invalidation();

        let frame = engine
            .build_render_frame_if_invalidated()
            .expect("gate build");
        assert!(frame.is_none());
    }

    #[test]
    fn gate_render_returns_true_with_pending_invalidation() {
        let mut engine = build_engine();
        engine.clear_pending_invalidation();
        engine
            .set_data(vec![DataPoint::new("a", 1.0), DataPoint::new("b", 2.0)])
            .expect("data");
        assert_eq!(engine.pending_invalidation_level(), InvalidationLevel::Full);

        assert!(engine.render_if_invalidated().expect("gate render"));
        assert!(!engine.has_pending_invalidation());
        assert!(!engine.render_if_invalidated().expect("gate render"));
    }

    #[test]
    fn hover_only_changes_are_cursor_level() {
        let mut engine = build_engine();
        engine
            .set_data(vec![DataPoint::new("a", 1.0), DataPoint::new("b", 2.0)])
            .expect("data");
        engine.render().expect("render");

        assert!(engine.pointer_move(45.0, 100.0).expect("move"));
        assert_eq!(
            engine.pending_invalidation_level(),
            InvalidationLevel::Cursor
        );
    }
}
