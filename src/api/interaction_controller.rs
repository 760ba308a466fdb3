use tracing::trace;

use crate::error::ChartResult;
use crate::render::Renderer;

use super::{ChartEngine, InvalidationTopic};

impl<R: Renderer> ChartEngine<R> {
    /// Routes a pointer move through hit testing into the hover state machine.
    ///
    /// Returns `true` when the hover target changed and a repaint was
    /// requested. Moving within the same element is a no-op.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> ChartResult<bool> {
        let hit = self.hit_test(x, y)?;
        let previous = self.hover;
        if !self.hover.on_pointer_move(hit) {
            return Ok(false);
        }
        trace!(from = ?previous, to = ?self.hover, x, y, "hover transition");
        self.pending.insert(InvalidationTopic::Hover);
        Ok(true)
    }

    /// Clears hover when the pointer leaves the surface.
    pub fn pointer_leave(&mut self) -> bool {
        let previous = self.hover;
        if !self.hover.on_pointer_leave() {
            return false;
        }
        trace!(from = ?previous, "hover cleared on leave");
        self.pending.insert(InvalidationTopic::Hover);
        true
    }
}
