use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{CanvasLayerKind, Color, Primitive, TextPrimitive};

/// One primitive tagged with the layer it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawCommand {
    pub layer: CanvasLayerKind,
    pub primitive: Primitive,
}

/// Backend-agnostic scene for one full clear-and-redraw pass.
///
/// Commands are executed in order after clearing the surface to `background`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub background: Color,
    pub commands: Vec<DrawCommand>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport, background: Color) -> Self {
        Self {
            viewport,
            background,
            commands: Vec::new(),
        }
    }

    pub fn push(&mut self, layer: CanvasLayerKind, primitive: impl Into<Primitive>) {
        self.commands.push(DrawCommand {
            layer,
            primitive: primitive.into(),
        });
    }

    #[must_use]
    pub fn with(mut self, layer: CanvasLayerKind, primitive: impl Into<Primitive>) -> Self {
        self.push(layer, primitive);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        self.background.validate()?;

        let mut previous_rank = 0;
        for command in &self.commands {
            let rank = command.layer.rank();
            if rank < previous_rank {
                return Err(ChartError::InvalidData(format!(
                    "{:?} command emitted after a higher layer",
                    command.layer
                )));
            }
            previous_rank = rank;
            command.primitive.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn primitives_in(&self, layer: CanvasLayerKind) -> impl Iterator<Item = &Primitive> {
        self.commands
            .iter()
            .filter(move |command| command.layer == layer)
            .map(|command| &command.primitive)
    }

    #[must_use]
    pub fn count_in_layer(&self, layer: CanvasLayerKind) -> usize {
        self.primitives_in(layer).count()
    }

    /// All text primitives in draw order.
    pub fn texts(&self) -> impl Iterator<Item = &TextPrimitive> {
        self.commands.iter().filter_map(|command| match &command.primitive {
            Primitive::Text(text) => Some(text),
            _ => None,
        })
    }

    /// Text primitives of one layer in draw order.
    pub fn texts_in(&self, layer: CanvasLayerKind) -> impl Iterator<Item = &TextPrimitive> {
        self.primitives_in(layer).filter_map(|primitive| match primitive {
            Primitive::Text(text) => Some(text),
            _ => None,
        })
    }

    /// Serializes the frame to pretty JSON for regression snapshots.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize frame: {e}")))
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse frame: {e}")))
    }
}
