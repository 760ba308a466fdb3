use std::f64::consts::{FRAC_PI_2, PI, TAU};
use std::fs::File;
use std::path::Path;

use cairo::{Context, Format, ImageSurface, LineCap, LineJoin};
use pango::FontDescription;
use tracing::debug;

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{
    ArcPrimitive, CirclePrimitive, Color, LinePrimitive, PolylinePrimitive, Primitive,
    RectPrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive, WedgePrimitive,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub lines_drawn: usize,
    pub rects_drawn: usize,
    pub arcs_drawn: usize,
    pub texts_drawn: usize,
}

/// Optional extension trait for renderers that can draw into an external Cairo
/// context (for example a GTK `DrawingArea` callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()>;
}

/// Cairo + Pango + PangoCairo raster backend.
///
/// This renderer supports two modes:
/// - offscreen image-surface rendering through `Renderer::render`, resizing
///   the surface when the frame viewport changes
/// - in-place rendering on an external Cairo context through
///   `CairoContextRenderer`
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        Ok(Self {
            surface: create_surface(width, height)?,
            last_stats: CairoRenderStats::default(),
        })
    }

    pub fn for_viewport(viewport: Viewport) -> ChartResult<Self> {
        let (width, height) = surface_size(viewport)?;
        Self::new(width, height)
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    /// Encodes the current surface as PNG.
    pub fn write_png(&self, path: impl AsRef<Path>) -> ChartResult<()> {
        let path = path.as_ref();
        let mut file = File::create(path).map_err(|err| {
            ChartError::InvalidData(format!("failed to create {}: {err}", path.display()))
        })?;
        self.surface.write_to_png(&mut file).map_err(|err| {
            ChartError::InvalidData(format!("failed to write png {}: {err}", path.display()))
        })
    }

    fn ensure_surface_matches(&mut self, viewport: Viewport) -> ChartResult<()> {
        let (width, height) = surface_size(viewport)?;
        if self.surface.width() != width || self.surface.height() != height {
            debug!(width, height, "resizing cairo surface");
            self.surface = create_surface(width, height)?;
        }
        Ok(())
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;

        apply_color(context, frame.background);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let mut stats = CairoRenderStats::default();
        for command in &frame.commands {
            match &command.primitive {
                Primitive::Line(line) => {
                    draw_line(context, *line)?;
                    stats.lines_drawn += 1;
                }
                Primitive::Polyline(polyline) => {
                    draw_polyline(context, polyline)?;
                    stats.lines_drawn += 1;
                }
                Primitive::Rect(rect) => {
                    draw_rect(context, *rect)?;
                    stats.rects_drawn += 1;
                }
                Primitive::Circle(circle) => {
                    draw_circle(context, *circle)?;
                    stats.arcs_drawn += 1;
                }
                Primitive::Arc(arc) => {
                    draw_arc(context, *arc)?;
                    stats.arcs_drawn += 1;
                }
                Primitive::Wedge(wedge) => {
                    draw_wedge(context, *wedge)?;
                    stats.arcs_drawn += 1;
                }
                Primitive::Text(text) => {
                    draw_text(context, text);
                    stats.texts_drawn += 1;
                }
            }
        }

        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        self.ensure_surface_matches(frame.viewport)?;
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()> {
        self.render_with_context(context, frame)
    }
}

fn surface_size(viewport: Viewport) -> ChartResult<(i32, i32)> {
    let width = i32::try_from(viewport.width).ok();
    let height = i32::try_from(viewport.height).ok();
    match (width, height) {
        (Some(width), Some(height)) => Ok((width, height)),
        _ => Err(ChartError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        }),
    }
}

fn create_surface(width: i32, height: i32) -> ChartResult<ImageSurface> {
    if width <= 0 || height <= 0 {
        return Err(ChartError::InvalidData(
            "cairo surface size must be > 0".to_owned(),
        ));
    }
    ImageSurface::create(Format::ARgb32, width, height)
        .map_err(|err| map_backend_error("failed to create cairo surface", err))
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn draw_line(context: &Context, line: LinePrimitive) -> ChartResult<()> {
    apply_color(context, line.color);
    context.set_line_width(line.stroke_width);
    context.move_to(line.x1, line.y1);
    context.line_to(line.x2, line.y2);
    context
        .stroke()
        .map_err(|err| map_backend_error("failed to stroke line", err))
}

fn draw_polyline(context: &Context, polyline: &PolylinePrimitive) -> ChartResult<()> {
    let Some((&(first_x, first_y), rest)) = polyline.points.split_first() else {
        return Ok(());
    };
    apply_color(context, polyline.color);
    context.set_line_width(polyline.stroke_width);
    context.set_line_join(LineJoin::Round);
    context.new_path();
    context.move_to(first_x, first_y);
    for &(x, y) in rest {
        context.line_to(x, y);
    }
    context
        .stroke()
        .map_err(|err| map_backend_error("failed to stroke polyline", err))
}

fn draw_rect(context: &Context, rect: RectPrimitive) -> ChartResult<()> {
    append_rect_path(context, rect);
    apply_color(context, rect.fill_color);
    if rect.border_width > 0.0 {
        context
            .fill_preserve()
            .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
        apply_color(context, rect.border_color);
        context.set_line_width(rect.border_width);
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke rectangle border", err))
    } else {
        context
            .fill()
            .map_err(|err| map_backend_error("failed to fill rectangle", err))
    }
}

fn draw_circle(context: &Context, circle: CirclePrimitive) -> ChartResult<()> {
    context.new_path();
    context.arc(circle.center_x, circle.center_y, circle.radius, 0.0, TAU);
    if let Some(fill) = circle.fill_color {
        apply_color(context, fill);
        context
            .fill_preserve()
            .map_err(|err| map_backend_error("failed to fill circle", err))?;
    }
    if let Some(stroke) = circle.stroke_color {
        apply_color(context, stroke);
        context.set_line_width(circle.stroke_width);
        context
            .stroke_preserve()
            .map_err(|err| map_backend_error("failed to stroke circle", err))?;
    }
    context.new_path();
    Ok(())
}

fn draw_arc(context: &Context, arc: ArcPrimitive) -> ChartResult<()> {
    if arc.sweep() <= 0.0 {
        return Ok(());
    }
    context.new_path();
    context.arc(
        arc.center_x,
        arc.center_y,
        arc.radius,
        arc.start_angle,
        arc.end_angle,
    );
    apply_color(context, arc.color);
    context.set_line_width(arc.stroke_width);
    context.set_line_cap(if arc.round_caps {
        LineCap::Round
    } else {
        LineCap::Butt
    });
    let result = context
        .stroke()
        .map_err(|err| map_backend_error("failed to stroke arc", err));
    context.set_line_cap(LineCap::Butt);
    result
}

fn draw_wedge(context: &Context, wedge: WedgePrimitive) -> ChartResult<()> {
    context.new_path();
    context.move_to(wedge.center_x, wedge.center_y);
    context.arc(
        wedge.center_x,
        wedge.center_y,
        wedge.radius,
        wedge.start_angle,
        wedge.end_angle,
    );
    context.close_path();
    apply_color(context, wedge.fill_color);
    context
        .fill_preserve()
        .map_err(|err| map_backend_error("failed to fill wedge", err))?;
    if wedge.border_width > 0.0 {
        apply_color(context, wedge.border_color);
        context.set_line_width(wedge.border_width);
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke wedge border", err))
    } else {
        context.new_path();
        Ok(())
    }
}

fn draw_text(context: &Context, text: &TextPrimitive) {
    let layout = pangocairo::functions::create_layout(context);
    let weight = if text.bold { " Bold" } else { "" };
    let font_description =
        FontDescription::from_string(&format!("Sans{weight} {}px", text.font_size_px));
    layout.set_font_description(Some(&font_description));
    layout.set_text(&text.text);

    let (text_width, text_height) = layout.pixel_size();
    let text_width = f64::from(text_width);
    let x = match text.h_align {
        TextHAlign::Left => text.x,
        TextHAlign::Center => text.x - text_width / 2.0,
        TextHAlign::Right => text.x - text_width,
    };
    let y = text.y - f64::from(text_height) / 2.0;

    apply_color(context, text.color);
    context.move_to(x, y);
    pangocairo::functions::show_layout(context, &layout);
}

fn append_rect_path(context: &Context, rect: RectPrimitive) {
    context.new_path();
    if rect.corner_radius <= 0.0 {
        context.rectangle(rect.x, rect.y, rect.width, rect.height);
        return;
    }

    let radius = rect
        .corner_radius
        .min(rect.width * 0.5)
        .min(rect.height * 0.5);
    let left = rect.x;
    let top = rect.y;
    let right = rect.x + rect.width;
    let bottom = rect.y + rect.height;

    context.new_sub_path();
    context.arc(right - radius, top + radius, radius, -FRAC_PI_2, 0.0);
    context.arc(right - radius, bottom - radius, radius, 0.0, FRAC_PI_2);
    context.arc(left + radius, bottom - radius, radius, FRAC_PI_2, PI);
    context.arc(left + radius, top + radius, radius, PI, PI + FRAC_PI_2);
    context.close_path();
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::InvalidData(format!("{prefix}: {err}"))
}
