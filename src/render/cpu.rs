use image::RgbImage;
use vello_cpu::kurbo::Shape as _;

use crate::foundation::core::{Canvas, Point, Rect, Rgba8};
use crate::foundation::error::{LogoError, LogoResult};
use crate::render::plan::{DrawList, DrawOp};
use crate::text::layout::ShapedText;

/// Tolerance used when flattening ellipses into paths.
const ELLIPSE_TOLERANCE: f64 = 0.05;

/// CPU rasterizer powered by `vello_cpu`.
pub struct CpuBackend {
    canvas: Canvas,
    width: u16,
    height: u16,
    ctx: Option<vello_cpu::RenderContext>,
}

impl CpuBackend {
    pub fn new(canvas: Canvas) -> LogoResult<Self> {
        let width: u16 = canvas
            .width
            .try_into()
            .map_err(|_| LogoError::render("canvas width exceeds u16"))?;
        let height: u16 = canvas
            .height
            .try_into()
            .map_err(|_| LogoError::render("canvas height exceeds u16"))?;
        if width == 0 || height == 0 {
            return Err(LogoError::render("canvas must be non-empty"));
        }
        Ok(Self {
            canvas,
            width,
            height,
            ctx: None,
        })
    }

    /// Execute `list` in order and read back an opaque RGB canvas.
    ///
    /// `text` must be provided whenever `list` contains [`DrawOp::Text`].
    #[tracing::instrument(skip_all, fields(ops = list.len()))]
    pub fn render(&mut self, list: &DrawList, text: Option<&ShapedText>) -> LogoResult<RgbImage> {
        let mut ctx = match self.ctx.take() {
            Some(ctx) => ctx,
            None => vello_cpu::RenderContext::new(self.width, self.height),
        };
        ctx.reset();

        for op in list {
            draw_op(&mut ctx, op, text)?;
        }

        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        ctx.flush();
        ctx.render_to_pixmap(&mut pixmap);
        self.ctx = Some(ctx);

        premul_rgba_to_rgb(pixmap.data_as_u8_slice(), self.canvas)
    }
}

fn draw_op(
    ctx: &mut vello_cpu::RenderContext,
    op: &DrawOp,
    text: Option<&ShapedText>,
) -> LogoResult<()> {
    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
    match op {
        DrawOp::FillRect { rect, color } => {
            ctx.set_paint(paint(*color));
            ctx.fill_rect(&rect_to_cpu(*rect));
        }
        DrawOp::Line {
            from,
            to,
            width,
            color,
        } => {
            ctx.set_paint(paint(*color));
            match axis_aligned_line_rect(*from, *to, *width) {
                Some(r) => ctx.fill_rect(&rect_to_cpu(r)),
                None => {
                    let mut p = vello_cpu::kurbo::BezPath::new();
                    p.move_to(vello_cpu::kurbo::Point::new(from.x, from.y));
                    p.line_to(vello_cpu::kurbo::Point::new(to.x, to.y));
                    ctx.set_stroke(
                        vello_cpu::kurbo::Stroke::new(*width)
                            .with_caps(vello_cpu::kurbo::Cap::Butt),
                    );
                    ctx.stroke_path(&p);
                }
            }
        }
        DrawOp::FillEllipse { bounds, color } => {
            let e = vello_cpu::kurbo::Ellipse::from_rect(rect_to_cpu(pixel_bounds(*bounds)));
            ctx.set_paint(paint(*color));
            ctx.fill_path(&e.to_path(ELLIPSE_TOLERANCE));
        }
        DrawOp::StrokeEllipse {
            bounds,
            width,
            color,
        } => {
            // Outline stays inside the bounds.
            let inner = pixel_bounds(*bounds).inset(-width / 2.0);
            if inner.width() <= 0.0 || inner.height() <= 0.0 {
                return Ok(());
            }
            let e = vello_cpu::kurbo::Ellipse::from_rect(rect_to_cpu(inner));
            ctx.set_paint(paint(*color));
            ctx.set_stroke(vello_cpu::kurbo::Stroke::new(*width));
            ctx.stroke_path(&e.to_path(ELLIPSE_TOLERANCE));
        }
        DrawOp::Text {
            line,
            origin,
            color,
        } => {
            let text =
                text.ok_or_else(|| LogoError::render("text op without shaped text"))?;
            let layout = text.lines.get(*line).ok_or_else(|| {
                LogoError::render(format!("text op references missing line {line}"))
            })?;
            ctx.set_transform(vello_cpu::kurbo::Affine::translate((origin.x, origin.y)));
            ctx.set_paint(paint(*color));
            for l in layout.lines() {
                for item in l.items() {
                    let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                        continue;
                    };
                    let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                        id: g.id,
                        x: g.x,
                        y: g.y,
                    });
                    let shaped = run.run();
                    ctx.glyph_run(shaped.font())
                        .font_size(shaped.font_size())
                        .fill_glyphs(glyphs);
                }
            }
        }
    }
    Ok(())
}

/// Pixel rectangle covered by an axis-aligned raster line.
///
/// Endpoints are inclusive. A line of width `w` at row `y` covers rows
/// `y - w/2 .. y - w/2 + w` (integer division), and likewise for columns.
pub(crate) fn axis_aligned_line_rect(from: Point, to: Point, width: f64) -> Option<Rect> {
    let w = width.max(1.0).round();
    let back = (w / 2.0).floor();
    if from.y == to.y {
        let (x0, x1) = (from.x.min(to.x), from.x.max(to.x));
        let y0 = from.y - back;
        Some(Rect::new(x0, y0, x1 + 1.0, y0 + w))
    } else if from.x == to.x {
        let (y0, y1) = (from.y.min(to.y), from.y.max(to.y));
        let x0 = from.x - back;
        Some(Rect::new(x0, y0, x0 + w, y1 + 1.0))
    } else {
        None
    }
}

/// Inclusive pixel bounds to the covered area.
fn pixel_bounds(r: Rect) -> Rect {
    Rect::new(r.x0, r.y0, r.x1 + 1.0, r.y1 + 1.0)
}

fn paint(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn rect_to_cpu(r: Rect) -> vello_cpu::kurbo::Rect {
    vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1)
}

/// Drop alpha from a premultiplied RGBA8 buffer.
pub(crate) fn premul_rgba_to_rgb(src: &[u8], canvas: Canvas) -> LogoResult<RgbImage> {
    let px = (canvas.width as usize) * (canvas.height as usize);
    if src.len() != px * 4 {
        return Err(LogoError::render(format!(
            "pixmap holds {} bytes, expected {}",
            src.len(),
            px * 4
        )));
    }

    let mut rgb = Vec::with_capacity(px * 3);
    for p in src.chunks_exact(4) {
        let a = u16::from(p[3]);
        match a {
            0 => rgb.extend_from_slice(&[0, 0, 0]),
            255 => rgb.extend_from_slice(&p[..3]),
            _ => {
                for &c in &p[..3] {
                    let v = (u16::from(c) * 255 + a / 2) / a;
                    rgb.push(v.min(255) as u8);
                }
            }
        }
    }

    RgbImage::from_raw(canvas.width, canvas.height, rgb)
        .ok_or_else(|| LogoError::render("rgb buffer does not match canvas size"))
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
