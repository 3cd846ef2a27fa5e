use crate::foundation::error::{LogoError, LogoResult};
use crate::text::font::LoadedFont;

/// Shaped single line of wordmark text.
///
/// The brush is unit because color is chosen per stamp at draw time.
pub(crate) type LineLayout = parley::Layout<()>;

/// Pixel extent of a laid-out line, rounded to whole pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineMetrics {
    pub width: i32,
    pub height: i32,
}

/// Wordmark lines shaped with a single font, ready for rasterization.
pub struct ShapedText {
    /// Each glyph run carries the face it was shaped with.
    pub(crate) lines: Vec<LineLayout>,
    /// Family name actually used for shaping.
    pub family: String,
}

impl ShapedText {
    /// Metrics of line `i`, if it exists.
    pub fn metrics(&self, i: usize) -> Option<LineMetrics> {
        self.lines.get(i).map(line_metrics)
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

impl std::fmt::Debug for ShapedText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShapedText")
            .field("lines", &self.lines.len())
            .field("family", &self.family)
            .finish()
    }
}

fn line_metrics(layout: &LineLayout) -> LineMetrics {
    LineMetrics {
        width: layout.width().round() as i32,
        height: layout.height().round() as i32,
    }
}

/// Stateful helper for building Parley layouts from raw font bytes.
pub(crate) struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<()>,
}

impl Default for TextLayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TextLayoutEngine {
    pub(crate) fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
        }
    }

    /// Register `font` and shape every line at `size_px` without wrapping.
    #[tracing::instrument(skip(self, lines, font), fields(lines = lines.len()))]
    pub(crate) fn shape_lines(
        &mut self,
        lines: &[String],
        font: &LoadedFont,
        size_px: f32,
    ) -> LogoResult<ShapedText> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(LogoError::validation(
                "text size_px must be finite and > 0",
            ));
        }

        let families = self
            .font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font.bytes.clone()), None);
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| LogoError::font("no font families registered from font bytes"))?;

        let family = match &font.family {
            Some(name) => name.clone(),
            None => self
                .font_ctx
                .collection
                .family_name(family_id)
                .ok_or_else(|| LogoError::font("registered font family has no name"))?
                .to_string(),
        };

        let mut out = Vec::with_capacity(lines.len());
        for text in lines {
            let mut builder = self
                .layout_ctx
                .ranged_builder(&mut self.font_ctx, text, 1.0, true);
            builder.push_default(parley::style::StyleProperty::FontStack(
                parley::style::FontStack::Source(std::borrow::Cow::Owned(family.clone())),
            ));
            builder.push_default(parley::style::StyleProperty::FontSize(size_px));

            let mut layout: LineLayout = builder.build(text);
            layout.break_all_lines(None);
            out.push(layout);
        }

        Ok(ShapedText { lines: out, family })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/layout.rs"]
mod tests;
