use crate::config::{GlowStyle, LogoConfig};
use crate::foundation::core::{Canvas, Point};
use crate::render::plan::{DrawList, DrawOp};
use crate::text::layout::LineMetrics;

/// Centering reserves five line slots plus one gap, whatever the line count.
const CENTERING_LINE_SLOTS: i64 = 5;
const CENTERING_GAPS: i64 = 1;

/// Where each wordmark line lands on the canvas.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordmarkPlacement {
    /// Left edge shared by every line.
    pub x: i32,
    /// Top edge of each line.
    pub line_ys: Vec<i32>,
    /// Vertical gap between consecutive lines.
    pub spacing: i32,
}

/// Center a block of `line_count` lines using the first line's measured metrics.
///
/// Intermediate math runs in `i64` and every coordinate saturates to the `i32` range.
pub fn place_wordmark(
    canvas: Canvas,
    first_line: LineMetrics,
    line_count: usize,
    spacing_ratio: f32,
) -> WordmarkPlacement {
    let line_height = i64::from(first_line.height);
    let spacing = (first_line.height as f32 * spacing_ratio).floor() as i64;
    let total_height = line_height
        .saturating_mul(CENTERING_LINE_SLOTS)
        .saturating_add(spacing.saturating_mul(CENTERING_GAPS));

    let x = (i64::from(canvas.width) - i64::from(first_line.width)).div_euclid(2);
    let y = i64::from(canvas.height)
        .saturating_sub(total_height)
        .div_euclid(2);

    let advance = line_height.saturating_add(spacing);
    let line_ys = (0..line_count as i64)
        .map(|i| saturate_i32(y.saturating_add(i.saturating_mul(advance))))
        .collect();

    WordmarkPlacement {
        x: saturate_i32(x),
        line_ys,
        spacing: saturate_i32(spacing),
    }
}

fn saturate_i32(v: i64) -> i32 {
    v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Glow stamps for every line, then the crisp text on top.
pub fn push_wordmark(list: &mut DrawList, cfg: &LogoConfig, placement: &WordmarkPlacement) {
    push_glow(list, &cfg.glow, placement);

    let crisp = cfg.palette.accent.opaque();
    for (line, &y) in placement.line_ys.iter().enumerate() {
        list.push(DrawOp::Text {
            line,
            origin: Point::new(f64::from(placement.x), f64::from(y)),
            color: crisp,
        });
    }
}

fn push_glow(list: &mut DrawList, glow: &GlowStyle, placement: &WordmarkPlacement) {
    let offsets = glow.offsets();
    for (line, &y) in placement.line_ys.iter().enumerate() {
        for &(dx, dy) in &offsets {
            list.push(DrawOp::Text {
                line,
                origin: Point::new(f64::from(placement.x + dx), f64::from(y + dy)),
                color: glow.color,
            });
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/wordmark.rs"]
mod tests;
