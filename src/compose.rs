//! Layered composition of the logo into a [`DrawList`].
//!
//! Order matters: background, scanlines, glowing wordmark, circuit frame. Later layers
//! are drawn over earlier ones.

pub(crate) mod circuit;
pub(crate) mod wordmark;

use crate::config::LogoConfig;
use crate::foundation::core::Point;
use crate::render::plan::{DrawList, DrawOp};
use crate::text::layout::ShapedText;

/// Build the full display list for `cfg`.
///
/// Without shaped text the wordmark layer is omitted and everything else is unchanged.
#[tracing::instrument(skip_all)]
pub fn compose(cfg: &LogoConfig, text: Option<&ShapedText>) -> DrawList {
    let mut list = DrawList::new();

    list.push(DrawOp::FillRect {
        rect: cfg.canvas.rect(),
        color: cfg.background.opaque(),
    });
    push_scanlines(&mut list, cfg);

    match text.and_then(|t| t.metrics(0).map(|m| (t, m))) {
        Some((t, first)) => {
            let placement = wordmark::place_wordmark(
                cfg.canvas,
                first,
                t.line_count(),
                cfg.wordmark.line_spacing,
            );
            tracing::debug!(
                x = placement.x,
                width = first.width,
                height = first.height,
                "placed wordmark"
            );
            wordmark::push_wordmark(&mut list, cfg, &placement);
        }
        None => tracing::debug!("no shaped text, skipping wordmark"),
    }

    circuit::push_circuit_frame(&mut list, cfg.canvas, &cfg.frame, &cfg.palette);

    tracing::debug!(ops = list.len(), "composed display list");
    list
}

fn push_scanlines(list: &mut DrawList, cfg: &LogoConfig) {
    let color = cfg.scanlines.color.opaque();
    let w = cfg.canvas.width_f();
    for y in (0..cfg.canvas.height).step_by(cfg.scanlines.spacing.max(1) as usize) {
        let y = f64::from(y);
        list.push(DrawOp::Line {
            from: Point::new(0.0, y),
            to: Point::new(w, y),
            width: 1.0,
            color,
        });
    }
}

#[cfg(test)]
#[path = "../tests/unit/compose.rs"]
mod tests;
