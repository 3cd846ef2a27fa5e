use crate::config::{FrameStyle, Palette};
use crate::foundation::core::{Canvas, Point, Rect, Rgba8};
use crate::render::plan::{DrawList, DrawOp};

/// Resolved anchor coordinates of the circuit border.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameLayout {
    pub left_x: f64,
    pub right_x: f64,
    /// Upper end of both rails.
    pub top_y: f64,
    /// Lower end of both rails.
    pub bottom_y: f64,
    pub trace_top_y: f64,
    pub trace_bottom_y: f64,
}

impl FrameLayout {
    pub fn new(canvas: Canvas, style: &FrameStyle) -> Self {
        let (w, h) = (canvas.width_f(), canvas.height_f());
        Self {
            left_x: style.rail_inset_x,
            right_x: w - style.rail_inset_x,
            top_y: style.rail_inset_y,
            bottom_y: h - style.rail_inset_y,
            trace_top_y: style.trace_inset_y,
            trace_bottom_y: h - style.trace_inset_y,
        }
    }

    /// Corner nodes where the rails meet the trace lines.
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.left_x, self.trace_top_y),
            Point::new(self.right_x, self.trace_top_y),
            Point::new(self.left_x, self.trace_bottom_y),
            Point::new(self.right_x, self.trace_bottom_y),
        ]
    }
}

/// Y coordinates of the branch stubs along each rail.
pub fn branch_ys(layout: &FrameLayout, style: &FrameStyle) -> Vec<f64> {
    stepped(layout.top_y + style.branch_offset, layout.bottom_y, style.branch_step)
}

/// X centers of the dashes in each trace line.
pub fn trace_xs(canvas: Canvas, style: &FrameStyle) -> Vec<f64> {
    stepped(
        style.trace_inset_x,
        canvas.width_f() - style.trace_inset_x,
        style.trace_spacing,
    )
}

/// Upper bound on the elements a single row or column of the frame may hold.
const MAX_STEPS: usize = 1 << 16;

/// `start, start + step, ...` strictly below `end`, at most [`MAX_STEPS`] values.
fn stepped(start: f64, end: f64, step: f64) -> Vec<f64> {
    if step.is_nan() || step <= 0.0 || start >= end {
        return Vec::new();
    }
    let span = ((end - start) / step).ceil();
    let count = if span.is_finite() {
        (span as usize).min(MAX_STEPS)
    } else {
        MAX_STEPS
    };
    (0..count)
        .map(|i| start + i as f64 * step)
        .take_while(|&v| v < end)
        .collect()
}

/// Rails, branches, traces, corner connectors and accent nodes, in drawing order.
pub fn push_circuit_frame(
    list: &mut DrawList,
    canvas: Canvas,
    style: &FrameStyle,
    palette: &Palette,
) {
    let layout = FrameLayout::new(canvas, style);
    let dim = palette.accent_dim.opaque();
    let accent = palette.accent.opaque();

    for x in [layout.left_x, layout.right_x] {
        line(list, (x, layout.top_y), (x, layout.bottom_y), style.rail_width, dim);
    }

    for y in branch_ys(&layout, style) {
        for (rail_x, dir) in [(layout.left_x, -1.0), (layout.right_x, 1.0)] {
            let tip = rail_x + dir * style.branch_len;
            line(list, (rail_x, y), (tip, y), style.branch_width, accent);
            list.push(DrawOp::FillEllipse {
                bounds: Rect::new(
                    tip - style.terminal_rx,
                    y - style.terminal_ry,
                    tip + style.terminal_rx,
                    y + style.terminal_ry,
                ),
                color: accent,
            });
        }
    }

    let xs = trace_xs(canvas, style);
    for trace_y in [layout.trace_top_y, layout.trace_bottom_y] {
        push_trace(list, &xs, trace_y, style, accent);
    }

    let connectors = [
        (layout.left_x, layout.trace_top_y, layout.top_y),
        (layout.right_x, layout.trace_top_y, layout.top_y),
        (layout.left_x, layout.bottom_y, layout.trace_bottom_y),
        (layout.right_x, layout.bottom_y, layout.trace_bottom_y),
    ];
    for (x, y0, y1) in connectors {
        line(list, (x, y0), (x, y1), style.rail_width, dim);
    }

    let highlight = palette.highlight.opaque();
    for c in layout.corners() {
        list.push(DrawOp::FillEllipse {
            bounds: square(c, style.accent_inner_radius),
            color: highlight,
        });
        list.push(DrawOp::StrokeEllipse {
            bounds: square(c, style.accent_outer_radius),
            width: style.accent_ring_width,
            color: highlight,
        });
    }
}

fn push_trace(list: &mut DrawList, xs: &[f64], y: f64, style: &FrameStyle, color: Rgba8) {
    let half = (style.trace_spacing / 2.0).floor();
    for (i, &x) in xs.iter().enumerate() {
        line(list, (x - half, y), (x + half, y), style.trace_width, color);
        if i % style.trace_node_every == 0 {
            list.push(DrawOp::StrokeEllipse {
                bounds: square(Point::new(x, y), style.trace_node_radius),
                width: style.trace_node_width,
                color,
            });
        }
    }
}

fn line(list: &mut DrawList, from: (f64, f64), to: (f64, f64), width: f64, color: Rgba8) {
    list.push(DrawOp::Line {
        from: from.into(),
        to: to.into(),
        width,
        color,
    });
}

fn square(center: Point, r: f64) -> Rect {
    Rect::new(center.x - r, center.y - r, center.x + r, center.y + r)
}

#[cfg(test)]
#[path = "../../tests/unit/compose/circuit.rs"]
mod tests;
