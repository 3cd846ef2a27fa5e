use super::*;

const CANVAS: Canvas = Canvas {
    width: 1600,
    height: 600,
};

fn default_frame() -> DrawList {
    let mut list = DrawList::new();
    push_circuit_frame(
        &mut list,
        CANVAS,
        &FrameStyle::default(),
        &Palette::default(),
    );
    list
}

#[test]
fn layout_anchors_follow_canvas() {
    let l = FrameLayout::new(CANVAS, &FrameStyle::default());
    assert_eq!((l.left_x, l.right_x), (100.0, 1500.0));
    assert_eq!((l.top_y, l.bottom_y), (120.0, 480.0));
    assert_eq!((l.trace_top_y, l.trace_bottom_y), (90.0, 510.0));
    assert_eq!(l.corners()[3], Point::new(1500.0, 510.0));
}

#[test]
fn six_branches_per_rail() {
    let style = FrameStyle::default();
    let l = FrameLayout::new(CANVAS, &style);
    assert_eq!(
        branch_ys(&l, &style),
        vec![160.0, 220.0, 280.0, 340.0, 400.0, 460.0]
    );
}

#[test]
fn twenty_four_trace_positions() {
    let xs = trace_xs(CANVAS, &FrameStyle::default());
    assert_eq!(xs.len(), 24);
    assert_eq!(xs[0], 80.0);
    assert_eq!(xs[23], 1460.0);
}

#[test]
fn default_frame_op_counts() {
    let list = default_frame();
    let palette = Palette::default();
    let accent = palette.accent.opaque();

    let lines = list
        .iter()
        .filter(|op| matches!(op, DrawOp::Line { .. }))
        .count();
    // rails 2 + branches 12 + dashes 48 + connectors 4
    assert_eq!(lines, 66);

    let dots = list
        .iter()
        .filter(|op| matches!(op, DrawOp::FillEllipse { color, .. } if *color == accent))
        .count();
    assert_eq!(dots, 12);

    let trace_rings = list
        .iter()
        .filter(|op| matches!(op, DrawOp::StrokeEllipse { color, .. } if *color == accent))
        .count();
    assert_eq!(trace_rings, 16);

    let magenta = list
        .iter()
        .filter(|op| match op {
            DrawOp::FillEllipse { color, .. } | DrawOp::StrokeEllipse { color, .. } => {
                *color == palette.highlight.opaque()
            }
            _ => false,
        })
        .count();
    assert_eq!(magenta, 8);
}

#[test]
fn branch_terminals_sit_at_stub_tips() {
    let list = default_frame();
    let first_dot = list
        .iter()
        .find_map(|op| match op {
            DrawOp::FillEllipse { bounds, .. } => Some(*bounds),
            _ => None,
        })
        .unwrap();
    assert_eq!(first_dot, Rect::new(75.0, 156.0, 85.0, 164.0));
}

#[test]
fn accent_nodes_are_drawn_last() {
    let list = default_frame();
    let tail = &list.ops[list.len() - 2..];
    assert_eq!(
        tail[0],
        DrawOp::FillEllipse {
            bounds: Rect::new(1490.0, 500.0, 1510.0, 520.0),
            color: Palette::default().highlight.opaque(),
        }
    );
    assert_eq!(
        tail[1],
        DrawOp::StrokeEllipse {
            bounds: Rect::new(1485.0, 495.0, 1515.0, 525.0),
            width: 2.0,
            color: Palette::default().highlight.opaque(),
        }
    );
}

#[test]
fn dashes_span_one_spacing() {
    let list = default_frame();
    let first_dash = list
        .iter()
        .find_map(|op| match op {
            DrawOp::Line { from, to, width, .. } if from.y == 90.0 && to.y == 90.0 => {
                Some((*from, *to, *width))
            }
            _ => None,
        })
        .unwrap();
    assert_eq!(
        first_dash,
        (Point::new(50.0, 90.0), Point::new(110.0, 90.0), 2.0)
    );
}

#[test]
fn stepped_stops_below_end() {
    assert_eq!(stepped(0.0, 3.0, 1.0), vec![0.0, 1.0, 2.0]);
    assert_eq!(stepped(0.0, 3.5, 1.0), vec![0.0, 1.0, 2.0, 3.0]);
    assert!(stepped(5.0, 5.0, 1.0).is_empty());
    assert!(stepped(0.0, 5.0, 0.0).is_empty());
    assert!(stepped(0.0, 5.0, f64::NAN).is_empty());
}

#[test]
fn stepped_terminates_on_steps_below_precision() {
    let ys = stepped(160.0, 480.0, 1e-20);
    assert_eq!(ys.len(), MAX_STEPS);
    assert!(ys.iter().all(|&y| y == 160.0));
}
