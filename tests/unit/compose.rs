use super::*;

use crate::foundation::core::Canvas;

#[test]
fn background_then_scanlines_without_text() {
    let cfg = LogoConfig::default();
    let list = compose(&cfg, None);

    assert_eq!(
        list.ops[0],
        DrawOp::FillRect {
            rect: cfg.canvas.rect(),
            color: cfg.background.opaque(),
        }
    );

    // 0, 3, ..., 597
    let scanlines = &list.ops[1..201];
    for (i, op) in scanlines.iter().enumerate() {
        let y = (i * 3) as f64;
        assert_eq!(
            *op,
            DrawOp::Line {
                from: Point::new(0.0, y),
                to: Point::new(1600.0, y),
                width: 1.0,
                color: cfg.scanlines.color.opaque(),
            }
        );
    }
    assert_eq!(list.text_ops(), 0);
}

#[test]
fn missing_text_only_drops_the_wordmark() {
    let cfg = LogoConfig::default();
    let list = compose(&cfg, None);
    // background 1 + scanlines 200 + frame 66 lines, 12 dots, 16 rings, 8 accents
    assert_eq!(list.len(), 1 + 200 + 66 + 12 + 16 + 8);
}

#[test]
fn scanline_count_follows_height() {
    let mut cfg = LogoConfig::default();
    cfg.canvas = Canvas {
        width: 400,
        height: 10,
    };
    cfg.scanlines.spacing = 4;
    let list = compose(&cfg, None);
    let scan_color = cfg.scanlines.color.opaque();
    let scan = list
        .iter()
        .filter(|op| {
            matches!(op, DrawOp::Line { width, color, .. } if *width == 1.0 && *color == scan_color)
        })
        .count();
    assert_eq!(scan, 3);
}
