use super::*;

use crate::config::{CYAN, DEFAULT_FONT_PATH};
use crate::foundation::core::Rgb8;
use crate::text::font::resolve_font;
use crate::text::layout::TextLayoutEngine;

fn small_canvas() -> Canvas {
    Canvas {
        width: 32,
        height: 16,
    }
}

#[test]
fn horizontal_line_covers_inclusive_endpoints() {
    let r = axis_aligned_line_rect(Point::new(0.0, 3.0), Point::new(10.0, 3.0), 1.0).unwrap();
    assert_eq!(r, Rect::new(0.0, 3.0, 11.0, 4.0));

    let r = axis_aligned_line_rect(Point::new(10.0, 90.0), Point::new(4.0, 90.0), 2.0).unwrap();
    assert_eq!(r, Rect::new(4.0, 89.0, 11.0, 91.0));
}

#[test]
fn vertical_line_centers_odd_widths() {
    let r =
        axis_aligned_line_rect(Point::new(100.0, 120.0), Point::new(100.0, 480.0), 3.0).unwrap();
    assert_eq!(r, Rect::new(99.0, 120.0, 102.0, 481.0));
}

#[test]
fn diagonal_lines_are_not_axis_aligned() {
    assert!(axis_aligned_line_rect(Point::new(0.0, 0.0), Point::new(5.0, 5.0), 1.0).is_none());
}

#[test]
fn premul_readback_drops_alpha() {
    let canvas = Canvas {
        width: 3,
        height: 1,
    };
    let src = [10, 20, 30, 255, 0, 0, 0, 0, 64, 32, 0, 128];
    let img = premul_rgba_to_rgb(&src, canvas).unwrap();
    assert_eq!(img.as_raw(), &vec![10, 20, 30, 0, 0, 0, 128, 64, 0]);
}

#[test]
fn premul_readback_checks_length() {
    let canvas = Canvas {
        width: 2,
        height: 2,
    };
    assert!(premul_rgba_to_rgb(&[0u8; 12], canvas).is_err());
}

#[test]
fn backend_rejects_oversized_canvas() {
    let canvas = Canvas {
        width: 100_000,
        height: 1,
    };
    assert!(CpuBackend::new(canvas).is_err());
}

#[test]
fn fills_and_lines_land_on_exact_pixels() {
    let canvas = small_canvas();
    let bg = Rgb8(15, 20, 35);
    let scan = Rgb8(20, 25, 40);

    let mut list = DrawList::new();
    list.push(DrawOp::FillRect {
        rect: canvas.rect(),
        color: bg.opaque(),
    });
    list.push(DrawOp::Line {
        from: Point::new(0.0, 3.0),
        to: Point::new(32.0, 3.0),
        width: 1.0,
        color: scan.opaque(),
    });

    let mut backend = CpuBackend::new(canvas).unwrap();
    let img = backend.render(&list, None).unwrap();

    assert_eq!(img.dimensions(), (32, 16));
    assert_eq!(img.get_pixel(0, 2).0, [15, 20, 35]);
    assert_eq!(img.get_pixel(0, 3).0, [20, 25, 40]);
    assert_eq!(img.get_pixel(31, 3).0, [20, 25, 40]);
    assert_eq!(img.get_pixel(5, 4).0, [15, 20, 35]);
}

#[test]
fn filled_ellipse_paints_its_center() {
    let canvas = small_canvas();
    let mut list = DrawList::new();
    list.push(DrawOp::FillRect {
        rect: canvas.rect(),
        color: Rgb8(0, 0, 0).opaque(),
    });
    list.push(DrawOp::FillEllipse {
        bounds: Rect::new(6.0, 3.0, 16.0, 13.0),
        color: Rgb8(255, 0, 150).opaque(),
    });

    let img = CpuBackend::new(canvas).unwrap().render(&list, None).unwrap();
    assert_eq!(img.get_pixel(11, 8).0, [255, 0, 150]);
    assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0]);
    assert_eq!(img.get_pixel(30, 8).0, [0, 0, 0]);
}

#[test]
fn ring_leaves_its_center_untouched() {
    let canvas = small_canvas();
    let mut list = DrawList::new();
    list.push(DrawOp::FillRect {
        rect: canvas.rect(),
        color: Rgb8(0, 0, 0).opaque(),
    });
    list.push(DrawOp::StrokeEllipse {
        bounds: Rect::new(1.0, 1.0, 14.0, 14.0),
        width: 2.0,
        color: Rgb8(0, 255, 200).opaque(),
    });

    let img = CpuBackend::new(canvas).unwrap().render(&list, None).unwrap();
    assert_eq!(img.get_pixel(7, 7).0, [0, 0, 0]);
    assert_ne!(img.get_pixel(7, 1).0, [0, 0, 0]);
}

#[test]
fn text_without_shaped_text_is_an_error() {
    let mut list = DrawList::new();
    list.push(DrawOp::Text {
        line: 0,
        origin: Point::new(0.0, 0.0),
        color: Rgb8(0, 255, 200).opaque(),
    });
    let err = CpuBackend::new(small_canvas())
        .unwrap()
        .render(&list, None)
        .unwrap_err();
    assert!(matches!(err, LogoError::Render(_)));
}

#[test]
fn backend_is_reusable_across_renders() {
    let canvas = small_canvas();
    let mut list = DrawList::new();
    list.push(DrawOp::FillRect {
        rect: canvas.rect(),
        color: Rgb8(1, 2, 3).opaque(),
    });
    let mut backend = CpuBackend::new(canvas).unwrap();
    let a = backend.render(&list, None).unwrap();
    let b = backend.render(&list, None).unwrap();
    assert_eq!(a, b);
}

fn shaped_sample() -> Option<ShapedText> {
    // Hosts without any font have nothing to shape with.
    let font = resolve_font(std::path::Path::new(DEFAULT_FONT_PATH)).font?;
    TextLayoutEngine::new()
        .shape_lines(&["HH".to_string()], &font, 64.0)
        .ok()
}

fn render_sample(text: &ShapedText, color: Rgba8) -> RgbImage {
    let canvas = Canvas {
        width: 160,
        height: 96,
    };
    let mut list = DrawList::new();
    list.push(DrawOp::FillRect {
        rect: canvas.rect(),
        color: Rgb8(0, 0, 0).opaque(),
    });
    list.push(DrawOp::Text {
        line: 0,
        origin: Point::new(8.0, 8.0),
        color,
    });
    CpuBackend::new(canvas)
        .unwrap()
        .render(&list, Some(text))
        .unwrap()
}

#[test]
fn crisp_text_paints_inside_its_line_box() {
    let Some(text) = shaped_sample() else {
        return;
    };
    let m = text.metrics(0).unwrap();
    let img = render_sample(&text, CYAN.opaque());

    let (x_end, y_end) = (8 + m.width as u32 + 2, 8 + m.height as u32 + 2);
    let mut solid = 0;
    for (x, y, px) in img.enumerate_pixels() {
        if px.0 == [0, 0, 0] {
            continue;
        }
        assert!(
            (6..x_end).contains(&x) && (6..y_end).contains(&y),
            "ink at ({x}, {y}) outside the line box"
        );
        if px.0 == [0, 255, 200] {
            solid += 1;
        }
    }
    assert!(solid > 0, "no fully covered cyan pixel");
    assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0]);
}

#[test]
fn glow_stamp_blends_with_the_background() {
    let Some(text) = shaped_sample() else {
        return;
    };
    let img = render_sample(&text, Rgba8::new(0, 80, 80, 100));

    let inked: Vec<[u8; 3]> = img
        .pixels()
        .map(|p| p.0)
        .filter(|&p| p != [0, 0, 0])
        .collect();
    assert!(!inked.is_empty(), "glow stamp painted nothing");
    for p in inked {
        assert_eq!(p[0], 0);
        assert!(p[1] < 80 && p[2] < 80, "glow pixel {p:?} is not blended");
    }
}
