use crate::foundation::core::{Point, Rect, Rgba8};

/// One drawing instruction, applied over everything drawn before it.
///
/// Coordinates follow raster conventions: integer positions address pixel corners, and
/// `Line` endpoints are pixel positions the way a raster line tool takes them.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// Solid axis-aligned rectangle.
    FillRect { rect: Rect, color: Rgba8 },
    /// Straight line of the given stroke width.
    Line {
        from: Point,
        to: Point,
        width: f64,
        color: Rgba8,
    },
    /// Filled ellipse inscribed in inclusive pixel bounds.
    FillEllipse { bounds: Rect, color: Rgba8 },
    /// Ellipse outline drawn inside inclusive pixel bounds.
    StrokeEllipse {
        bounds: Rect,
        width: f64,
        color: Rgba8,
    },
    /// Wordmark line `line` with its top-left corner at `origin`.
    Text {
        line: usize,
        origin: Point,
        color: Rgba8,
    },
}

/// Ordered display list for a single image.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DrawList {
    pub ops: Vec<DrawOp>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, op: DrawOp) {
        self.ops.push(op);
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DrawOp> {
        self.ops.iter()
    }

    /// Number of text stamps in the list.
    pub fn text_ops(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Text { .. }))
            .count()
    }
}

impl Extend<DrawOp> for DrawList {
    fn extend<T: IntoIterator<Item = DrawOp>>(&mut self, iter: T) {
        self.ops.extend(iter);
    }
}

impl<'a> IntoIterator for &'a DrawList {
    type Item = &'a DrawOp;
    type IntoIter = std::slice::Iter<'a, DrawOp>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}
