// File: crates/chart-core/src/primitive.rs
// Summary: Drawing-primitive tree and shape factories with pixel rounding.

/// Horizontal anchor for text nodes. Factories default to `Middle`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

/// Geometry of one drawable node.
///
/// `Group` is a sized root (an `<svg>` element for SVG backends), `Container`
/// a shapeless wrapper used to pack several roots side by side.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Circle { cx: f64, cy: f64, r: f64 },
    Rect { x: f64, y: f64, width: f64, height: f64 },
    Line { x1: f64, y1: f64, x2: f64, y2: f64 },
    Path { d: String },
    Polyline { points: Vec<(f64, f64)> },
    Polygon { points: Vec<(f64, f64)> },
    Text {
        x: f64,
        y: f64,
        content: String,
        anchor: TextAnchor,
        font_size: Option<f64>,
    },
    Group { width: Option<f64>, height: Option<f64> },
    Container,
}

/// One node of the output tree: a shape plus styling hooks and children.
///
/// Optional attributes are `Option`: absent is `None`, never a zero or empty
/// sentinel, so a coordinate of `0.0` is always a real, emitted value.
#[derive(Clone, Debug, PartialEq)]
pub struct Primitive {
    pub shape: Shape,
    pub class: Option<String>,
    pub style: Option<String>,
    /// Static hover tooltip (a `<title>` child for SVG backends).
    pub title: Option<String>,
    pub children: Vec<Primitive>,
}

impl Primitive {
    pub fn new(shape: Shape) -> Self {
        Self { shape, class: None, style: None, title: None, children: Vec::new() }
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the font size when the node is a text shape; no-op otherwise.
    pub fn font_size(mut self, size: f64) -> Self {
        if let Shape::Text { font_size, .. } = &mut self.shape {
            *font_size = Some(px(size));
        }
        self
    }

    pub fn push(&mut self, child: Primitive) {
        self.children.push(child);
    }

    /// Insert a child below all existing children (z-order bottom).
    pub fn insert_first(&mut self, child: Primitive) {
        self.children.insert(0, child);
    }
}

/// Round to the nearest integer pixel. Display primitives are snapped to the
/// pixel grid to avoid sub-pixel artifacts; non-finite input passes through.
#[inline]
pub fn px(v: f64) -> f64 {
    v.round()
}

pub fn circle(r: f64, cx: f64, cy: f64) -> Primitive {
    Primitive::new(Shape::Circle { cx: px(cx), cy: px(cy), r: px(r) })
}

pub fn rect(x: f64, y: f64, width: f64, height: f64) -> Primitive {
    Primitive::new(Shape::Rect { x: px(x), y: px(y), width: px(width), height: px(height) })
}

pub fn line(x1: f64, y1: f64, x2: f64, y2: f64) -> Primitive {
    Primitive::new(Shape::Line { x1: px(x1), y1: px(y1), x2: px(x2), y2: px(y2) })
}

pub fn path(d: impl Into<String>) -> Primitive {
    Primitive::new(Shape::Path { d: d.into() })
}

pub fn polyline(points: Vec<(f64, f64)>) -> Primitive {
    Primitive::new(Shape::Polyline { points: round_points(points) })
}

pub fn polygon(points: Vec<(f64, f64)>) -> Primitive {
    Primitive::new(Shape::Polygon { points: round_points(points) })
}

pub fn text(x: f64, y: f64, content: impl Into<String>) -> Primitive {
    Primitive::new(Shape::Text {
        x: px(x),
        y: px(y),
        content: content.into(),
        anchor: TextAnchor::Middle,
        font_size: None,
    })
}

/// Sized root node for one chart.
pub fn frame(width: f64, height: f64) -> Primitive {
    Primitive::new(Shape::Group { width: Some(px(width)), height: Some(px(height)) })
}

/// Shapeless wrapper packing several roots in input order.
pub fn container() -> Primitive {
    Primitive::new(Shape::Container)
}

fn round_points(points: Vec<(f64, f64)>) -> Vec<(f64, f64)> {
    points.into_iter().map(|(x, y)| (px(x), px(y))).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factories_round_to_nearest() {
        let c = circle(3.0, 10.4, 10.6);
        assert_eq!(c.shape, Shape::Circle { cx: 10.0, cy: 11.0, r: 3.0 });
    }

    #[test]
    fn zero_coordinate_is_kept() {
        let c = circle(3.0, 0.0, 10.0);
        match c.shape {
            Shape::Circle { cx, .. } => assert_eq!(cx, 0.0),
            _ => unreachable!(),
        }
    }

    #[test]
    fn text_defaults_to_middle_anchor() {
        match text(5.0, 5.0, "hi").shape {
            Shape::Text { anchor, font_size, .. } => {
                assert_eq!(anchor, TextAnchor::Middle);
                assert_eq!(font_size, None);
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn insert_first_goes_below_existing_children() {
        let mut root = frame(10.0, 10.0);
        root.push(circle(1.0, 0.0, 0.0));
        root.insert_first(path("M0 0"));
        assert!(matches!(root.children[0].shape, Shape::Path { .. }));
        assert!(matches!(root.children[1].shape, Shape::Circle { .. }));
    }
}
