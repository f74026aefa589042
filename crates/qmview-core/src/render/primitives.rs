use nalgebra::Point2;

/// How a shape is filled or stroked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paint {
    /// A fixed color, as a `#RRGGBB` string.
    Hex(&'static str),
    /// Whatever foreground color the consuming surface is using.
    Foreground,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub paint: Paint,
    pub width: f64,
}

impl Stroke {
    pub fn foreground(width: f64) -> Self {
        Self {
            paint: Paint::Foreground,
            width,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Circle {
        center: Point2<f64>,
        radius: f64,
        fill: Paint,
        stroke: Option<Stroke>,
        opacity: f64,
    },
    Line {
        from: Point2<f64>,
        to: Point2<f64>,
        stroke: Stroke,
        opacity: f64,
    },
    /// Axis-aligned rectangle; `origin` is the top-left corner.
    Rect {
        origin: Point2<f64>,
        width: f64,
        height: f64,
        corner_radius: f64,
        fill: Paint,
        stroke: Option<Stroke>,
    },
    Text {
        position: Point2<f64>,
        content: String,
        font_size: f64,
        bold: bool,
        fill: Paint,
        anchor: TextAnchor,
    },
    /// Quadratic Bézier from `from` to `to` bent towards `control`.
    QuadPath {
        from: Point2<f64>,
        control: Point2<f64>,
        to: Point2<f64>,
        stroke: Stroke,
    },
}

impl Primitive {
    pub fn line(from: Point2<f64>, to: Point2<f64>, stroke: Stroke) -> Self {
        Primitive::Line {
            from,
            to,
            stroke,
            opacity: 1.0,
        }
    }

    pub fn label(position: Point2<f64>, content: impl Into<String>, font_size: f64) -> Self {
        Primitive::Text {
            position,
            content: content.into(),
            font_size,
            bold: false,
            fill: Paint::Foreground,
            anchor: TextAnchor::Middle,
        }
    }

    pub fn kind(&self) -> PrimitiveKind {
        match self {
            Primitive::Circle { .. } => PrimitiveKind::Circle,
            Primitive::Line { .. } => PrimitiveKind::Line,
            Primitive::Rect { .. } => PrimitiveKind::Rect,
            Primitive::Text { .. } => PrimitiveKind::Text,
            Primitive::QuadPath { .. } => PrimitiveKind::QuadPath,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Circle,
    Line,
    Rect,
    Text,
    QuadPath,
}

/// The visible canvas region, in user units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBox {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewBox {
    pub fn new(min_x: f64, min_y: f64, width: f64, height: f64) -> Self {
        Self {
            min_x,
            min_y,
            width,
            height,
        }
    }
}

/// Primitives in paint order (later ones are drawn on top).
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub view_box: ViewBox,
    primitives: Vec<Primitive>,
}

impl Scene {
    pub fn new(view_box: ViewBox) -> Self {
        Self {
            view_box,
            primitives: Vec::new(),
        }
    }

    pub fn push(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    pub fn count(&self, kind: PrimitiveKind) -> usize {
        self.primitives.iter().filter(|p| p.kind() == kind).count()
    }
}

impl Extend<Primitive> for Scene {
    fn extend<I: IntoIterator<Item = Primitive>>(&mut self, iter: I) {
        self.primitives.extend(iter);
    }
}
