use super::primitives::{Paint, Primitive, Scene, Stroke, TextAnchor};
use std::fmt;
use std::io::{self, Write};

const FONT_FAMILY: &str = "DejaVu Sans, Arial, sans-serif";

/// Serializes drawn scenes as standalone SVG documents.
#[derive(Debug, Clone)]
pub struct SvgWriter {
    /// Color substituted for [`Paint::Foreground`].
    pub foreground: String,
    /// Optional background fill covering the whole view box.
    pub background: Option<String>,
}

impl Default for SvgWriter {
    fn default() -> Self {
        Self {
            foreground: "#1F2937".to_string(),
            background: None,
        }
    }
}

impl SvgWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_background(mut self, color: impl Into<String>) -> Self {
        self.background = Some(color.into());
        self
    }

    pub fn render(&self, scene: &Scene) -> String {
        SvgDocument {
            writer: self,
            scene,
        }
        .to_string()
    }

    pub fn write_to(&self, scene: &Scene, out: &mut impl Write) -> io::Result<()> {
        write!(
            out,
            "{}",
            SvgDocument {
                writer: self,
                scene,
            }
        )?;
        out.flush()
    }

    fn paint<'a>(&'a self, paint: &Paint) -> &'a str {
        match paint {
            Paint::Hex(hex) => *hex,
            Paint::Foreground => self.foreground.as_str(),
            Paint::None => "none",
        }
    }
}

struct SvgDocument<'a> {
    writer: &'a SvgWriter,
    scene: &'a Scene,
}

impl fmt::Display for SvgDocument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let vb = self.scene.view_box;
        writeln!(
            f,
            "<svg xmlns='http://www.w3.org/2000/svg' width='{}' height='{}' viewBox='{} {} {} {}'>",
            Num(vb.width),
            Num(vb.height),
            Num(vb.min_x),
            Num(vb.min_y),
            Num(vb.width),
            Num(vb.height)
        )?;
        if let Some(background) = &self.writer.background {
            writeln!(
                f,
                "<rect x='{}' y='{}' width='{}' height='{}' fill='{}'/>",
                Num(vb.min_x),
                Num(vb.min_y),
                Num(vb.width),
                Num(vb.height),
                Escaped(background)
            )?;
        }
        for primitive in self.scene.primitives() {
            self.element(f, primitive)?;
        }
        writeln!(f, "</svg>")
    }
}

impl SvgDocument<'_> {
    fn element(&self, f: &mut fmt::Formatter<'_>, primitive: &Primitive) -> fmt::Result {
        let w = self.writer;
        match primitive {
            Primitive::Circle {
                center,
                radius,
                fill,
                stroke,
                opacity,
            } => {
                write!(
                    f,
                    "<circle cx='{}' cy='{}' r='{}' fill='{}'",
                    Num(center.x),
                    Num(center.y),
                    Num(*radius),
                    w.paint(fill)
                )?;
                self.stroke_attrs(f, stroke.as_ref())?;
                opacity_attr(f, *opacity)?;
                writeln!(f, "/>")
            }
            Primitive::Line {
                from,
                to,
                stroke,
                opacity,
            } => {
                write!(
                    f,
                    "<line x1='{}' y1='{}' x2='{}' y2='{}'",
                    Num(from.x),
                    Num(from.y),
                    Num(to.x),
                    Num(to.y)
                )?;
                self.stroke_attrs(f, Some(stroke))?;
                opacity_attr(f, *opacity)?;
                writeln!(f, "/>")
            }
            Primitive::Rect {
                origin,
                width,
                height,
                corner_radius,
                fill,
                stroke,
            } => {
                write!(
                    f,
                    "<rect x='{}' y='{}' width='{}' height='{}' rx='{}' fill='{}'",
                    Num(origin.x),
                    Num(origin.y),
                    Num(*width),
                    Num(*height),
                    Num(*corner_radius),
                    w.paint(fill)
                )?;
                self.stroke_attrs(f, stroke.as_ref())?;
                writeln!(f, "/>")
            }
            Primitive::Text {
                position,
                content,
                font_size,
                bold,
                fill,
                anchor,
            } => {
                let anchor = match anchor {
                    TextAnchor::Start => "start",
                    TextAnchor::Middle => "middle",
                    TextAnchor::End => "end",
                };
                write!(
                    f,
                    "<text x='{}' y='{}' font-size='{}' font-family='{}' text-anchor='{}' dominant-baseline='middle' fill='{}'",
                    Num(position.x),
                    Num(position.y),
                    Num(*font_size),
                    FONT_FAMILY,
                    anchor,
                    w.paint(fill)
                )?;
                if *bold {
                    write!(f, " font-weight='bold'")?;
                }
                writeln!(f, ">{}</text>", Escaped(content))
            }
            Primitive::QuadPath {
                from,
                control,
                to,
                stroke,
            } => {
                write!(
                    f,
                    "<path d='M {} {} Q {} {} {} {}' fill='none'",
                    Num(from.x),
                    Num(from.y),
                    Num(control.x),
                    Num(control.y),
                    Num(to.x),
                    Num(to.y)
                )?;
                self.stroke_attrs(f, Some(stroke))?;
                writeln!(f, "/>")
            }
        }
    }

    fn stroke_attrs(&self, f: &mut fmt::Formatter<'_>, stroke: Option<&Stroke>) -> fmt::Result {
        match stroke {
            Some(stroke) => write!(
                f,
                " stroke='{}' stroke-width='{}'",
                self.writer.paint(&stroke.paint),
                Num(stroke.width)
            ),
            None => Ok(()),
        }
    }
}

fn opacity_attr(f: &mut fmt::Formatter<'_>, opacity: f64) -> fmt::Result {
    if opacity < 1.0 {
        write!(f, " opacity='{}'", Num(opacity))
    } else {
        Ok(())
    }
}

/// Compact coordinate formatting: integers without a fraction, everything else with at
/// most two decimals.
struct Num(f64);

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = (self.0 * 100.0).round() / 100.0;
        if rounded == 0.0 {
            return f.write_str("0");
        }
        let text = format!("{rounded:.2}");
        f.write_str(text.trim_end_matches('0').trim_end_matches('.'))
    }
}

struct Escaped<'a>(&'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0.chars() {
            match c {
                '&' => f.write_str("&amp;")?,
                '<' => f.write_str("&lt;")?,
                '>' => f.write_str("&gt;")?,
                '\'' => f.write_str("&apos;")?,
                '"' => f.write_str("&quot;")?,
                c => write!(f, "{c}")?,
            }
        }
        Ok(())
    }
}
