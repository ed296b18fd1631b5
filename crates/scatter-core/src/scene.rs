// File: crates/scatter-core/src/scene.rs
// Summary: Retained vector surface (id-addressed node tree) with deterministic SVG serialization.

use std::path::Path;

/// Handle to one node in a [`VectorSurface`].
///
/// Ids are allocated monotonically and never reused, even across `clear`,
/// so a handle held across re-renders resolves to nothing rather than to
/// the wrong element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

/// One vector primitive. Coordinates are in surface space (pixels from the
/// surface's top-left corner).
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        stroke: String,
        stroke_width: f64,
    },
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
        fill: String,
        opacity: f64,
    },
    Polyline {
        points: Vec<(f64, f64)>,
        stroke: String,
        stroke_width: f64,
        /// Dash pattern (on, off); `None` draws a solid stroke.
        dash: Option<(f64, f64)>,
    },
    Text {
        x: f64,
        y: f64,
        content: String,
        fill: String,
        size: f64,
        anchor: TextAnchor,
        /// Rotation in degrees about the text position.
        rotate: Option<f64>,
    },
}

#[derive(Clone, Debug)]
pub struct Node {
    pub id: NodeId,
    pub shape: Shape,
}

/// A retained drawing surface: an ordered list of vector nodes plus an
/// optional background fill. Later nodes paint over earlier ones.
///
/// The node list stays sorted by id (ids only ever grow), which lookup
/// relies on.
#[derive(Clone, Debug, Default)]
pub struct VectorSurface {
    nodes: Vec<Node>,
    next_id: u64,
    background: Option<String>,
}

impl VectorSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove every node and the background. Ids keep counting up.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.background = None;
    }

    pub fn set_background(&mut self, fill: Option<String>) {
        self.background = fill;
    }

    pub fn background(&self) -> Option<&str> {
        self.background.as_deref()
    }

    /// Append a shape on top of everything drawn so far.
    pub fn push(&mut self, shape: Shape) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.nodes.push(Node { id, shape });
        id
    }

    /// Remove a node; `false` when the id is not (or no longer) present.
    pub fn remove(&mut self, id: NodeId) -> bool {
        match self.index_of(id) {
            Some(i) => {
                self.nodes.remove(i);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: NodeId) -> Option<&Shape> {
        self.index_of(id).map(|i| &self.nodes[i].shape)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Shape> {
        match self.index_of(id) {
            Some(i) => Some(&mut self.nodes[i].shape),
            None => None,
        }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn index_of(&self, id: NodeId) -> Option<usize> {
        self.nodes.binary_search_by(|n| n.id.0.cmp(&id.0)).ok()
    }

    /// Serialize to standalone SVG 1.1 text. The same surface always
    /// produces identical bytes.
    pub fn to_svg(&self, width: f64, height: f64) -> String {
        let w = fmt_num(width);
        let h = fmt_num(height);
        let mut out = String::new();
        out.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" \
             viewBox=\"0 0 {w} {h}\" font-family=\"sans-serif\">\n"
        ));
        if let Some(bg) = &self.background {
            out.push_str(&format!(
                "  <rect width=\"{w}\" height=\"{h}\" fill=\"{}\"/>\n",
                escape(bg)
            ));
        }
        for node in &self.nodes {
            out.push_str("  ");
            out.push_str(&node.shape.to_svg_fragment());
            out.push('\n');
        }
        out.push_str("</svg>\n");
        out
    }

    /// Serialize and write to `path`, creating parent directories.
    pub fn write_svg(
        &self,
        width: f64,
        height: f64,
        path: impl AsRef<Path>,
    ) -> std::io::Result<()> {
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_svg(width, height))
    }
}

impl Shape {
    fn to_svg_fragment(&self) -> String {
        match self {
            Shape::Line { x1, y1, x2, y2, stroke, stroke_width } => format!(
                "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>",
                fmt_num(*x1),
                fmt_num(*y1),
                fmt_num(*x2),
                fmt_num(*y2),
                escape(stroke),
                fmt_num(*stroke_width),
            ),
            Shape::Circle { cx, cy, r, fill, opacity } => format!(
                "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\" opacity=\"{}\"/>",
                fmt_num(*cx),
                fmt_num(*cy),
                fmt_num(*r),
                escape(fill),
                opacity,
            ),
            Shape::Polyline { points, stroke, stroke_width, dash } => {
                let pts = points
                    .iter()
                    .map(|&(x, y)| format!("{},{}", fmt_num(x), fmt_num(y)))
                    .collect::<Vec<_>>()
                    .join(" ");
                let dash_attr = match dash {
                    Some((on, off)) => {
                        format!(" stroke-dasharray=\"{},{}\"", fmt_num(*on), fmt_num(*off))
                    }
                    None => String::new(),
                };
                format!(
                    "<polyline points=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\"{}/>",
                    pts,
                    escape(stroke),
                    fmt_num(*stroke_width),
                    dash_attr,
                )
            }
            Shape::Text { x, y, content, fill, size, anchor, rotate } => {
                let placement = match rotate {
                    Some(deg) => format!(
                        "transform=\"translate({},{}) rotate({})\"",
                        fmt_num(*x),
                        fmt_num(*y),
                        fmt_num(*deg),
                    ),
                    None => format!("x=\"{}\" y=\"{}\"", fmt_num(*x), fmt_num(*y)),
                };
                let anchor_attr = match anchor {
                    TextAnchor::Start => String::new(),
                    TextAnchor::Middle => " text-anchor=\"middle\"".to_string(),
                    TextAnchor::End => " text-anchor=\"end\"".to_string(),
                };
                format!(
                    "<text {} fill=\"{}\" font-size=\"{}\"{}>{}</text>",
                    placement,
                    escape(fill),
                    fmt_num(*size),
                    anchor_attr,
                    escape(content),
                )
            }
        }
    }
}

/// Integer-like values print without a fraction; everything else rounds to
/// two decimals. Keeps the output stable and readable.
fn fmt_num(v: f64) -> String {
    if v.is_finite() && v == v.trunc() && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{v:.2}")
    }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
