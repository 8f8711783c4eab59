use crate::geometry::{Point, Rect};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

/// Font selection for one run of text. `size` is in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TextStyle {
    pub weight: FontWeight,
    pub size: f32,
}

impl TextStyle {
    pub const fn new(weight: FontWeight, size: f32) -> Self {
        Self { weight, size }
    }

    pub const fn normal(size: f32) -> Self {
        Self::new(FontWeight::Normal, size)
    }

    pub const fn bold(size: f32) -> Self {
        Self::new(FontWeight::Bold, size)
    }
}

/// A single positioned drawing instruction. Coordinates are millimeters
/// from the top-left page corner; text `y` is the baseline.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawOp {
    Text {
        text: String,
        at: Point,
        style: TextStyle,
    },
    /// Places the shared image registered under `key`, scaled into `rect`.
    Image { key: String, rect: Rect },
    Line { from: Point, to: Point, width: f32 },
}

/// The append-only list of draw instructions for one page.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PageOps {
    ops: Vec<DrawOp>,
}

impl PageOps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, op: DrawOp) {
        self.ops.push(op);
    }

    pub fn text(&mut self, text: impl Into<String>, x: f32, y: f32, style: TextStyle) {
        self.push(DrawOp::Text {
            text: text.into(),
            at: Point::new(x, y),
            style,
        });
    }

    pub fn line(&mut self, from: Point, to: Point, width: f32) {
        self.push(DrawOp::Line { from, to, width });
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Text of every `Text` op, in draw order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl IntoIterator for PageOps {
    type Item = DrawOp;
    type IntoIter = std::vec::IntoIter<DrawOp>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.into_iter()
    }
}
