use serde::Serialize;

/// Points per millimeter (72 pt per inch, 25.4 mm per inch).
pub const PT_PER_MM: f32 = 72.0 / 25.4;

/// Converts millimeters to PDF points.
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * PT_PER_MM
}

/// Converts PDF points to millimeters.
pub fn pt_to_mm(pt: f32) -> f32 {
    pt / PT_PER_MM
}

/// A position on the page in millimeters, measured from the top-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// The size in PDF points.
    pub fn to_pt(self) -> Size {
        Size {
            width: mm_to_pt(self.width),
            height: mm_to_pt(self.height),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Distance from the top of the page to the rect's lower edge.
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}
