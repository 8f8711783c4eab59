use pallet_tag_types::Size;

/// Label stock width in millimeters (6 in).
pub const PAGE_WIDTH_MM: f32 = 152.4;
/// Label stock height in millimeters (4 in).
pub const PAGE_HEIGHT_MM: f32 = 101.6;
pub const PAGE_MARGIN_MM: f32 = 6.0;

/// Page geometry shared by every tag. All values are millimeters measured
/// from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageContext {
    pub page_width: f32,
    pub page_height: f32,
    pub margin: f32,
    pub content_width: f32,
    pub left_col: f32,
    pub right_col: f32,
    pub col_width: f32,
    /// Offset from a row label to its value.
    pub label_value_gap: f32,
}

impl PageContext {
    pub fn new(page_width: f32, page_height: f32, margin: f32) -> Self {
        let content_width = page_width - 2.0 * margin;
        Self {
            page_width,
            page_height,
            margin,
            content_width,
            left_col: margin,
            right_col: page_width / 2.0 + 3.0,
            col_width: content_width / 2.0 - 3.0,
            label_value_gap: 15.0,
        }
    }

    /// The 6 in x 4 in landscape stock.
    pub fn label_stock() -> Self {
        Self::new(PAGE_WIDTH_MM, PAGE_HEIGHT_MM, PAGE_MARGIN_MM)
    }

    pub fn page_size(&self) -> Size {
        Size::new(self.page_width, self.page_height)
    }

    /// X for text of `width` centered on the page.
    pub fn centered_x(&self, width: f32) -> f32 {
        (self.page_width - width) / 2.0
    }
}

impl Default for PageContext {
    fn default() -> Self {
        Self::label_stock()
    }
}
