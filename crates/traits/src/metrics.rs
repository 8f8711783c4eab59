use pallet_tag_types::TextStyle;

/// Measures rendered text width.
///
/// Layout depends on this only to center titles and to align values after
/// labels, so any font backend can be plugged in.
pub trait TextMetrics: Send + Sync {
    /// Width of `text` in millimeters when set in `style`.
    fn text_width(&self, text: &str, style: TextStyle) -> f32;

    /// Baseline-to-baseline distance in millimeters for `style`.
    fn line_height(&self, style: TextStyle) -> f32;
}
