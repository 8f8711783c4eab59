//! Advance widths of the standard-14 Helvetica faces, for measuring text
//! without loading font files.

use pallet_tag_traits::TextMetrics;
use pallet_tag_types::{FontWeight, TextStyle, pt_to_mm};

/// Line height as a multiple of the font size.
pub const LINE_HEIGHT_FACTOR: f32 = 1.15;

// Glyph widths in 1/1000 em for codes 32..=126.
#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

const FALLBACK_WIDTH: u16 = 556;

fn glyph_width(c: char, weight: FontWeight) -> u16 {
    let table = match weight {
        FontWeight::Normal => &HELVETICA,
        FontWeight::Bold => &HELVETICA_BOLD,
    };
    match c as u32 {
        code @ 32..=126 => table[(code - 32) as usize],
        0xA0 => table[0],
        _ => FALLBACK_WIDTH,
    }
}

/// Measures text as set in Helvetica / Helvetica-Bold.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardFonts;

impl StandardFonts {
    /// Width in 1/1000 em.
    pub fn em_units(text: &str, weight: FontWeight) -> u32 {
        text.chars().map(|c| glyph_width(c, weight) as u32).sum()
    }
}

impl TextMetrics for StandardFonts {
    fn text_width(&self, text: &str, style: TextStyle) -> f32 {
        let points = Self::em_units(text, style.weight) as f32 / 1000.0 * style.size;
        pt_to_mm(points)
    }

    fn line_height(&self, style: TextStyle) -> f32 {
        pt_to_mm(style.size * LINE_HEIGHT_FACTOR)
    }
}
