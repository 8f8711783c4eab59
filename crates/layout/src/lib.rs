//! Page layout for pallet tags.
//!
//! [`PageLayoutEngine`] resolves a record's fields and emits absolute
//! [`PageOps`](pallet_tag_types::PageOps) in millimeters. Text is measured
//! with the standard Helvetica widths so layout never touches font files.

pub mod context;
pub mod engine;
pub mod metrics;
pub mod wrap;

pub use context::{PAGE_HEIGHT_MM, PAGE_MARGIN_MM, PAGE_WIDTH_MM, PageContext};
pub use engine::{LOGO_HEIGHT_MM, LOGO_KEY, ORIGIN_TEXT, PageLayoutEngine, TITLE};
pub use metrics::{LINE_HEIGHT_FACTOR, StandardFonts};
pub use wrap::split_text_to_size;
