//! PDF output for pallet tags using lopdf.
//!
//! Pages arrive as [`PageOps`](pallet_tag_types::PageOps) in top-left
//! millimeters and are written with the standard Helvetica faces, so the
//! output needs no embedded fonts.

mod encoding;
mod error;
mod renderer;

pub use encoding::to_win_ansi;
pub use error::RenderError;
pub use renderer::LopdfRenderer;
