pub mod cell;
pub mod geometry;
pub mod ops;
pub mod record;

pub use cell::{CellValue, RawRow};
pub use geometry::{Point, Rect, Size, mm_to_pt, pt_to_mm, PT_PER_MM};
pub use ops::{DrawOp, FontWeight, PageOps, TextStyle};
pub use record::Record;
