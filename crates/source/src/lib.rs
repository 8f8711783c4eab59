//! Row sources for the tag pipeline.
//!
//! A [`RowSource`] yields raw rows of cells. [`open_source`] picks a reader
//! from the file extension; [`read_records`] turns the rows into header-keyed
//! [`Record`](pallet_tag_types::Record)s.
//!
//! ```ignore
//! let mut source = open_source(Path::new("TAG - CONT # 03.xlsx"))?;
//! let sheet = read_records(source.as_mut(), DEFAULT_HEADER_LOOKAHEAD);
//! ```

mod delimited;
mod error;
mod header;
mod mapper;
mod workbook;

pub use delimited::read_csv;
pub use error::SourceError;
pub use header::{DEFAULT_HEADER_LOOKAHEAD, clean_header, detect_header_row, has_content};
pub use mapper::{RecordMapper, Sheet, build_records, read_records};
pub use workbook::read_workbook;

use pallet_tag_types::RawRow;
use std::path::Path;

/// A producer of raw tabular rows.
pub trait RowSource: Send {
    /// The next row, or `None` once the source is exhausted.
    fn next(&mut self) -> Option<RawRow>;

    /// Total row count, when known up front.
    fn size_hint(&self) -> Option<usize> {
        None
    }
}

/// Rows held in memory.
#[derive(Debug, Clone, Default)]
pub struct VecRowSource {
    rows: std::vec::IntoIter<RawRow>,
    len: usize,
}

impl VecRowSource {
    pub fn new(rows: Vec<RawRow>) -> Self {
        Self {
            len: rows.len(),
            rows: rows.into_iter(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.rows.len()
    }
}

impl RowSource for VecRowSource {
    fn next(&mut self) -> Option<RawRow> {
        self.rows.next()
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.len)
    }
}

impl RowSource for Box<dyn RowSource> {
    fn next(&mut self) -> Option<RawRow> {
        (**self).next()
    }

    fn size_hint(&self) -> Option<usize> {
        (**self).size_hint()
    }
}

/// Opens `path` with the reader matching its extension.
pub fn open_source(path: &Path) -> Result<Box<dyn RowSource>, SourceError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "xlsx" | "xlsm" | "xls" | "xlsb" | "ods" => Ok(Box::new(read_workbook(path)?)),
        "csv" => Ok(Box::new(read_csv(path)?)),
        _ => Err(SourceError::UnsupportedFormat(path.display().to_string())),
    }
}
