use crate::VecRowSource;
use crate::error::SourceError;
use calamine::{Data, Reader, open_workbook_auto};
use pallet_tag_types::{CellValue, RawRow};
use std::path::Path;

fn to_cell(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Bool(b) => CellValue::Bool(*b),
        other => CellValue::Text(other.to_string()),
    }
}

/// Reads the first worksheet of a spreadsheet file.
///
/// Rows start at the first row of the used range, so blank rows above it do
/// not count against header detection. Columns keep their absolute sheet
/// positions: a range that starts right of column `A` is padded with empty
/// cells.
pub fn read_workbook(path: &Path) -> Result<VecRowSource, SourceError> {
    let display = path.display().to_string();
    std::fs::metadata(path).map_err(|source| SourceError::Read {
        path: display.clone(),
        source,
    })?;

    let parse_err = |message: String| SourceError::Parse {
        path: display.clone(),
        message,
    };

    let mut workbook = open_workbook_auto(path).map_err(|e| parse_err(e.to_string()))?;
    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| parse_err("workbook has no worksheets".to_string()))?;
    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| parse_err(e.to_string()))?;

    let col_offset = range.start().map(|(_, c)| c as usize).unwrap_or(0);

    let rows: Vec<RawRow> = range
        .rows()
        .map(|sheet_row| {
            let mut row = vec![CellValue::Empty; col_offset];
            row.extend(sheet_row.iter().map(to_cell));
            row
        })
        .collect();

    log::debug!("Read {} rows from sheet '{}' of {}", rows.len(), sheet_name, display);
    Ok(VecRowSource::new(rows))
}
