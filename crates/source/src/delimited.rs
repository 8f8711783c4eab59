use crate::VecRowSource;
use crate::error::SourceError;
use csv::ReaderBuilder;
use pallet_tag_types::{CellValue, RawRow};
use std::path::Path;

/// Reads a comma-separated file. Every row, the header included, is returned
/// as raw cells; rows may differ in length.
pub fn read_csv(path: &Path) -> Result<VecRowSource, SourceError> {
    let display = path.display().to_string();
    let file = std::fs::File::open(path).map_err(|source| SourceError::Read {
        path: display.clone(),
        source,
    })?;

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut rows: Vec<RawRow> = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| SourceError::Parse {
            path: display.clone(),
            message: e.to_string(),
        })?;
        rows.push(
            record
                .iter()
                .map(|field| {
                    if field.is_empty() {
                        CellValue::Empty
                    } else {
                        CellValue::Text(field.to_string())
                    }
                })
                .collect(),
        );
    }
    Ok(VecRowSource::new(rows))
}
