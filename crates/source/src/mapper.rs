use crate::RowSource;
use crate::header::{clean_header, detect_header_row, has_content};
use pallet_tag_types::{CellValue, RawRow, Record};

/// Zips cleaned headers with row values.
#[derive(Debug, Clone)]
pub struct RecordMapper {
    headers: Vec<String>,
}

impl RecordMapper {
    pub fn new(header_row: &RawRow) -> Self {
        Self {
            headers: header_row.iter().map(clean_header).collect(),
        }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Builds the record for one data row. Columns with a blank header are
    /// dropped; cells past the end of a short row read as empty.
    pub fn map_row(&self, row: &RawRow) -> Record {
        let mut record = Record::new();
        for (index, header) in self.headers.iter().enumerate() {
            if header.is_empty() {
                continue;
            }
            let value = row.get(index).cloned().unwrap_or(CellValue::Empty);
            record.insert(header.clone(), value);
        }
        record
    }
}

/// The outcome of mapping a whole sheet.
#[derive(Debug, Clone, Default)]
pub struct Sheet {
    pub header_row_index: usize,
    pub headers: Vec<String>,
    pub records: Vec<Record>,
}

/// Detects the header row and maps every non-empty data row after it.
pub fn build_records(rows: &[RawRow], lookahead: usize) -> Sheet {
    let header_row_index = detect_header_row(rows, lookahead);
    let Some(header_row) = rows.get(header_row_index) else {
        return Sheet::default();
    };
    let mapper = RecordMapper::new(header_row);

    let records: Vec<Record> = rows[header_row_index + 1..]
        .iter()
        .filter(|row| has_content(row))
        .map(|row| mapper.map_row(row))
        .collect();

    log::debug!(
        "Header row {} with {} columns, {} data rows",
        header_row_index,
        mapper.headers().len(),
        records.len()
    );

    Sheet {
        header_row_index,
        headers: mapper.headers,
        records,
    }
}

/// Drains `source` and maps it into records.
pub fn read_records(source: &mut dyn RowSource, lookahead: usize) -> Sheet {
    let mut rows = Vec::with_capacity(source.size_hint().unwrap_or(0));
    while let Some(row) = source.next() {
        rows.push(row);
    }
    build_records(&rows, lookahead)
}
