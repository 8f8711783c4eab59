use pallet_tag_types::{CellValue, RawRow};

/// Number of leading rows searched for the header row.
pub const DEFAULT_HEADER_LOOKAHEAD: usize = 5;

/// Cleans one header cell into a comparable key.
///
/// Surrounding whitespace is removed. Interior punctuation, including a
/// trailing colon, is kept because alias matching depends on it. Falsy cells
/// (empty, zero, `false`) clean to `""`.
pub fn clean_header(cell: &CellValue) -> String {
    if cell.is_falsy() {
        return String::new();
    }
    cell.to_string().trim().to_string()
}

/// Index of the first row among the first `lookahead` rows that has a
/// non-blank cell. Falls back to row 0.
pub fn detect_header_row(rows: &[RawRow], lookahead: usize) -> usize {
    rows.iter()
        .take(lookahead)
        .position(|row| row.iter().any(|cell| !cell.is_falsy() && !cell.is_blank()))
        .unwrap_or(0)
}

/// `true` when a data row has at least one non-empty cell.
pub fn has_content(row: &RawRow) -> bool {
    row.iter().any(|cell| !cell.is_empty())
}
