use crate::alias::CanonicalField;
use crate::resolver::resolve_field;
use pallet_tag_types::Record;
use serde::Serialize;

/// Pallet dimensions in millimeters, kept as display strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedDimensions {
    pub length: String,
    pub width: String,
    pub height: String,
}

impl Default for ParsedDimensions {
    fn default() -> Self {
        Self {
            length: "725".to_string(),
            width: "895".to_string(),
            height: "2625".to_string(),
        }
    }
}

impl ParsedDimensions {
    fn is_complete(&self) -> bool {
        !self.length.is_empty() && !self.width.is_empty() && !self.height.is_empty()
    }
}

/// Splits `"725 X 895 X 2625"` (any mix of `x`/`X`, spacing optional).
/// Returns `None` unless at least three non-empty parts remain.
pub fn split_dimension_string(raw: &str) -> Option<ParsedDimensions> {
    let parts: Vec<&str> = raw
        .split(['x', 'X'])
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();
    match parts.as_slice() {
        [length, width, height, ..] => Some(ParsedDimensions {
            length: length.to_string(),
            width: width.to_string(),
            height: height.to_string(),
        }),
        _ => None,
    }
}

/// Resolves length, width and height for a record.
///
/// Discrete columns are tried first. If any is missing, a parseable combined
/// dimension column replaces all three. If the result is still incomplete
/// the defaults are used for all three.
pub fn parse_dimensions(record: &Record) -> ParsedDimensions {
    let mut dims = ParsedDimensions {
        length: resolve_field(record, CanonicalField::Length),
        width: resolve_field(record, CanonicalField::Width),
        height: resolve_field(record, CanonicalField::Height),
    };

    if !dims.is_complete() {
        let combined = resolve_field(record, CanonicalField::Dimensions);
        if let Some(parsed) = split_dimension_string(&combined) {
            dims = parsed;
        }
    }

    if dims.is_complete() {
        dims
    } else {
        log::trace!(
            "Incomplete dimensions {}/{}/{}; using defaults",
            dims.length,
            dims.width,
            dims.height
        );
        ParsedDimensions::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, &str)]) -> Record {
        pairs.iter().map(|(k, v)| (*k, *v)).collect()
    }

    fn dims(length: &str, width: &str, height: &str) -> ParsedDimensions {
        ParsedDimensions {
            length: length.into(),
            width: width.into(),
            height: height.into(),
        }
    }

    #[test]
    fn combined_string() {
        let r = record(&[("Pallet Dimension MM:", "725 X 895 X 2625")]);
        assert_eq!(parse_dimensions(&r), dims("725", "895", "2625"));
    }

    #[test]
    fn combined_string_without_spaces_and_lowercase() {
        let r = record(&[("PALLET DIMENSIONS MM", "1000x1200X1500")]);
        assert_eq!(parse_dimensions(&r), dims("1000", "1200", "1500"));
    }

    #[test]
    fn discrete_columns_win_when_complete() {
        let r = record(&[
            ("LENGTH", "1"),
            ("Width", "2"),
            ("height", "3"),
            ("Dimensions", "7 x 8 x 9"),
        ]);
        assert_eq!(parse_dimensions(&r), dims("1", "2", "3"));
    }

    #[test]
    fn combined_replaces_all_three_when_a_column_is_missing() {
        let r = record(&[("Length", "1"), ("Width", "2"), ("Dimensions", "7 x 8 x 9")]);
        assert_eq!(parse_dimensions(&r), dims("7", "8", "9"));
    }

    #[test]
    fn partial_columns_without_combined_fall_back_entirely() {
        let r = record(&[("Length", "1"), ("Width", "2")]);
        assert_eq!(parse_dimensions(&r), ParsedDimensions::default());
    }

    #[test]
    fn unparseable_or_empty_falls_back() {
        assert_eq!(parse_dimensions(&Record::new()), dims("725", "895", "2625"));
        let r = record(&[("Dimensions", "725 by 895")]);
        assert_eq!(parse_dimensions(&r), ParsedDimensions::default());
        let r = record(&[("Dimensions", "x X x")]);
        assert_eq!(parse_dimensions(&r), ParsedDimensions::default());
    }

    #[test]
    fn extra_parts_are_ignored() {
        assert_eq!(
            split_dimension_string("1 x 2 x 3 x 4"),
            Some(dims("1", "2", "3"))
        );
    }
}
