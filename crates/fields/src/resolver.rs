use crate::alias::CanonicalField;
use pallet_tag_types::{CellValue, Record};

/// Lowercases and trims a header or alias for comparison.
pub fn normalize(s: &str) -> String {
    s.to_lowercase().trim().to_string()
}

/// Header equivalence: equal after normalizing, equal up to one trailing
/// colon on the header, or equal once every colon is removed from both.
pub fn keys_equivalent(key: &str, alias: &str) -> bool {
    let key = normalize(key);
    let alias = normalize(alias);
    if key == alias {
        return true;
    }
    if key.strip_suffix(':') == Some(alias.as_str()) {
        return true;
    }
    key.replace(':', "") == alias.replace(':', "")
}

fn non_empty(value: &CellValue) -> Option<String> {
    let text = value.to_string();
    (!text.is_empty()).then_some(text)
}

/// Returns the first non-empty value found under any alias, trying the
/// aliases in order, else `default`.
///
/// For each alias an exact key hit wins; otherwise the record's keys are
/// scanned in header order for an equivalent spelling with a non-empty value.
pub fn resolve(record: &Record, aliases: &[&str], default: &str) -> String {
    for alias in aliases {
        if let Some(text) = record.get(alias).and_then(non_empty) {
            return text;
        }
        let fuzzy = record
            .iter()
            .filter(|(key, _)| keys_equivalent(key, alias))
            .find_map(|(_, value)| non_empty(value));
        if let Some(text) = fuzzy {
            return text;
        }
    }
    default.to_string()
}

/// [`resolve`] against a canonical field's alias table, defaulting to `""`.
pub fn resolve_field(record: &Record, field: CanonicalField) -> String {
    resolve(record, field.aliases(), "")
}
