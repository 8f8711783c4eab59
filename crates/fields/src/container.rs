use crate::alias::CanonicalField;
use crate::resolver::resolve_field;
use once_cell::sync::Lazy;
use pallet_tag_types::Record;
use regex::Regex;

pub const DEFAULT_CONTAINER_NUMBER: &str = "01";

static DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+").expect("valid digit pattern"));

static FILENAME_CONTAINER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)CONT\s*#?\s*([0-9]+)").expect("valid container pattern"));

/// Left-pads with `'0'` to at least two characters.
fn pad2(s: &str) -> String {
    format!("{:0>2}", s)
}

/// Derives the container number for a tag.
///
/// The record's container column wins: its first digit run, zero-padded to
/// two places, or the whole value padded if it has no digits. Without a
/// column value the source filename is searched for `CONT # n`. Falls back
/// to [`DEFAULT_CONTAINER_NUMBER`].
pub fn extract_container_number(record: &Record, filename: &str) -> String {
    let value = resolve_field(record, CanonicalField::ContainerNumber);
    if !value.is_empty() {
        return match DIGITS.find(&value) {
            Some(m) => pad2(m.as_str()),
            None => pad2(&value),
        };
    }

    if let Some(caps) = FILENAME_CONTAINER.captures(filename) {
        return pad2(&caps[1]);
    }

    DEFAULT_CONTAINER_NUMBER.to_string()
}
