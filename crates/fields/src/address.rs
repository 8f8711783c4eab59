use serde::Serialize;

pub const DEFAULT_COUNTRY: &str = "Spain";

/// A composite address split into its parts. `country` is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedAddress {
    pub customer: String,
    pub address: String,
    pub country: String,
}

/// Splits `"Customer, street..., Country"` on commas.
///
/// Three or more parts give customer, the joined middle, and country. Two
/// parts give customer and country. Fewer leave the country at
/// [`DEFAULT_COUNTRY`].
pub fn parse_address(raw: &str) -> ParsedAddress {
    let parts: Vec<&str> = raw
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();

    match parts.as_slice() {
        [customer, middle @ .., country] if !middle.is_empty() => ParsedAddress {
            customer: customer.to_string(),
            address: middle.join(", "),
            country: country.to_string(),
        },
        [customer, country] => ParsedAddress {
            customer: customer.to_string(),
            address: String::new(),
            country: country.to_string(),
        },
        _ => ParsedAddress {
            customer: parts.first().map(|s| s.to_string()).unwrap_or_default(),
            address: String::new(),
            country: DEFAULT_COUNTRY.to_string(),
        },
    }
}
