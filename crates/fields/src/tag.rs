use crate::address::{ParsedAddress, parse_address};
use crate::alias::CanonicalField;
use crate::container::extract_container_number;
use crate::dimensions::{ParsedDimensions, parse_dimensions};
use crate::resolver::resolve_field;
use crate::weight::format_weight;
use pallet_tag_types::Record;
use serde::Serialize;

/// Switches that change how resolved values are presented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldOptions {
    /// Also apply two-decimal formatting to the net weight. Off by default:
    /// only the gross weight is reformatted.
    pub format_net_weight: bool,
}

/// Every value printed on one tag, resolved from one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagFields {
    pub container_number: String,
    pub lc_po_number: String,
    pub customer: String,
    pub address: String,
    pub country: String,
    pub invoice_number: String,
    pub film_description: String,
    pub size: String,
    pub reel_count: String,
    pub net_weight: String,
    pub gross_weight: String,
    pub dimensions: ParsedDimensions,
    pub pallet_number: String,
}

fn or_resolve(parsed: String, record: &Record, field: CanonicalField) -> String {
    if parsed.is_empty() {
        resolve_field(record, field)
    } else {
        parsed
    }
}

impl TagFields {
    pub fn resolve(record: &Record, filename: &str, options: FieldOptions) -> Self {
        let ParsedAddress {
            customer,
            address,
            country,
        } = parse_address(&resolve_field(record, CanonicalField::Address));

        let net_weight = resolve_field(record, CanonicalField::NetWeight);
        let net_weight = if options.format_net_weight {
            format_weight(&net_weight)
        } else {
            net_weight
        };

        Self {
            container_number: extract_container_number(record, filename),
            lc_po_number: resolve_field(record, CanonicalField::LcPoNumber),
            customer: or_resolve(customer, record, CanonicalField::Customer),
            address: or_resolve(address, record, CanonicalField::AddressLine),
            country: or_resolve(country, record, CanonicalField::Country),
            invoice_number: resolve_field(record, CanonicalField::InvoiceNumber),
            film_description: resolve_field(record, CanonicalField::FilmDescription),
            size: resolve_field(record, CanonicalField::Size),
            reel_count: resolve_field(record, CanonicalField::ReelCount),
            net_weight,
            gross_weight: format_weight(&resolve_field(record, CanonicalField::GrossWeight)),
            dimensions: parse_dimensions(record),
            pallet_number: resolve_field(record, CanonicalField::PalletNumber),
        }
    }
}
