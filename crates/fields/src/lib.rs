//! Field resolution for pallet tags.
//!
//! Source spreadsheets spell their headers inconsistently. Each
//! [`CanonicalField`] carries an ordered alias list and [`resolve`] finds the
//! first usable value under a case- and colon-insensitive match. The parsers
//! derive composite values and always fall back to fixed defaults instead of
//! failing.

pub mod address;
pub mod alias;
pub mod container;
pub mod dimensions;
pub mod resolver;
pub mod tag;
pub mod weight;

pub use address::{DEFAULT_COUNTRY, ParsedAddress, parse_address};
pub use alias::CanonicalField;
pub use container::{DEFAULT_CONTAINER_NUMBER, extract_container_number};
pub use dimensions::{ParsedDimensions, parse_dimensions, split_dimension_string};
pub use resolver::{keys_equivalent, normalize, resolve, resolve_field};
pub use tag::{FieldOptions, TagFields};
pub use weight::{format_weight, parse_leading_number};
