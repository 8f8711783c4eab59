//! Declarative alias tables: each canonical field maps to the ordered list of
//! header spellings accepted for it. Order is priority.

/// A semantic slot on the tag, independent of how the source column is spelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CanonicalField {
    LcPoNumber,
    Address,
    Customer,
    AddressLine,
    Country,
    InvoiceNumber,
    FilmDescription,
    Size,
    ReelCount,
    NetWeight,
    GrossWeight,
    Length,
    Width,
    Height,
    Dimensions,
    PalletNumber,
    ContainerNumber,
}

impl CanonicalField {
    pub const ALL: [CanonicalField; 17] = [
        CanonicalField::LcPoNumber,
        CanonicalField::Address,
        CanonicalField::Customer,
        CanonicalField::AddressLine,
        CanonicalField::Country,
        CanonicalField::InvoiceNumber,
        CanonicalField::FilmDescription,
        CanonicalField::Size,
        CanonicalField::ReelCount,
        CanonicalField::NetWeight,
        CanonicalField::GrossWeight,
        CanonicalField::Length,
        CanonicalField::Width,
        CanonicalField::Height,
        CanonicalField::Dimensions,
        CanonicalField::PalletNumber,
        CanonicalField::ContainerNumber,
    ];

    /// Accepted header spellings, highest priority first.
    pub const fn aliases(self) -> &'static [&'static str] {
        match self {
            CanonicalField::LcPoNumber => &["LC / PO #", "LC/PO#", "LC/PO", "PO#", "LC / PO"],
            CanonicalField::Address => &["ADDRESS", "Address", "Address Line 1"],
            CanonicalField::Customer => &["Customer", "Customer Name", "QUIMIDROGA"],
            CanonicalField::AddressLine => {
                &["Address Line 1", "C/TUSET 26 08006, 08006 BARCELONA,"]
            }
            CanonicalField::Country => &["Country", "Spain"],
            CanonicalField::InvoiceNumber => &[
                "PROFORMA INVOICE NUMBER:",
                "PROFORMA INVOICE NUMBER",
                "Invoice Number",
                "Invoice",
            ],
            CanonicalField::FilmDescription => {
                &["Film", "FILM DESCP", "Film Description", "Description"]
            }
            CanonicalField::Size => &["Size MM:", "SIZE MM", "Size", "Size MM"],
            CanonicalField::ReelCount => &[
                "NO. Of Reels / Pallet",
                "NO. Of Reels / Pallet:",
                "No. OF REELS / PALLET",
                "Reels",
                "Number of Reels",
            ],
            CanonicalField::NetWeight => &[
                "Net Weight (PALLET):",
                "NET WEIGHT (PALLET):",
                "NET WEIGHT (PALLET)",
                "Net Weight",
                "Net Weight (Pallet)",
            ],
            CanonicalField::GrossWeight => &[
                "Gross Weight (PALLET):",
                "GROSS WEIGHT (PALLET):",
                "GROSS WEIGHT (PALLET)",
                "Gross Weight",
                "Gross Weight (Pallet)",
            ],
            CanonicalField::Length => &["Length", "LENGTH"],
            CanonicalField::Width => &["Width", "WIDTH"],
            CanonicalField::Height => &["Height", "HEIGHT"],
            CanonicalField::Dimensions => &[
                "Pallet Dimension MM:",
                "PALLET DIMENSIONS MM:",
                "PALLET DIMENSIONS MM",
                "Dimensions",
                "Pallet Dimensions",
            ],
            CanonicalField::PalletNumber => {
                &["Pallet No.", "PALLET NUMBER", "Pallet Number", "Pallet #", "Pallet"]
            }
            CanonicalField::ContainerNumber => &[
                "CONT #03",
                "CONT #",
                "CONT#",
                "CONT #",
                "Container Number",
                "CONT",
            ],
        }
    }
}
