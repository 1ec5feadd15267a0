//! Barcode style descriptors

/// Describes a symbology as advertised by the backend registry: what the
/// editor may offer (text line, checksum toggle) and how example data for
/// field-bound barcodes is generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Style {
    /// Stable style id (registry key)
    pub id: String,
    /// Human-readable name
    pub name: String,
    /// Symbology can render a text line under the bars
    pub can_text: bool,
    /// The text line may be turned off
    pub text_optional: bool,
    /// Symbology carries a checksum
    pub can_checksum: bool,
    /// The checksum may be turned off
    pub checksum_optional: bool,
    /// Digits of placeholder data used when the barcode is bound to a
    /// merge field and no record is active
    pub preferred_digits: u32,
}

impl Style {
    pub fn new(
        id: &str,
        name: &str,
        can_text: bool,
        text_optional: bool,
        can_checksum: bool,
        checksum_optional: bool,
        preferred_digits: u32,
    ) -> Self {
        Style {
            id: id.to_string(),
            name: name.to_string(),
            can_text,
            text_optional,
            can_checksum,
            checksum_optional,
            preferred_digits,
        }
    }

    /// Placeholder data for field-bound barcodes.
    pub fn example_data(&self) -> String {
        "0".repeat(self.preferred_digits as usize)
    }
}
