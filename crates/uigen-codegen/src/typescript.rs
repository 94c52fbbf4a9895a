//! TypeScript naming and type mapping utilities.
//!
//! # Examples
//!
//! ```
//! use uigen_codegen::typescript;
//! use uigen_core::AttrType;
//!
//! assert_eq!(typescript::to_pascal_case("invoice_list"), "InvoiceList");
//! assert_eq!(typescript::ts_type(AttrType::Decimal), "number");
//! assert_eq!(typescript::input_type(AttrType::DateTime), "datetime-local");
//! ```

use convert_case::{Case, Casing};
use uigen_core::AttrType;

/// Converts a name to PascalCase for TypeScript types and components.
///
/// # Examples
///
/// ```
/// use uigen_codegen::typescript::to_pascal_case;
///
/// assert_eq!(to_pascal_case("short_message"), "ShortMessage");
/// assert_eq!(to_pascal_case("Message"), "Message");
/// ```
#[must_use]
pub fn to_pascal_case(name: &str) -> String {
    name.to_case(Case::Pascal)
}

/// Converts a name to camelCase for TypeScript values and modules.
///
/// # Examples
///
/// ```
/// use uigen_codegen::typescript::to_camel_case;
///
/// assert_eq!(to_camel_case("ShortMessage"), "shortMessage");
/// assert_eq!(to_camel_case("provider_id"), "providerId");
/// ```
#[must_use]
pub fn to_camel_case(name: &str) -> String {
    name.to_case(Case::Camel)
}

/// Converts a name to snake_case.
#[must_use]
pub fn to_snake_case(name: &str) -> String {
    name.to_case(Case::Snake)
}

/// Converts a name to kebab-case for routes and file names.
///
/// # Examples
///
/// ```
/// use uigen_codegen::typescript::to_kebab_case;
///
/// assert_eq!(to_kebab_case("ShortMessage"), "short-message");
/// assert_eq!(to_kebab_case("invoice_list"), "invoice-list");
/// ```
#[must_use]
pub fn to_kebab_case(name: &str) -> String {
    name.to_case(Case::Kebab)
}

/// Converts an attribute name to a human readable label.
///
/// # Examples
///
/// ```
/// use uigen_codegen::typescript::to_label;
///
/// assert_eq!(to_label("planed_at"), "Planed At");
/// ```
#[must_use]
pub fn to_label(name: &str) -> String {
    name.to_case(Case::Title)
}

/// TypeScript type used to hold an attribute value.
///
/// Timestamps travel as ISO 8601 strings.
#[must_use]
pub const fn ts_type(attr_type: AttrType) -> &'static str {
    match attr_type {
        AttrType::String | AttrType::DateTime => "string",
        AttrType::Integer | AttrType::Decimal => "number",
    }
}

/// HTML input type used to edit an attribute value.
#[must_use]
pub const fn input_type(attr_type: AttrType) -> &'static str {
    match attr_type {
        AttrType::String => "text",
        AttrType::Integer | AttrType::Decimal => "number",
        AttrType::DateTime => "datetime-local",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_conversions() {
        assert_eq!(to_pascal_case("external_id"), "ExternalId");
        assert_eq!(to_camel_case("Message"), "message");
        assert_eq!(to_snake_case("ShortMessage"), "short_message");
        assert_eq!(to_kebab_case("messages"), "messages");
        assert_eq!(to_label("state_detail"), "State Detail");
    }

    #[test]
    fn test_ts_types() {
        assert_eq!(ts_type(AttrType::String), "string");
        assert_eq!(ts_type(AttrType::Integer), "number");
        assert_eq!(ts_type(AttrType::Decimal), "number");
        assert_eq!(ts_type(AttrType::DateTime), "string");
    }

    #[test]
    fn test_input_types() {
        assert_eq!(input_type(AttrType::String), "text");
        assert_eq!(input_type(AttrType::Integer), "number");
        assert_eq!(input_type(AttrType::Decimal), "number");
        assert_eq!(input_type(AttrType::DateTime), "datetime-local");
    }
}
