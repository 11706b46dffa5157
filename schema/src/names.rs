//! Field identifiers that collide with reserved words.
//!
//! `in`, `not` and `schema` are declared as `in_`, `not_` and `schema_` in the
//! document model and carry the public key through serde `rename`; the
//! internal spelling is accepted as an `alias` on input. This table is the
//! same mapping for code that handles raw mappings rather than typed values.

/// `(internal identifier, public key)` pairs.
pub const RESERVED_FIELDS: [(&str, &str); 3] =
    [("in_", "in"), ("not_", "not"), ("schema_", "schema")];

/// Public key for an internal field identifier.
pub fn public_name(field: &str) -> &str {
    RESERVED_FIELDS
        .iter()
        .find(|(internal, _)| *internal == field)
        .map(|(_, public)| *public)
        .unwrap_or(field)
}

/// Internal field identifier for a public key.
pub fn internal_name(key: &str) -> &str {
    RESERVED_FIELDS
        .iter()
        .find(|(_, public)| *public == key)
        .map(|(internal, _)| *internal)
        .unwrap_or(key)
}

/// Drops every trailing underscore, leaving names made only of underscores
/// untouched.
pub fn strip_trailing_underscores(field: &str) -> &str {
    match field.trim_end_matches('_') {
        "" => field,
        stripped => stripped,
    }
}

/// How mapping keys of a raw (untyped) document are turned into public keys.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum FieldNaming {
    /// Only the identifiers in [`RESERVED_FIELDS`] are renamed.
    #[default]
    Explicit,
    /// Any key ending in underscores loses them.
    StripTrailingUnderscores,
}

impl FieldNaming {
    pub fn public_key<'a>(&self, key: &'a str) -> &'a str {
        match self {
            FieldNaming::Explicit => public_name(key),
            FieldNaming::StripTrailingUnderscores => strip_trailing_underscores(key),
        }
    }
}
