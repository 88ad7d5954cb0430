//! Typed scalar coercions.
//!
//! Every scalar in the model has a defined zero-value fallback, so a
//! missing attribute or param never errors: strings fall back to empty,
//! numbers to 0 and flags to false.

use std::str::FromStr;

/// String coercion: verbatim text, absent → empty string.
pub(crate) fn text(value: Option<&str>) -> String {
    value.unwrap_or_default().to_string()
}

/// Integer coercion: parse of the string form, absent or non-numeric → 0.
pub(crate) fn integer<T>(value: Option<&str>) -> T
where
    T: FromStr + Default,
{
    value.and_then(|v| v.parse().ok()).unwrap_or_default()
}

/// Flag coercion: true only for the exact literal `"true"`.
/// `"TRUE"`, `"1"`, absent and anything else all coerce to false.
pub(crate) fn flag(value: Option<&str>) -> bool {
    value == Some("true")
}
