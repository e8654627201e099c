//! Client-side checks run before any request leaves the form.
//!
//! These mirror what the form has always accepted, which is looser than what
//! the API enforces: a negative product id passes here and is rejected by the
//! server.

use regex::Regex;
use std::sync::OnceLock;

pub const ALL_FIELDS_MESSAGE: &str =
    "All fields are necessary.\nProduct ID>0, Quantity>=0, Restock level>=0";
pub const RESTOCK_FIELDS_MESSAGE: &str =
    "All fields are necessary.\nProduct ID>0, Restock Quantity>=0, Condition";
pub const KEY_FIELDS_MESSAGE: &str = "Product ID AND Condition is required";

fn integer_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^-?[0-9]+$").expect("integer pattern is valid"))
}

pub fn is_integer(value: &str) -> bool {
    integer_pattern().is_match(value)
}

/// Decided from the text alone, so values too wide for `i64` still pass
/// here and are rejected where the request body is built.
pub fn is_non_negative_integer(value: &str) -> bool {
    if !is_integer(value) {
        return false;
    }
    match value.strip_prefix('-') {
        Some(magnitude) => magnitude.bytes().all(|b| b == b'0'),
        None => true,
    }
}

pub fn is_valid_condition(value: &str) -> bool {
    matches!(value, "new" | "used" | "open box")
}

/// Checks every field a create or update needs. `condition` is the wire
/// value and `available` the wire integer rendered as text, so an unmapped
/// form value arrives here as an empty string and fails.
pub fn validate_all(
    product_id: &str,
    quantity: &str,
    restock_level: &str,
    condition: &str,
    available: &str,
) -> bool {
    is_integer(product_id)
        && is_non_negative_integer(quantity)
        && is_non_negative_integer(restock_level)
        && is_valid_condition(condition)
        && is_non_negative_integer(available)
}

/// A rejected action. The message is shown to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    pub message: &'static str,
}

impl ValidationFailure {
    pub fn all_fields() -> Self {
        Self { message: ALL_FIELDS_MESSAGE }
    }

    pub fn restock_fields() -> Self {
        Self { message: RESTOCK_FIELDS_MESSAGE }
    }

    pub fn key_fields() -> Self {
        Self { message: KEY_FIELDS_MESSAGE }
    }
}

impl std::fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message)
    }
}

impl std::error::Error for ValidationFailure {}
