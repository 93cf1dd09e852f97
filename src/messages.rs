//! Human-readable messages for invalid input.

use std::fmt::Display;

/// Message for a field that must be present but was empty or missing.
///
/// ```
/// use deck_rs::messages::required_field_missing;
///
/// assert_eq!(required_field_missing("id"), "id is required");
/// ```
pub fn required_field_missing(field: &str) -> String {
    format!("{field} is required")
}

/// Message for a value that does not belong to the set a field accepts.
///
/// ```
/// use deck_rs::messages::unknown_value;
///
/// assert_eq!(unknown_value("suit", "stars"), "Unrecognized suit: 'stars'");
/// ```
pub fn unknown_value(field: &str, value: impl Display) -> String {
    format!("Unrecognized {field}: '{value}'")
}
