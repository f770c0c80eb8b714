//! Validation utilities for configuration values
//!
//! Shared by the session configuration and the CLI argument parsers.

/// Validate that a count or size is strictly positive.
///
/// Out-of-range values are an error for the caller to surface; they are
/// never clamped.
pub fn validate_positive(value: u64, field: &str) -> Result<u64, String> {
    if value == 0 {
        Err(format!("{field} must be greater than 0"))
    } else {
        Ok(value)
    }
}

/// Parse a string as a strictly positive integer (clap value parser).
pub fn parse_positive(value: &str) -> Result<u64, String> {
    match value.parse::<u64>() {
        Ok(n) => validate_positive(n, "value"),
        Err(_) => Err(format!("'{value}' is not a valid positive integer")),
    }
}
