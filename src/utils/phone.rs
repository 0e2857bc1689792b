//! Phone-number normalization and display formatting.

use crate::errors::{AppError, AppResult};

/// Strip everything but digits.
pub fn parse_digits(val: &str) -> String {
    val.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Format a digit string as `010-1234-5678` (3-4-4 grouping).
pub fn format_phone(digits: &str) -> String {
    match digits.len() {
        0..=3 => digits.to_string(),
        4..=7 => format!("{}-{}", &digits[..3], &digits[3..]),
        _ => {
            let end = digits.len().min(11);
            format!("{}-{}-{}", &digits[..3], &digits[3..7], &digits[7..end])
        }
    }
}

/// Normalize a user-supplied phone number; mobile numbers carry 10 or 11
/// digits.
pub fn normalize(val: &str) -> AppResult<String> {
    let digits = parse_digits(val);
    if digits.len() < 10 || digits.len() > 11 {
        return Err(AppError::InvalidPhone(val.to_string()));
    }
    Ok(digits)
}
