//! Numeric string helpers shared by the selector engine and the calldata
//! validator.

use num_bigint::{BigInt, BigUint};
use num_traits::Num;

/// Largest integer a JavaScript-style double can hold exactly (2^53 - 1).
pub const MAX_SAFE_INTEGER: i128 = 9_007_199_254_740_991;

/// True for `0x`-prefixed strings made only of hex digits.
pub fn is_hex(value: &str) -> bool {
    let digits = remove_hex_prefix(value);
    digits.len() < value.len() && digits.chars().all(|c| c.is_ascii_hexdigit())
}

/// True for non-empty strings made only of decimal digits.
pub fn is_string_whole_number(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
}

/// Parse a hex (`0x`) or decimal string, optionally signed, into a big integer.
pub fn to_bigint(value: &str) -> Option<BigInt> {
    let trimmed = value.trim();
    let (negative, body) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };

    let magnitude = if let Some(digits) = body.strip_prefix("0x").or_else(|| body.strip_prefix("0X")) {
        if digits.is_empty() {
            return None;
        }
        BigInt::from_str_radix(digits, 16).ok()?
    } else if is_string_whole_number(body) {
        BigInt::from_str_radix(body, 10).ok()?
    } else {
        return None;
    };

    Some(if negative { -magnitude } else { magnitude })
}

/// Format as a lowercase `0x` hex string without zero padding.
pub fn to_hex(value: &BigUint) -> String {
    format!("0x{}", value.to_str_radix(16))
}

/// Reinterpret a decimal or hex string as a `0x` hex string.
pub fn to_hex_string(value: &str) -> Option<String> {
    let parsed = to_bigint(value)?;
    let unsigned = parsed.to_biguint()?;
    Some(to_hex(&unsigned))
}

/// Strip a leading `0x`/`0X`, if any.
pub fn remove_hex_prefix(value: &str) -> &str {
    value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value)
}
