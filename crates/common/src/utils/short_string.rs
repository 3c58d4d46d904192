//! Cairo short strings: text of at most 31 characters packed into one felt.

/// Maximum number of characters that fit in a single felt.
pub const TEXT_TO_FELT_MAX_LEN: usize = 31;

/// Length is counted in characters, not UTF-8 bytes.
pub fn is_short_string(value: &str) -> bool {
    value.chars().count() <= TEXT_TO_FELT_MAX_LEN
}

/// Text that is too long for one felt and is sent as a packed felt sequence.
pub fn is_long_text(value: &str) -> bool {
    !is_short_string(value)
}
