//! Human-readable byte sizes
//!
//! Parses strings like `"1GB"`, `"12 mb"` or `"512"` into a byte count using
//! binary multipliers.
//!
//! | Suffix | Multiplier |
//! |--------|------------|
//! | `kb` | 2^10 |
//! | `mb` | 2^20 |
//! | `gb` | 2^30 |
//! | none | 1 |
//!
//! Suffixes are case-insensitive and may be separated from the number by
//! whitespace. Unparseable or negative numbers yield 0, and so does a product
//! that overflows `u64`.

use crate::cast;
use crate::node::Node;

const KIB: u64 = 1 << 10;
const MIB: u64 = 1 << 20;
const GIB: u64 = 1 << 30;

/// Parse a size string into a number of bytes
///
/// # Examples
///
/// ```
/// use entity_core::size::parse_size_in_bytes;
///
/// assert_eq!(parse_size_in_bytes("1KB"), 1024);
/// assert_eq!(parse_size_in_bytes("12 mb"), 12 * 1024 * 1024);
/// assert_eq!(parse_size_in_bytes("512"), 512);
/// assert_eq!(parse_size_in_bytes("-5"), 0);
/// ```
pub fn parse_size_in_bytes(size: &str) -> u64 {
    let (number, multiplier) = split_unit(size.trim());
    let count = cast::to_i64(Some(&Node::from(number)));
    let count = u64::try_from(count).unwrap_or(0);
    count.checked_mul(multiplier).unwrap_or(0)
}

/// Separate the numeric part from a trailing unit
///
/// A unit is only recognized when the string ends in `b` and has at least
/// two characters before it; `"1B"` keeps its suffix and fails to parse.
fn split_unit(size: &str) -> (&str, u64) {
    let bytes = size.as_bytes();
    let Some((&last, rest)) = bytes.split_last() else {
        return (size, 1);
    };
    if !last.eq_ignore_ascii_case(&b'b') || rest.len() < 2 {
        return (size, 1);
    }
    let unit = rest[rest.len() - 1].to_ascii_lowercase();
    let multiplier = match unit {
        b'k' => KIB,
        b'm' => MIB,
        b'g' => GIB,
        _ => return (size[..size.len() - 1].trim(), 1),
    };
    (size[..size.len() - 2].trim(), multiplier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_multipliers() {
        assert_eq!(parse_size_in_bytes("1KB"), 1024);
        assert_eq!(parse_size_in_bytes("1MB"), 1_048_576);
        assert_eq!(parse_size_in_bytes("1GB"), 1_073_741_824);
    }

    #[test]
    fn test_bare_digits_are_bytes() {
        assert_eq!(parse_size_in_bytes("10"), 10);
        assert_eq!(parse_size_in_bytes("  512 "), 512);
    }

    #[test]
    fn test_lowercase_and_spaced_units() {
        assert_eq!(parse_size_in_bytes("12 mb"), 12 * MIB);
        assert_eq!(parse_size_in_bytes("3gB"), 3 * GIB);
        assert_eq!(parse_size_in_bytes("8 kb"), 8 * KIB);
    }

    #[test]
    fn test_plain_byte_suffix() {
        assert_eq!(parse_size_in_bytes("100b"), 100);
        assert_eq!(parse_size_in_bytes("100 B"), 100);
    }

    #[test]
    fn test_short_byte_suffix_not_recognized() {
        assert_eq!(parse_size_in_bytes("1B"), 0);
    }

    #[test]
    fn test_negative_clamps_to_zero() {
        assert_eq!(parse_size_in_bytes("-5"), 0);
        assert_eq!(parse_size_in_bytes("-5MB"), 0);
    }

    #[test]
    fn test_garbage_is_zero() {
        assert_eq!(parse_size_in_bytes(""), 0);
        assert_eq!(parse_size_in_bytes("lots"), 0);
        assert_eq!(parse_size_in_bytes("1TB"), 0);
    }

    #[test]
    fn test_overflow_clamps_to_zero() {
        assert_eq!(parse_size_in_bytes("9223372036854775807GB"), 0);
        assert_eq!(parse_size_in_bytes("8589934591GB"), 8_589_934_591 * GIB);
    }
}
