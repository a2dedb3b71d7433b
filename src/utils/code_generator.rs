//! Short code generation.
//!
//! A short code is the CRC-32 (IEEE) checksum of the long URL's UTF-8 bytes,
//! written in base 62. The same URL always yields the same code, and two URLs
//! with the same checksum share a code.

/// Base-62 digits in value order: `a-z`, then `A-Z`, then `0-9`.
const ALPHABET: &[u8; 62] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Longest possible encoding of a `u32` (62^6 > 2^32).
const MAX_DIGITS: usize = 6;

/// Encodes a checksum in base 62, most significant digit first.
///
/// No padding is applied, and `0` encodes to the empty string.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(base62_encode(62), "ba");
/// assert_eq!(base62_encode(0), "");
/// ```
pub fn base62_encode(mut value: u32) -> String {
    let mut digits = Vec::with_capacity(MAX_DIGITS);

    while value > 0 {
        digits.push(ALPHABET[(value % 62) as usize]);
        value /= 62;
    }

    digits.iter().rev().map(|&b| b as char).collect()
}

/// Derives the short code for a long URL.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(encode_short_code("http://www.nationalreview.com"), "bs1I92");
/// ```
pub fn encode_short_code(long_url: &str) -> String {
    base62_encode(crc32fast::hash(long_url.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base62_vectors() {
        let cases = [
            (14, "o"),
            (62, "ba"),
            (3843, "99"),
            (1569087, "gKl1"),
            (384, "gm"),
        ];

        for (value, expected) in cases {
            assert_eq!(base62_encode(value), expected, "input {}", value);
        }
    }

    #[test]
    fn test_base62_zero_is_empty() {
        assert_eq!(base62_encode(0), "");
    }

    #[test]
    fn test_base62_single_digits() {
        assert_eq!(base62_encode(1), "b");
        assert_eq!(base62_encode(25), "z");
        assert_eq!(base62_encode(26), "A");
        assert_eq!(base62_encode(61), "9");
    }

    #[test]
    fn test_base62_max_fits_in_six_digits() {
        let code = base62_encode(u32::MAX);
        assert_eq!(code.len(), MAX_DIGITS);
        assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_encode_short_code_vectors() {
        let cases = [
            ("hello", "9x58c"),
            ("goodbye", "pyRkS"),
            ("welcome to fallujah", "erw1HB"),
            ("http://www.nationalreview.com", "bs1I92"),
            ("reddit.com", "d23wrT"),
            ("news.ycombinator.com", "bB40lN"),
            ("github.com", "d1Ymny"),
        ];

        for (input, expected) in cases {
            assert_eq!(encode_short_code(input), expected, "input {:?}", input);
        }
    }

    #[test]
    fn test_encode_short_code_is_deterministic() {
        let url = "https://example.com/some/long/path?with=query";
        let first = encode_short_code(url);

        for _ in 0..100 {
            assert_eq!(encode_short_code(url), first);
        }
    }

    #[test]
    fn test_encode_empty_string() {
        // CRC-32 of no bytes is 0.
        assert_eq!(encode_short_code(""), "");
    }
}
