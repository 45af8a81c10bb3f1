//! Fixed-width hex encoding of 256-bit words and decimal input parsing

use ethereum_types::U256;

use crate::constants::{HEX_PREFIX, HEX_WORD_WIDTH};
use crate::error::{FeeError, Result};

/// Encode a value as exactly 64 lowercase hex characters, left zero-padded, no prefix.
pub fn encode_word(value: U256) -> String {
    // Two hex digits per byte
    let mut bytes = [0u8; HEX_WORD_WIDTH / 2];
    value.to_big_endian(&mut bytes);
    hex::encode(bytes)
}

/// Same as [`encode_word`] with a leading `0x`.
pub fn encode_prefixed_word(value: U256) -> String {
    format!("{}{}", HEX_PREFIX, encode_word(value))
}

/// Concatenate words without separators, in the order given.
pub fn encode_words(values: &[U256]) -> String {
    values.iter().map(|value| encode_word(*value)).collect()
}

/// Parse a non-negative decimal integer that fits in 256 bits.
pub fn parse_u256(input: &str) -> Result<U256> {
    let digits = input.trim();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FeeError::InvalidInteger { value: input.to_string() });
    }

    U256::from_dec_str(digits).map_err(|_| FeeError::InvalidInteger { value: input.to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_word_is_fixed_width() {
        let encoded = encode_word(U256::from(6_550u64));
        assert_eq!(encoded.len(), HEX_WORD_WIDTH);
        assert_eq!(
            encoded,
            "0000000000000000000000000000000000000000000000000000000000001996"
        );

        assert_eq!(encode_word(U256::zero()), "0".repeat(HEX_WORD_WIDTH));
        assert_eq!(encode_word(U256::max_value()), "f".repeat(HEX_WORD_WIDTH));
    }

    #[test]
    fn test_encode_word_is_lowercase() {
        let encoded = encode_word(U256::from(0xABCDEFu64));
        assert!(encoded.ends_with("abcdef"));
        assert!(!encoded.chars().any(|c| c.is_ascii_uppercase()));
    }

    #[test]
    fn test_encode_prefixed_word() {
        let encoded = encode_prefixed_word(U256::from(250u64));
        assert_eq!(encoded.len(), HEX_WORD_WIDTH + 2);
        assert!(encoded.starts_with("0x"));
        assert!(encoded.ends_with("fa"));
    }

    #[test]
    fn test_encode_words_concatenates_in_order() {
        let encoded = encode_words(&[U256::one(), U256::from(2u64)]);
        assert_eq!(encoded.len(), 2 * HEX_WORD_WIDTH);
        assert_eq!(&encoded[..HEX_WORD_WIDTH], encode_word(U256::one()));
        assert_eq!(&encoded[HEX_WORD_WIDTH..], encode_word(U256::from(2u64)));
    }

    #[test]
    fn test_parse_u256() {
        assert_eq!(parse_u256("1000000").unwrap(), U256::from(1_000_000u64));
        assert_eq!(parse_u256(" 42 ").unwrap(), U256::from(42u64));
        assert_eq!(parse_u256("0").unwrap(), U256::zero());

        for bad in ["", "-5", "1.5", "abc", "0x10"] {
            assert_eq!(
                parse_u256(bad),
                Err(FeeError::InvalidInteger { value: bad.to_string() })
            );
        }
    }

    #[test]
    fn test_parse_u256_rejects_values_above_256_bits() {
        // 2^256
        let too_big = "115792089237316195423570985008687907853269984665640564039457584007913129639936";
        assert!(parse_u256(too_big).is_err());
    }
}
