// Precision
pub const BPS_PRECISION: u64 = 10_000; // Basis points

// Badge discount: 0.69 * badges_percentage, kept exact as 69 / 100
pub const BADGE_DISCOUNT_NUMERATOR: u64 = 69;
pub const BADGE_DISCOUNT_DENOMINATOR: u64 = 100;
pub const MAX_DISCOUNT_BPS: u64 = 6_900; // 69%

// Encoding
pub const HEX_WORD_WIDTH: usize = 64; // 256-bit word
pub const HEX_PREFIX: &str = "0x";
