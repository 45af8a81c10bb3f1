use ethereum_types::{U256, U512};

use crate::constants::{
    BADGE_DISCOUNT_DENOMINATOR, BADGE_DISCOUNT_NUMERATOR, BPS_PRECISION, MAX_DISCOUNT_BPS,
};
use crate::error::{FeeError, Result};

/// floor(amount * bps / 10000)
///
/// The product is taken in 512 bits, so only a quotient that does not fit
/// in 256 bits is an overflow.
pub fn apply_bps(amount: U256, bps: U256) -> Result<U256> {
    let scaled = amount.full_mul(bps) / U512::from(BPS_PRECISION);
    U256::try_from(scaled).map_err(|_| FeeError::Overflow)
}

/// Discount rate earned by a badge percentage, capped at 69%.
pub fn badge_discount_bps(badges_percentage_bps: U256) -> Result<U256> {
    // Any badge percentage at or above 100% already earns the cap
    let badges = badges_percentage_bps.min(U256::from(BPS_PRECISION));
    let raw = badges
        .checked_mul(U256::from(BADGE_DISCOUNT_NUMERATOR))
        .ok_or(FeeError::Overflow)?
        / U256::from(BADGE_DISCOUNT_DENOMINATOR);

    Ok(raw.min(U256::from(MAX_DISCOUNT_BPS)))
}

pub fn safe_sub(a: U256, b: U256) -> Result<U256> {
    a.checked_sub(b).ok_or(FeeError::Underflow)
}
