//! Fee and discount computations.
//!
//! Three modes, each a pure single-shot function from validated inputs to a
//! result record whose `encode` produces the exact fixture line.

use ethereum_types::U256;
use tracing::debug;

use crate::constants::BPS_PRECISION;
use crate::encoding::{encode_prefixed_word, encode_word, encode_words};
use crate::error::Result;
use crate::math::{apply_bps, badge_discount_bps, safe_sub};
use crate::request::{
    DiscountInputs, FeeMode, FeeRequest, ReferrerSplitInputs, SimpleSplitInputs,
};

/// Protocol fee after the badge discount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscountResult {
    pub protocol_fee_amount: U256,
    pub discount_bps: U256,
    pub discounted_amount: U256,
}

impl DiscountResult {
    pub fn encode(&self) -> String {
        encode_word(self.discounted_amount)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferrerSplit {
    pub fees: U256,
    pub treasury_fees: U256,
    pub referrer_fees: U256,
    pub amount_left: U256,
}

impl ReferrerSplit {
    /// treasury, referrer, amount left; 192 hex chars.
    pub fn encode(&self) -> String {
        encode_words(&[self.treasury_fees, self.referrer_fees, self.amount_left])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimpleSplit {
    pub fees: U256,
    pub amount_left: U256,
}

impl SimpleSplit {
    /// `0x` + fees + amount left; 130 chars.
    pub fn encode(&self) -> String {
        format!("{}{}", encode_prefixed_word(self.fees), encode_word(self.amount_left))
    }
}

pub struct FeeCalculator;

impl FeeCalculator {
    /// Mode A. `protocol_fees_bps` is a rate; the fee amount is derived from it first.
    pub fn discount_on_fees(inputs: &DiscountInputs) -> Result<DiscountResult> {
        let protocol_fee_amount = apply_bps(inputs.amount, inputs.protocol_fees_bps)?;
        let discount_bps = badge_discount_bps(inputs.badges_percentage_bps)?;

        let kept_bps = safe_sub(U256::from(BPS_PRECISION), discount_bps)?;
        let discounted_amount = apply_bps(protocol_fee_amount, kept_bps)?;

        debug!(
            amount = %inputs.amount,
            protocol_fee_amount = %protocol_fee_amount,
            discount_bps = %discount_bps,
            discounted_amount = %discounted_amount,
            "Computed badge discount"
        );

        Ok(DiscountResult {
            protocol_fee_amount,
            discount_bps,
            discounted_amount,
        })
    }

    /// Mode B.
    pub fn split_with_referrer(inputs: &ReferrerSplitInputs) -> Result<ReferrerSplit> {
        let fees = apply_bps(inputs.amount, inputs.fees_bps)?;
        let referrer_fees = apply_bps(fees, inputs.referrer_fees_bps)?;
        let treasury_fees = safe_sub(fees, referrer_fees)?;
        let amount_left = safe_sub(inputs.amount, fees)?;

        debug!(
            amount = %inputs.amount,
            fees = %fees,
            treasury_fees = %treasury_fees,
            referrer_fees = %referrer_fees,
            amount_left = %amount_left,
            "Computed referrer split"
        );

        Ok(ReferrerSplit {
            fees,
            treasury_fees,
            referrer_fees,
            amount_left,
        })
    }

    /// Mode C.
    pub fn split_simple(inputs: &SimpleSplitInputs) -> Result<SimpleSplit> {
        let fees = apply_bps(inputs.amount, inputs.fees_bps)?;
        let amount_left = safe_sub(inputs.amount, fees)?;

        debug!(
            amount = %inputs.amount,
            fees = %fees,
            amount_left = %amount_left,
            "Computed simple split"
        );

        Ok(SimpleSplit { fees, amount_left })
    }

    /// Validate the request for `mode`, compute, and return the encoded fixture line.
    pub fn compute(mode: FeeMode, request: &FeeRequest) -> Result<String> {
        match mode {
            FeeMode::Discount => {
                Self::discount_on_fees(&request.discount_inputs()?).map(|r| r.encode())
            }
            FeeMode::FeesWithReferrer => {
                Self::split_with_referrer(&request.referrer_split_inputs()?).map(|r| r.encode())
            }
            FeeMode::FeesSimple => {
                Self::split_simple(&request.simple_split_inputs()?).map(|r| r.encode())
            }
        }
    }
}
