//! Per-invocation fee request and the inputs each mode requires from it

use ethereum_types::U256;

use crate::error::{FeeError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeeMode {
    /// Badge discount on the protocol fee
    Discount,
    /// Treasury / referrer / user split
    FeesWithReferrer,
    /// Fee / user split, fee word prefixed with 0x
    FeesSimple,
}

impl FeeMode {
    pub fn name(&self) -> &'static str {
        match self {
            FeeMode::Discount => "discount",
            FeeMode::FeesWithReferrer => "fees-with-referrer",
            FeeMode::FeesSimple => "fees-simple",
        }
    }

    pub fn missing_argument_message(&self) -> &'static str {
        match self {
            FeeMode::Discount => "Both amount, badges_percentage and protocol_fees are required.",
            FeeMode::FeesWithReferrer => "All arguments are required.",
            FeeMode::FeesSimple => "Both fees_bps and amount are required.",
        }
    }
}

impl std::fmt::Display for FeeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Raw inputs as supplied on the command line. Any field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeeRequest {
    pub amount: Option<U256>,
    pub fees_bps: Option<U256>,
    pub referrer_fees_bps: Option<U256>,
    pub badges_percentage_bps: Option<U256>,
    /// Protocol fee *rate* in bps, not an absolute amount.
    pub protocol_fees: Option<U256>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscountInputs {
    pub amount: U256,
    pub badges_percentage_bps: U256,
    pub protocol_fees_bps: U256,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferrerSplitInputs {
    pub amount: U256,
    pub fees_bps: U256,
    pub referrer_fees_bps: U256,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimpleSplitInputs {
    pub amount: U256,
    pub fees_bps: U256,
}

impl FeeRequest {
    pub fn discount_inputs(&self) -> Result<DiscountInputs> {
        match (self.amount, self.badges_percentage_bps, self.protocol_fees) {
            (Some(amount), Some(badges_percentage_bps), Some(protocol_fees_bps)) => {
                Ok(DiscountInputs { amount, badges_percentage_bps, protocol_fees_bps })
            }
            _ => Err(FeeError::MissingArgument { mode: FeeMode::Discount }),
        }
    }

    pub fn referrer_split_inputs(&self) -> Result<ReferrerSplitInputs> {
        match (self.fees_bps, self.amount, self.referrer_fees_bps) {
            (Some(fees_bps), Some(amount), Some(referrer_fees_bps)) => {
                Ok(ReferrerSplitInputs { amount, fees_bps, referrer_fees_bps })
            }
            _ => Err(FeeError::MissingArgument { mode: FeeMode::FeesWithReferrer }),
        }
    }

    pub fn simple_split_inputs(&self) -> Result<SimpleSplitInputs> {
        match (self.fees_bps, self.amount) {
            (Some(fees_bps), Some(amount)) => Ok(SimpleSplitInputs { amount, fees_bps }),
            _ => Err(FeeError::MissingArgument { mode: FeeMode::FeesSimple }),
        }
    }
}
