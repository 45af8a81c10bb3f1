//! Command-line surface shared by the three fixture binaries.
//!
//! Every flag is optional at parse level so a missing input reaches the
//! mode's own validation, which prints a message on stdout and exits 0.

use std::io::Write;

use clap::Parser;
use ethereum_types::U256;
use tracing::info;

use crate::calculator::FeeCalculator;
use crate::encoding::parse_u256;
use crate::request::{FeeMode, FeeRequest};

/// Protocol fee after the badge discount, as one 64-char hex word
#[derive(Parser, Debug, Clone)]
#[command(name = "discount", version, long_about = None)]
pub struct DiscountArgs {
    /// Amount the protocol fee is taken from
    #[arg(long, value_parser = parse_u256)]
    pub amount: Option<U256>,

    /// Badges percentage in bps
    #[arg(long, value_parser = parse_u256)]
    pub badges_percentage: Option<U256>,

    /// Protocol fee rate in bps (a rate, not an amount)
    #[arg(long, value_parser = parse_u256)]
    pub protocol_fees: Option<U256>,
}

/// Treasury fees, referrer fees and amount left, as three 64-char hex words
#[derive(Parser, Debug, Clone)]
#[command(name = "fees-with-referrer", version, long_about = None)]
pub struct FeesWithReferrerArgs {
    /// Total fees in bps, split between treasury and referrer
    #[arg(long, value_parser = parse_u256)]
    pub fees_bps: Option<U256>,

    /// Amount of tokens the fees are taken from
    #[arg(long, value_parser = parse_u256)]
    pub amount: Option<U256>,

    /// Share of the fees given to the referrer, in bps
    #[arg(long, value_parser = parse_u256)]
    pub referrer_fees_bps: Option<U256>,
}

/// 0x-prefixed fees word followed by the amount-left word
#[derive(Parser, Debug, Clone)]
#[command(name = "fees-simple", version, long_about = None)]
pub struct FeesSimpleArgs {
    /// Fees in bps
    #[arg(long, value_parser = parse_u256)]
    pub fees_bps: Option<U256>,

    /// Amount of tokens the fees are taken from
    #[arg(long, value_parser = parse_u256)]
    pub amount: Option<U256>,
}

impl From<DiscountArgs> for FeeRequest {
    fn from(args: DiscountArgs) -> Self {
        FeeRequest {
            amount: args.amount,
            badges_percentage_bps: args.badges_percentage,
            protocol_fees: args.protocol_fees,
            ..Default::default()
        }
    }
}

impl From<FeesWithReferrerArgs> for FeeRequest {
    fn from(args: FeesWithReferrerArgs) -> Self {
        FeeRequest {
            amount: args.amount,
            fees_bps: args.fees_bps,
            referrer_fees_bps: args.referrer_fees_bps,
            ..Default::default()
        }
    }
}

impl From<FeesSimpleArgs> for FeeRequest {
    fn from(args: FeesSimpleArgs) -> Self {
        FeeRequest {
            amount: args.amount,
            fees_bps: args.fees_bps,
            ..Default::default()
        }
    }
}

/// Compute `mode` for `request` and write one newline-terminated line to `out`.
///
/// Missing inputs write the mode's message instead and still return `Ok`.
/// Arithmetic errors are returned.
pub fn run<W: Write>(mode: FeeMode, request: &FeeRequest, out: &mut W) -> anyhow::Result<()> {
    match FeeCalculator::compute(mode, request) {
        Ok(line) => writeln!(out, "{}", line)?,
        Err(err) if err.is_missing_argument() => {
            info!(mode = %mode, "Missing required arguments");
            writeln!(out, "{}", err)?;
        }
        Err(err) => return Err(err.into()),
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FeeError;

    fn run_to_string(mode: FeeMode, request: FeeRequest) -> anyhow::Result<String> {
        let mut out = Vec::new();
        run(mode, &request, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn test_parse_discount_flags() {
        let args = DiscountArgs::try_parse_from([
            "discount",
            "--amount",
            "1000000",
            "--badges-percentage",
            "5000",
            "--protocol-fees",
            "100",
        ])
        .unwrap();

        let output = run_to_string(FeeMode::Discount, args.into()).unwrap();
        assert_eq!(
            output,
            "0000000000000000000000000000000000000000000000000000000000001996\n"
        );
    }

    #[test]
    fn test_missing_flag_prints_message() {
        let args = FeesWithReferrerArgs::try_parse_from([
            "fees-with-referrer",
            "--fees-bps",
            "1000",
            "--amount",
            "10000",
        ])
        .unwrap();

        let output = run_to_string(FeeMode::FeesWithReferrer, args.into()).unwrap();
        assert_eq!(output, "All arguments are required.\n");
    }

    #[test]
    fn test_simple_split_line() {
        let args = FeesSimpleArgs::try_parse_from([
            "fees-simple",
            "--fees-bps",
            "250",
            "--amount",
            "10000",
        ])
        .unwrap();

        let output = run_to_string(FeeMode::FeesSimple, args.into()).unwrap();
        assert_eq!(output.len(), 131);
        assert!(output.starts_with("0x"));
        assert!(output.ends_with('\n'));
    }

    #[test]
    fn test_non_integer_flag_is_rejected_by_parser() {
        assert!(FeesSimpleArgs::try_parse_from(["fees-simple", "--amount", "ten"]).is_err());
        assert!(FeesSimpleArgs::try_parse_from(["fees-simple", "--amount", "-10"]).is_err());
    }

    #[test]
    fn test_arithmetic_error_is_returned() {
        let request = FeeRequest {
            amount: Some(U256::from(10_000u64)),
            fees_bps: Some(U256::from(20_000u64)),
            ..Default::default()
        };
        let mut out = Vec::new();
        let err = run(FeeMode::FeesSimple, &request, &mut out).unwrap_err();
        assert_eq!(err.downcast_ref::<FeeError>(), Some(&FeeError::Underflow));
        assert!(out.is_empty());
    }
}
