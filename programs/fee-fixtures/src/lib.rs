// Fee and discount fixture generator
// Exact basis-point arithmetic over 256-bit integers, hex encoded for external test suites

pub mod calculator;
pub mod cli;
pub mod constants;
pub mod encoding;
pub mod error;
pub mod logging;
pub mod math;
pub mod request;

pub use calculator::{DiscountResult, FeeCalculator, ReferrerSplit, SimpleSplit};
pub use error::{FeeError, Result};
pub use request::{FeeMode, FeeRequest};

pub use ethereum_types::U256;
