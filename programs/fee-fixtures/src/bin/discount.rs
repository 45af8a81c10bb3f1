use clap::Parser;
use fee_fixtures::cli::{self, DiscountArgs};
use fee_fixtures::{logging, FeeMode};

fn main() -> anyhow::Result<()> {
    logging::init_subscriber();

    let args = DiscountArgs::parse();
    cli::run(FeeMode::Discount, &args.into(), &mut std::io::stdout().lock())
}
