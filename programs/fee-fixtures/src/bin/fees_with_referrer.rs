use clap::Parser;
use fee_fixtures::cli::{self, FeesWithReferrerArgs};
use fee_fixtures::{logging, FeeMode};

fn main() -> anyhow::Result<()> {
    logging::init_subscriber();

    let args = FeesWithReferrerArgs::parse();
    cli::run(FeeMode::FeesWithReferrer, &args.into(), &mut std::io::stdout().lock())
}
