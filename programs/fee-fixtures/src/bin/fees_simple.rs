use clap::Parser;
use fee_fixtures::cli::{self, FeesSimpleArgs};
use fee_fixtures::{logging, FeeMode};

fn main() -> anyhow::Result<()> {
    logging::init_subscriber();

    let args = FeesSimpleArgs::parse();
    cli::run(FeeMode::FeesSimple, &args.into(), &mut std::io::stdout().lock())
}
