use clap::Parser;
use roster::cli::{self, Cli};
use roster::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init(logging::DEFAULT_FILTER);
    cli::run(Cli::parse()).await
}
