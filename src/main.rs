use anyhow::Result;
use clap::Parser;
use petrichor::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    petrichor::run(cli).await
}
