use anyhow::Result;
use clap::Parser;
use kassa::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}
