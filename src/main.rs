use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = pidports::Cli::parse();
    pidports::run(cli)
}
