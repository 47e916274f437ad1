use anyhow::Result;
use clap::Parser;

use repo_audit::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}
