//! rscss-check-rs: RSCSS class-naming linter for CSS.

mod cli;
mod config;
mod orchestrator;
mod output;
mod stylesheet;

use clap::Parser;
use cli::Args;
use miette::Result;

fn main() -> Result<()> {
    let args = Args::parse();

    match orchestrator::run(args) {
        Ok(summary) => {
            if summary.error_count > 0 {
                std::process::exit(1);
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
