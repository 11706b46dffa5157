mod cli;
mod error;
mod export;
mod logging;

use self::cli::{Cli, Commands};
use self::error::Error;
use clap::Parser;

fn main() {
    if let Err(e) = run() {
        if e.is_logger() {
            eprintln!("{e}");
        } else {
            log::error!("{e}");
        }
        std::process::exit(1);
    }
}

fn run() -> Result<(), Error> {
    logging::init()?;

    let cli = Cli::parse();

    match &cli.command {
        Commands::Export(args) => export::export(args),
    }
}
