mod cli;
mod config;
mod convert;
mod grid_cmd;
mod house_cmd;
mod logging;
mod season_cmd;
mod year_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = config::load(cli.config.as_deref())?;
    match cli.command {
        Command::Grid(args) => grid_cmd::run(args, &config),
        Command::Season(args) => season_cmd::run(args, &config),
        Command::House(args) => house_cmd::run_house(args, &config),
        Command::Houses(args) => house_cmd::run_houses(args, &config),
        Command::Year(args) => year_cmd::run(args),
    }
}
