//! Load planner - axle weights, legal limits and pallet placement for trucks
//!
//! A CLI tool that checks a cargo layout against a vehicle's axle and GVM
//! limits, and places new cargo to keep the vehicle legal and balanced.

mod cli;
mod commands;
mod logging;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
