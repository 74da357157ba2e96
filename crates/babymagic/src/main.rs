// Author: Dustin Pilgrim
// License: MIT

mod cli;
mod config;
mod logging;
mod paths;
mod print;
mod run;

use clap::Parser;
use eventline::warn;

use crate::cli::Args;
use crate::config::BabyMagicConfig;

fn main() {
    let args = Args::parse();

    // init logging first
    let log_path = args
        .log_file
        .clone()
        .unwrap_or_else(|| paths::default_log_path("babymagic.log"));

    if let Err(e) = logging::init_logging(&log_path, args.verbose) {
        // logging should never block normal usage
        eprintln!("babymagic: failed to init logging: {e}");
    }

    let cfg = match config::load(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            warn!("{e}; using defaults");
            eprintln!("babymagic: {e}; using defaults");
            BabyMagicConfig::default()
        }
    };

    if let Err(e) = run::run(args, &cfg) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
