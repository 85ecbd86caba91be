//! Entry point for the gem5 stats/report/sweep tooling.

use clap::Parser;

use localidad::cli::{self, Cli};

fn main() {
    env_logger::init();

    let parsed = Cli::parse();
    if let Err(err) = cli::run(parsed) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
