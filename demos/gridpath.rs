//! Shortest path on an ASCII layout.
//!
//! Run: cargo run --bin gridpath -- demos/layouts/rooms.txt

use clap::Parser;
use gridpath_board::Search;
use gridpath_demos::{Cli, run};

fn main() {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .init();

    let mut out = std::io::stdout().lock();
    match run(&cli, &mut out) {
        Ok(Search::Skipped) => std::process::exit(2),
        Ok(_) => {}
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
