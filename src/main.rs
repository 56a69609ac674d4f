//! This is the main entry point for Rodada.

use rodada::cli;

fn main() {
    if let Err(e) = cli::parse(None) {
        eprintln!("Error: {e:?}");
        std::process::exit(1);
    }
}
