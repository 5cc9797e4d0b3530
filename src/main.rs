//! cdr-gen CLI entry point
//!
//! Synthetic call detail record generator

use cdr_gen::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
