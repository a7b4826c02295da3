//! `heredity` binary entry point.

use clap::Parser;
use hd_core::cli::{self, Cli};

fn main() {
    let args = Cli::parse();
    cli::init_tracing(args.verbose);
    if let Err(err) = cli::run(&args) {
        eprintln!("heredity: {err}");
        std::process::exit(err.code() as i32);
    }
}
