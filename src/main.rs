//! Debugging example - recursive Fibonacci breakpoint target
//!
//! Prints a startup banner, one line per sample input, and a completion
//! banner. Point a debugger at this binary and break on the marked lines.

use clap::Parser;
use debug_example::{cli, commands::RunArgs, common::logging};

#[derive(Parser)]
#[command(name = "debug-example", about = "Recursive Fibonacci debugging example")]
#[command(version, long_about = None)]
struct Cli {
    #[command(flatten)]
    args: RunArgs,
}

fn main() {
    logging::init_cli();

    let cli = Cli::parse();

    // BREAKPOINT_MARKER: main_dispatch
    if let Err(e) = cli::dispatch(cli.args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
