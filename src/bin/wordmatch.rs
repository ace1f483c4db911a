//! wordmatch CLI binary.

use std::process;

use clap::Parser;
use wordmatch::cli::{WordMatchArgs, execute_command};

fn main() {
    // Parse command line arguments using clap
    let args = WordMatchArgs::parse();

    init_logging(args.verbosity());

    // Execute the command
    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

/// `WORDMATCH_LOG` wins; otherwise the level follows -v/-q.
fn init_logging(verbosity: u8) {
    let default_filter = match verbosity {
        0 => "error",
        1 => "warn",
        2 => "info",
        _ => "debug",
    };
    let env = env_logger::Env::default().filter_or("WORDMATCH_LOG", default_filter);
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp_millis()
        .try_init();
}
