use pagegrab_core::logging;

mod cli;

use std::time::Instant;

fn main() {
    let start = Instant::now();

    // Initialize logging as early as possible; fall back to stderr if the
    // state dir is unwritable.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    // Parse CLI and run the batch.
    if let Err(err) = cli::run_from_args() {
        eprintln!("pagegrab error: {:#}", err);
        std::process::exit(1);
    }

    println!("\nProgram execution time: {:?}", start.elapsed());
}
