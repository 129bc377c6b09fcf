use savelink_core::logging;

mod cli;

use crate::cli::Cli;

fn main() {
    let sink = logging::init();
    tracing::debug!("log sink: {}", sink);

    if let Err(err) = Cli::run_from_args() {
        eprintln!("savelink error: {:#}", err);
        std::process::exit(1);
    }
}
