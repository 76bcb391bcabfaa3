use log::{LevelFilter, debug};
use simplelog::{ColorChoice, TermLogger, TerminalMode};

pub mod align;
mod config;
pub mod pairwise;

fn initialise_logging(log_level: LevelFilter) {
    // Multiple commands may run in the same process, e.g. in tests.
    if TermLogger::init(
        log_level,
        Default::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .is_err()
    {
        debug!("Logger was already initialised");
    }
}
