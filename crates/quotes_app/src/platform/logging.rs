//! Platform logging initialization for the quote manager.
//!
//! Logs go to `<data-dir>/quotes.log` by default so the terminal stays
//! reserved for the quote display.

use quotes_logging::quotes_info;

use super::config::Settings;

pub fn initialize(settings: &Settings) {
    if !quotes_logging::initialize(
        settings.log_destination,
        settings.log_level,
        &settings.log_path,
    ) {
        eprintln!("Warning: logging is disabled");
        return;
    }
    quotes_info!(
        "Quote manager {} starting; data dir {:?}",
        env!("CARGO_PKG_VERSION"),
        settings.data_dir
    );
}
