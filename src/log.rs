//! Logger setup for the command line tool.

use log::LevelFilter;

/// Initializes `env_logger` at `Info` level, or `Debug` if `verbose` is set. `RUST_LOG` overrides both.
pub fn init_logger(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    if builder.try_init().is_err() {
        log::debug!("logger already initialized");
    }
}
