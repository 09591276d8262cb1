use colored::control::set_override;
use env_logger::Builder;
use log::LevelFilter;

/// Log level used when `RUST_LOG` does not say otherwise.
pub fn level_filter(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

pub fn init_logging(verbose: bool, no_color: bool) {
    // Disable colors globally if requested
    if no_color {
        set_override(false);
    }

    Builder::new()
        .filter_level(level_filter(verbose))
        .parse_default_env()
        .format_timestamp(None)
        .init();
}
