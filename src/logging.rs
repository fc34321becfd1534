//! Logging setup
//!
//! Progress messages are logged at info level and printed bare, so the
//! verbosity flags decide what reaches the terminal.

use log::{Level, LevelFilter};
use std::io::Write;

/// Log level for this crate given the verbosity flags
pub fn level_filter(verbose: bool, quiet: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    }
}

/// Filter directive applied when `RUST_LOG` is not set
///
/// Dependencies stay at `warn` so verbose mode shows only our own output.
pub fn default_filter(level: LevelFilter) -> String {
    let level = level.to_string().to_lowercase();
    format!("warn,conductr={level},conduct={level}")
}

/// Initialize the global logger
pub fn init(verbose: bool, quiet: bool) {
    let level = level_filter(verbose, quiet);

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter(level)))
        .format(|buf, record| match record.level() {
            Level::Info => writeln!(buf, "{}", record.args()),
            level => writeln!(buf, "{}: {}", level, record.args()),
        })
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_filter() {
        assert_eq!(level_filter(false, false), LevelFilter::Info);
        assert_eq!(level_filter(true, false), LevelFilter::Debug);
        assert_eq!(level_filter(false, true), LevelFilter::Warn);
    }

    #[test]
    fn test_default_filter() {
        assert_eq!(
            default_filter(LevelFilter::Debug),
            "warn,conductr=debug,conduct=debug"
        );
    }
}
