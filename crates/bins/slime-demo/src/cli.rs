//! Logger setup for the demo binary.

use log::LevelFilter;
use std::time::{Duration, SystemTime};

/// Maps `--verbose` and `--log-level` to a level filter.
///
/// `--verbose` always wins and selects trace output. Otherwise 0 is errors
/// only and every step up adds one level, with anything above 3 meaning trace.
pub fn level_filter(verbose: bool, log_level: u8) -> LevelFilter {
    if verbose {
        return LevelFilter::Trace;
    }
    match log_level {
        0 => LevelFilter::Error,
        1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        3 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Formats a duration as `hours:minutes:seconds.millis`.
pub fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!(
        "{}:{}:{}.{:03}",
        secs / 3600,
        (secs / 60) % 60,
        secs % 60,
        elapsed.subsec_millis()
    )
}

/// First record written once the logger is up.
pub fn launch_message(name: &str, launch_time: SystemTime) -> String {
    format!(
        "{} launched at {} on {}.",
        name,
        chrono::DateTime::<chrono::Utc>::from(launch_time),
        std::env::consts::OS
    )
}

/// Installs `env_logger` as the global logger.
///
/// Records are prefixed with the time elapsed since `since` when it is set,
/// then the level and the crate the record came from. `RUST_LOG` still
/// refines the filter per module.
pub fn init_logging(since: Option<SystemTime>, filter: LevelFilter) {
    use std::io::Write;
    env_logger::builder()
        .filter_level(filter)
        .parse_default_env()
        .format(move |buf, record| {
            let origin = record
                .module_path()
                .and_then(|path| path.split("::").next())
                .unwrap_or("?");
            if let Some(since) = since {
                write!(buf, "{} ", format_elapsed(since.elapsed().unwrap_or_default()))?;
            }
            writeln!(buf, "{:5} [{}]: {}", record.level(), origin, record.args())
        })
        .init();
}
