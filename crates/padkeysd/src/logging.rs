// Timestamped, level colored daemon log

use colored::{ColoredString, Colorize};
use fern::Dispatch;
use log::{Level, LevelFilter};

const TIMESTAMP_FORMAT: &str = "%Y.%m.%d %H:%M:%S";

/// Stamp and color a message for `level`.
///
/// Only called by the `print_*` macros after the level check, so disabled
/// levels never pay for the clock read or the formatting.
#[doc(hidden)]
pub fn decorate(level: Level, message: std::fmt::Arguments<'_>) -> ColoredString {
    let now = chrono::Local::now().format(TIMESTAMP_FORMAT);
    let line = format!("[{now}] {message}");
    match level {
        Level::Error => line.bright_red(),
        Level::Warn => line.bright_yellow(),
        Level::Info => line.normal(),
        Level::Debug | Level::Trace => line.dimmed(),
    }
}

#[doc(hidden)]
#[macro_export]
macro_rules! __print_at {
    ($level:expr, $($arg:tt)*) => {
        if log::log_enabled!($level) {
            let line = $crate::logging::decorate($level, format_args!($($arg)*));
            log::log!($level, "{line}");
        }
    };
}

#[macro_export]
macro_rules! print_error {
    ($($arg:tt)*) => { $crate::__print_at!(log::Level::Error, $($arg)*) };
}

#[macro_export]
macro_rules! print_warning {
    ($($arg:tt)*) => { $crate::__print_at!(log::Level::Warn, $($arg)*) };
}

#[macro_export]
macro_rules! print_info {
    ($($arg:tt)*) => { $crate::__print_at!(log::Level::Info, $($arg)*) };
}

#[macro_export]
macro_rules! print_debug {
    ($($arg:tt)*) => { $crate::__print_at!(log::Level::Debug, $($arg)*) };
}

/// Route daemon records to stdout. Other crates only get through on errors.
pub fn setup(verbose: bool, no_color: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    Dispatch::new()
        .level(LevelFilter::Error)
        .level_for("padkeysd", level)
        .chain(std::io::stdout())
        .apply()
        .expect("Unable to set up logger");

    if no_color {
        colored::control::set_override(false);
    }
}
