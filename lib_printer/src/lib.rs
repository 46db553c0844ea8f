//! Console output shared by every crate in the workspace.
//!
//! `out!` is for lines the player is meant to read and is always printed.
//! `info!`, `warn!` and `error!` are diagnostics, prefixed with their level and
//! filtered by the process-wide [`Level`] set through [`set_level`].

use serde::Deserialize;
use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};

#[macro_export]
macro_rules! out {
    ($($arg:tt)*) => ($crate::out_impl(format!($($arg)*)))
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => ($crate::log_impl($crate::Level::Info, format!($($arg)*)))
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => ($crate::log_impl($crate::Level::Warn, format!($($arg)*)))
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => ($crate::log_impl($crate::Level::Error, format!($($arg)*)))
}

/// How chatty the diagnostics are. Each level includes the ones before it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Quiet = 0,
    Error = 1,
    Warn = 2,
    Info = 3,
}

impl Default for Level {
    fn default() -> Self {
        Level::Info
    }
}

impl Level {
    fn from_u8(raw: u8) -> Self {
        match raw {
            0 => Level::Quiet,
            1 => Level::Error,
            2 => Level::Warn,
            _ => Level::Info,
        }
    }

    fn prefix(self) -> &'static str {
        match self {
            Level::Quiet => "",
            Level::Error => "[Error]",
            Level::Warn => "[Warn]",
            Level::Info => "[Info]",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Level::Quiet => "quiet",
            Level::Error => "error",
            Level::Warn => "warn",
            Level::Info => "info",
        };

        write!(f, "{}", name)
    }
}

static MAX_LEVEL: AtomicU8 = AtomicU8::new(Level::Info as u8);

/// Sets the most verbose level that still gets printed.
pub fn set_level(level: Level) {
    MAX_LEVEL.store(level as u8, Ordering::Relaxed);
}

fn level() -> Level {
    Level::from_u8(MAX_LEVEL.load(Ordering::Relaxed))
}

/// True if a message at `level` would currently be printed.
pub fn enabled(level: Level) -> bool {
    level != Level::Quiet && level <= self::level()
}

#[cfg(not(test))]
pub fn out_impl(s: String) {
    println!("{}", s);
}

#[cfg(test)]
pub fn out_impl(_s: String) {}

#[cfg(not(test))]
pub fn log_impl(level: Level, s: String) {
    if !enabled(level) {
        return;
    }

    match level {
        Level::Error => eprintln!("{} {}", level.prefix(), s),
        _ => println!("{} {}", level.prefix(), s),
    }
}

#[cfg(test)]
pub fn log_impl(level: Level, s: String) {
    let _ = (level.prefix(), s);
}
