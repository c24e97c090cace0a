use std::{env, sync::OnceLock};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Off,
    Warn,
    Debug,
    Trace,
}

fn level() -> LogLevel {
    static LEVEL: OnceLock<LogLevel> = OnceLock::new();
    *LEVEL.get_or_init(|| match env::var("APPMAP_LOG").as_deref() {
        Ok("warn") => LogLevel::Warn,
        Ok("debug") => LogLevel::Debug,
        Ok("trace") => LogLevel::Trace,
        _ => LogLevel::Off,
    })
}

/// Log a message at the given level. The closure is only evaluated when the level is enabled, so
/// callers can interpolate freely on hot paths.
pub fn log<F>(log_level: LogLevel, msg: F)
where
    F: FnOnce() -> String,
{
    if log_level <= level() && level() != LogLevel::Off {
        eprintln!("[{:?}] {}", log_level, msg());
    }
}
