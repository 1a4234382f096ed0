// WolframAlpha Launcher - Systemd-Style Logger
// Copyright (C) 2025 Akaere Networks
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Systemd-style logging for the plugin and its command-line host
//!
//! Output goes to stderr so suggestion lists printed on stdout stay clean.
//! Two formats are supported:
//! - terminal: `2025-01-01 12:00:00 [INFO] message`, colored when stderr is a TTY
//! - journald: `PRIORITY=`/`MESSAGE=` records for `systemd-cat` style capture
//!
//! Logging before [`Logger::init`] is a silent no-op, so library users who never
//! initialize the logger get no output.

use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

/// Log levels following systemd priority conventions
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum LogLevel {
    Emergency = 0,
    Alert = 1,
    Critical = 2,
    Error = 3,
    Warning = 4,
    Notice = 5,
    Info = 6,
    Debug = 7,
}

impl LogLevel {
    pub fn priority(self) -> u8 {
        self as u8
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Emergency => "EMERG",
            LogLevel::Alert => "ALERT",
            LogLevel::Critical => "CRIT",
            LogLevel::Error => "ERR",
            LogLevel::Warning => "WARNING",
            LogLevel::Notice => "NOTICE",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }

    fn color_code(self) -> &'static str {
        match self {
            LogLevel::Emergency => "\x1b[1;41m",
            LogLevel::Alert => "\x1b[1;91m",
            LogLevel::Critical => "\x1b[1;31m",
            LogLevel::Error => "\x1b[31m",
            LogLevel::Warning => "\x1b[33m",
            LogLevel::Notice => "\x1b[36m",
            LogLevel::Info => "\x1b[32m",
            LogLevel::Debug => "\x1b[37m",
        }
    }
}

/// Logger configuration
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    /// Least severe level that is still written
    pub min_level: LogLevel,
    pub use_colors: bool,
    pub include_timestamp: bool,
    /// Append the emitting module path (terminal) or `CODE_FILE=` (journald)
    pub include_target: bool,
    pub journald_format: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            min_level: LogLevel::Info,
            use_colors: atty::is(atty::Stream::Stderr),
            include_timestamp: true,
            include_target: false,
            journald_format: false,
        }
    }
}

static LOGGER: Mutex<Option<Logger>> = Mutex::new(None);

#[derive(Debug)]
pub struct Logger {
    config: LoggerConfig,
}

impl Logger {
    pub fn new(config: LoggerConfig) -> Self {
        Self { config }
    }

    /// Install the global logger. Fails if one is already installed.
    pub fn init(config: LoggerConfig) -> Result<(), LoggerError> {
        let mut global = LOGGER.lock().map_err(|_| LoggerError::InitError)?;
        if global.is_some() {
            return Err(LoggerError::AlreadyInitialized);
        }
        *global = Some(Self::new(config));
        Ok(())
    }

    pub fn should_log(&self, level: LogLevel) -> bool {
        level <= self.config.min_level
    }

    pub fn log(&self, level: LogLevel, target: &str, message: &str) {
        if !self.should_log(level) {
            return;
        }
        eprintln!("{}", self.format(level, target, message, Self::now()));
    }

    fn now() -> Option<u64> {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .ok()
            .map(|d| d.as_secs())
    }

    fn format(&self, level: LogLevel, target: &str, message: &str, now: Option<u64>) -> String {
        let timestamp = if self.config.include_timestamp { now } else { None };
        if self.config.journald_format {
            self.format_journald(level, target, message, timestamp)
        } else {
            self.format_terminal(level, target, message, timestamp)
        }
    }

    fn format_journald(
        &self,
        level: LogLevel,
        target: &str,
        message: &str,
        timestamp: Option<u64>
    ) -> String {
        let mut output = format!("PRIORITY={}\nMESSAGE={}\n", level.priority(), message);

        if self.config.include_target && !target.is_empty() {
            output.push_str(&format!("CODE_FILE={}\n", target));
        }
        if let Some(ts) = timestamp {
            // journald expects microseconds
            output.push_str(&format!("_SOURCE_REALTIME_TIMESTAMP={}\n", ts * 1_000_000));
        }
        output.push_str("SYSLOG_IDENTIFIER=wolfram-launcher\n");

        output
    }

    fn format_terminal(
        &self,
        level: LogLevel,
        target: &str,
        message: &str,
        timestamp: Option<u64>
    ) -> String {
        let mut output = String::new();

        if let Some(ts) = timestamp {
            let datetime = chrono::DateTime::from_timestamp(ts as i64, 0)
                .unwrap_or_default()
                .format("%Y-%m-%d %H:%M:%S");
            output.push_str(&format!("{} ", datetime));
        }

        if self.config.use_colors {
            output.push_str(&format!("{}[{}]\x1b[0m ", level.color_code(), level.as_str()));
        } else {
            output.push_str(&format!("[{}] ", level.as_str()));
        }

        if self.config.include_target && !target.is_empty() {
            output.push_str(&format!("{}: ", target));
        }
        output.push_str(message);

        output
    }
}

/// Write through the global logger, if any
pub fn log_with_level(level: LogLevel, target: &str, message: &str) {
    if let Ok(guard) = LOGGER.lock() {
        if let Some(ref logger) = *guard {
            logger.log(level, target, message);
        }
    }
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        $crate::core::logger::log_with_level($crate::core::logger::LogLevel::Error, module_path!(), &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        $crate::core::logger::log_with_level($crate::core::logger::LogLevel::Warning, module_path!(), &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_notice {
    ($($arg:tt)*) => {
        $crate::core::logger::log_with_level($crate::core::logger::LogLevel::Notice, module_path!(), &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        $crate::core::logger::log_with_level($crate::core::logger::LogLevel::Info, module_path!(), &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        $crate::core::logger::log_with_level($crate::core::logger::LogLevel::Debug, module_path!(), &format!($($arg)*))
    };
}

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    #[error("Logger already initialized")]
    AlreadyInitialized,
    #[error("Failed to initialize logger")]
    InitError,
}

/// Initialize the global logger from command-line flags
pub fn init_from_args(debug: bool, trace: bool, journald: bool) -> Result<(), LoggerError> {
    let min_level = if debug || trace { LogLevel::Debug } else { LogLevel::Info };

    Logger::init(LoggerConfig {
        min_level,
        use_colors: atty::is(atty::Stream::Stderr) && !journald,
        include_timestamp: !journald,
        include_target: trace,
        journald_format: journald,
    })
}
