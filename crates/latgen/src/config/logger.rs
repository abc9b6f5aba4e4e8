use core::fmt::Display;
use std::{
    fs::{File, OpenOptions},
    io::{BufWriter, Write},
    path::PathBuf,
};

/// Configuration for enumeration logging.
///
/// Note that you can use multiple sinks at the same time.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct LoggerConfig {
    /// Path to the log file, if file logging is enabled.
    #[serde(default)]
    pub file: Option<PathBuf>,

    /// Whether to append to the log file (true) or overwrite it (false). Defaults to true.
    #[serde(default = "append_default")]
    pub append: bool,

    /// Whether to log to standard output.
    #[serde(default)]
    pub stdout: bool,

    /// Whether to log to standard error.
    #[serde(default)]
    pub stderr: bool,

    /// Optional forwarding to the `log` crate at the given level.
    #[serde(default)]
    pub log: Option<LogCrateLevel>,

    /// How much is logged.
    #[serde(default)]
    pub level: EnumerationLogLevel,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            file: None,
            append: true,
            stdout: false,
            stderr: false,
            log: None,
            level: EnumerationLogLevel::default(),
        }
    }
}

fn append_default() -> bool {
    true
}

/// Log levels using the `log` crate.
#[derive(
    Clone, Copy, Debug, Default, serde::Serialize, serde::Deserialize, Hash, PartialEq, Eq,
)]
pub enum LogCrateLevel {
    /// Logs informational messages.
    #[default]
    #[serde(rename = "info")]
    Info,

    /// Logs debugging messages.
    #[serde(rename = "debug")]
    Debug,

    /// Logs trace-level messages.
    #[serde(rename = "trace")]
    Trace,
}

/// Verbosity of the enumeration logger.
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum EnumerationLogLevel {
    /// Nothing is logged.
    #[serde(rename = "disabled")]
    Disabled,

    /// One summary line per enumeration.
    #[default]
    #[serde(rename = "basic")]
    Basic,

    /// The summary plus every excluded combination.
    #[serde(rename = "full")]
    Full,
}

/// Logger fanning enumeration messages out to every configured sink.
#[derive(Debug)]
pub struct Logger {
    sinks: Vec<LoggerKind>,
    level: EnumerationLogLevel,
}

impl Logger {
    /// Creates a logger from the configuration.
    ///
    /// When no sink is configured, messages go to the `log` crate at debug level.
    pub fn new(config: &LoggerConfig) -> Self {
        let mut sinks = Vec::new();

        if config.level == EnumerationLogLevel::Disabled {
            return Self {
                sinks,
                level: config.level,
            };
        }

        if let Some(file) = &config.file {
            match FileLogger::new(file, config.append) {
                Ok(logger) => sinks.push(LoggerKind::File(logger)),
                Err(err) => log::warn!("Can't open log file {}: {err}", file.display()),
            }
        }

        if config.stdout {
            sinks.push(LoggerKind::Stdout);
        }

        if config.stderr {
            sinks.push(LoggerKind::Stderr);
        }

        match config.log {
            Some(level) => sinks.push(LoggerKind::Log(level)),
            None if sinks.is_empty() => sinks.push(LoggerKind::Log(LogCrateLevel::Debug)),
            None => {}
        }

        Self {
            sinks,
            level: config.level,
        }
    }

    /// Logger that drops everything.
    pub fn disabled() -> Self {
        Self {
            sinks: Vec::new(),
            level: EnumerationLogLevel::Disabled,
        }
    }

    pub fn level(&self) -> EnumerationLogLevel {
        self.level
    }

    /// Logs the outcome of an enumeration run.
    pub fn log_summary<S: Display>(&mut self, msg: &S) {
        if self.level != EnumerationLogLevel::Disabled {
            self.log(msg);
        }
    }

    /// Logs a combination that was left out of the output.
    pub fn log_exclusion<S: Display>(&mut self, msg: &S) {
        if self.level == EnumerationLogLevel::Full {
            self.log(msg);
        }
    }

    fn log<S: Display>(&mut self, msg: &S) {
        if self.sinks.len() > 1 {
            let msg = msg.to_string();
            for sink in self.sinks.iter_mut() {
                sink.log(&msg);
            }
        } else if let Some(sink) = self.sinks.first_mut() {
            sink.log(msg);
        }
    }
}

/// Represents different types of sinks.
#[derive(Debug)]
enum LoggerKind {
    File(FileLogger),
    Stdout,
    Stderr,
    Log(LogCrateLevel),
}

impl LoggerKind {
    fn log<S: Display>(&mut self, msg: &S) {
        match self {
            LoggerKind::File(file_logger) => file_logger.log(msg),
            LoggerKind::Stdout => println!("{msg}"),
            LoggerKind::Stderr => eprintln!("{msg}"),
            LoggerKind::Log(level) => match level {
                LogCrateLevel::Info => log::info!("{msg}"),
                LogCrateLevel::Debug => log::debug!("{msg}"),
                LogCrateLevel::Trace => log::trace!("{msg}"),
            },
        }
    }
}

/// Logger that writes messages to a file.
#[derive(Debug)]
struct FileLogger {
    writer: BufWriter<File>,
}

impl FileLogger {
    fn new(path: &PathBuf, append: bool) -> std::io::Result<Self> {
        let file = OpenOptions::new()
            .write(true)
            .append(append)
            .truncate(!append)
            .create(true)
            .open(path)?;

        Ok(Self {
            writer: BufWriter::new(file),
        })
    }

    // Flushes after every line so a failed run still leaves its trace.
    fn log<S: Display>(&mut self, msg: &S) {
        let result = writeln!(self.writer, "{msg}").and_then(|_| self.writer.flush());
        if let Err(err) = result {
            log::warn!("Can't write to the log file: {err}");
        }
    }
}
