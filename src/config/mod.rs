#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::DemoConfig;

use crate::adapters::logging::{ConsoleLogger, NullLogger, TracingLogger};
use crate::core::{Logger, Student};
use crate::utils::error::{Result, SolidError};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Which `Logger` implementation the driver injects into the service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum LoggerKind {
    #[default]
    Console,
    Tracing,
    Null,
}

impl LoggerKind {
    pub const NAMES: [&'static str; 3] = ["console", "tracing", "null"];

    pub fn as_str(&self) -> &'static str {
        match self {
            LoggerKind::Console => "console",
            LoggerKind::Tracing => "tracing",
            LoggerKind::Null => "null",
        }
    }

    pub fn build(&self) -> Arc<dyn Logger> {
        match self {
            LoggerKind::Console => Arc::new(ConsoleLogger),
            LoggerKind::Tracing => Arc::new(TracingLogger),
            LoggerKind::Null => Arc::new(NullLogger),
        }
    }
}

impl fmt::Display for LoggerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LoggerKind {
    type Err = SolidError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "console" => Ok(LoggerKind::Console),
            "tracing" => Ok(LoggerKind::Tracing),
            "null" => Ok(LoggerKind::Null),
            _ => Err(SolidError::InvalidConfigValueError {
                field: "driver.logger".to_string(),
                value: s.to_string(),
                reason: format!("Expected one of: {}", Self::NAMES.join(", ")),
            }),
        }
    }
}

/// Fully resolved driver settings: file values with CLI overrides applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverSettings {
    pub student: Student,
    pub logger: LoggerKind,
    pub pause: bool,
    pub tour: bool,
}

impl Default for DriverSettings {
    fn default() -> Self {
        Self {
            student: Student::new("Ali", 10),
            logger: LoggerKind::Console,
            pause: false,
            tour: false,
        }
    }
}
