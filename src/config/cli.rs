use crate::config::{DemoConfig, DriverSettings, LoggerKind};
use crate::utils::error::Result;
use crate::utils::logger::LogFormat;
use clap::Parser;
use std::path::PathBuf;

/// With no arguments the driver adds student "Ali" (grade 10) through a
/// console-logged service and exits.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "solid-principles")]
#[command(about = "Walks through small examples of the five SOLID principles")]
pub struct CliConfig {
    /// Optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Diagnostic output format
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    /// Logger injected into the student service
    #[arg(long, value_enum)]
    pub logger: Option<LoggerKind>,

    /// Student name, overrides the config file
    #[arg(long)]
    pub student_name: Option<String>,

    /// Student grade level, overrides the config file
    #[arg(long)]
    pub grade_level: Option<i32>,

    /// Wait for a line on stdin before exiting
    #[arg(long)]
    pub pause: bool,

    /// Also run the calculator, shape and capability examples
    #[arg(long)]
    pub tour: bool,
}

impl CliConfig {
    /// Loads the config file (if any), applies command-line overrides and validates the result.
    pub fn load_settings(&self) -> Result<DriverSettings> {
        let mut file = match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path.display());
                DemoConfig::from_file(path)?
            }
            None => DemoConfig::default(),
        };

        if let Some(name) = &self.student_name {
            file.student.name = name.clone();
        }
        if let Some(grade) = self.grade_level {
            file.student.grade_level = grade;
        }
        if let Some(kind) = self.logger {
            file.driver.logger = kind.as_str().to_string();
        }
        file.driver.pause |= self.pause;
        file.driver.tour |= self.tour;

        file.to_settings()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Student;

    #[test]
    fn test_no_arguments_gives_original_behaviour() {
        let cli = CliConfig::parse_from(["solid-principles"]);
        assert_eq!(cli.load_settings().unwrap(), DriverSettings::default());
        assert_eq!(cli.log_format, LogFormat::Compact);
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = CliConfig::parse_from([
            "solid-principles",
            "--logger",
            "null",
            "--student-name",
            "Elif",
            "--grade-level",
            "7",
            "--tour",
            "--log-format",
            "json",
        ]);
        let settings = cli.load_settings().unwrap();
        assert_eq!(settings.logger, LoggerKind::Null);
        assert_eq!(settings.student, Student::new("Elif", 7));
        assert!(settings.tour);
        assert!(!settings.pause);
        assert_eq!(cli.log_format, LogFormat::Json);
    }

    #[test]
    fn test_grade_level_outside_school_years_is_accepted() {
        for grade in ["0", "13"] {
            let cli = CliConfig::parse_from(["solid-principles", "--grade-level", grade]);
            let settings = cli.load_settings().unwrap();
            assert_eq!(settings.student.grade_level.to_string(), grade);
        }
    }

    #[test]
    fn test_blank_name_override_fails_validation() {
        let cli = CliConfig::parse_from(["solid-principles", "--student-name", "  "]);
        assert!(cli.load_settings().is_err());
    }

    #[test]
    fn test_missing_config_file_is_io_error() {
        let cli = CliConfig::parse_from([
            "solid-principles",
            "--config",
            "/definitely/not/here/solid.toml",
        ]);
        assert!(matches!(
            cli.load_settings(),
            Err(crate::utils::error::SolidError::IoError(_))
        ));
    }
}
