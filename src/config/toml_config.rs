use crate::config::{DriverSettings, LoggerKind};
use crate::core::Student;
use crate::utils::error::{Result, SolidError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional driver configuration file. Every section and key may be omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub student: StudentSection,
    pub driver: DriverSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudentSection {
    pub name: String,
    pub grade_level: i32,
}

impl Default for StudentSection {
    fn default() -> Self {
        Self {
            name: "Ali".to_string(),
            grade_level: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverSection {
    pub logger: String,
    pub pause: bool,
    pub tour: bool,
}

impl Default for DriverSection {
    fn default() -> Self {
        Self {
            logger: LoggerKind::Console.as_str().to_string(),
            pause: false,
            tour: false,
        }
    }
}

impl DemoConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed)?)
    }

    /// Replaces `${VAR}` with the variable's value; unknown variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SolidError::ConfigError {
            message: format!("env substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn to_settings(&self) -> Result<DriverSettings> {
        self.validate()?;
        Ok(DriverSettings {
            student: Student::new(self.student.name.trim(), self.student.grade_level),
            logger: self.driver.logger.parse()?,
            pause: self.driver.pause,
            tour: self.driver.tour,
        })
    }
}

impl Validate for DemoConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("student.name", &self.student.name)?;
        validation::validate_one_of(
            "driver.logger",
            &self.driver.logger.trim().to_ascii_lowercase(),
            &LoggerKind::NAMES,
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = DemoConfig::from_toml_str("").unwrap();
        assert_eq!(config, DemoConfig::default());
        assert_eq!(config.to_settings().unwrap(), DriverSettings::default());
    }

    #[test]
    fn test_partial_sections() {
        let config = DemoConfig::from_toml_str(
            r#"
[student]
name = "Zeynep"

[driver]
tour = true
"#,
        )
        .unwrap();
        assert_eq!(config.student.name, "Zeynep");
        assert_eq!(config.student.grade_level, 10);
        assert!(config.driver.tour);
        assert_eq!(config.driver.logger, "console");
    }

    #[test]
    fn test_env_substitution() {
        std::env::set_var("SOLID_TEST_STUDENT_NAME", "Mehmet");
        let config = DemoConfig::from_toml_str(
            r#"
[student]
name = "${SOLID_TEST_STUDENT_NAME}"
"#,
        )
        .unwrap();
        assert_eq!(config.student.name, "Mehmet");
    }

    #[test]
    fn test_unknown_env_var_left_untouched() {
        let config = DemoConfig::from_toml_str(
            r#"
[student]
name = "${SOLID_TEST_DEFINITELY_UNSET_VAR}"
"#,
        )
        .unwrap();
        assert_eq!(config.student.name, "${SOLID_TEST_DEFINITELY_UNSET_VAR}");
    }

    #[test]
    fn test_validation_failures() {
        let mut config = DemoConfig::default();
        config.student.name = "  ".to_string();
        assert!(config.validate().is_err());

        let mut config = DemoConfig::default();
        config.driver.logger = "syslog".to_string();
        assert!(matches!(
            config.to_settings(),
            Err(SolidError::InvalidConfigValueError { .. })
        ));
    }

    #[test]
    fn test_any_grade_level_is_accepted() {
        for grade in [i32::MIN, -1, 0, 13, 99] {
            let mut config = DemoConfig::default();
            config.student.grade_level = grade;
            assert_eq!(config.to_settings().unwrap().student.grade_level, grade);
        }
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            DemoConfig::from_toml_str("[student\nname = "),
            Err(SolidError::TomlError(_))
        ));
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        assert!(DemoConfig::from_toml_str("[student]\ngrade_level = \"ten\"").is_err());
    }
}
