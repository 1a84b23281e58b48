use thiserror::Error;

#[derive(Error, Debug)]
pub enum SolidError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Integer overflow in {operation}({a}, {b})")]
    Overflow {
        operation: &'static str,
        a: i32,
        b: i32,
    },
}

impl SolidError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            SolidError::IoError(e) => format!("Could not read input: {}", e),
            SolidError::TomlError(_) => "The configuration file is not valid TOML".to_string(),
            SolidError::ConfigError { message } => format!("Configuration problem: {}", message),
            SolidError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            SolidError::Overflow { operation, .. } => {
                format!("The {} result does not fit in a 32-bit integer", operation)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SolidError::IoError(_) => "Check that the file exists and is readable",
            SolidError::TomlError(_) => "Fix the TOML syntax reported above",
            SolidError::ConfigError { .. } | SolidError::InvalidConfigValueError { .. } => {
                "Correct the setting in the config file or on the command line"
            }
            SolidError::Overflow { .. } => "Use smaller operands or the wrapping calculate()",
        }
    }
}

pub type Result<T> = std::result::Result<T, SolidError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overflow_message_names_operands() {
        let err = SolidError::Overflow {
            operation: "addition",
            a: i32::MAX,
            b: 1,
        };
        assert_eq!(
            err.to_string(),
            format!("Integer overflow in addition({}, 1)", i32::MAX)
        );
        assert!(err.user_friendly_message().contains("addition"));
    }

    #[test]
    fn test_invalid_value_message() {
        let err = SolidError::InvalidConfigValueError {
            field: "driver.logger".to_string(),
            value: "syslog".to_string(),
            reason: "Expected one of: console, tracing, null".to_string(),
        };
        assert!(err.to_string().contains("driver.logger"));
        assert!(err.user_friendly_message().contains("console, tracing, null"));
    }
}
