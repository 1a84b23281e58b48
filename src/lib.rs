pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::logging::{ConsoleLogger, MemoryLogger, NullLogger, TracingLogger};
pub use config::{DemoConfig, DriverSettings, LoggerKind};
pub use crate::core::{
    calculator::AdditionCalculator,
    roles::{GoodSportsPlayer, GoodStudent},
    shapes::{Rectangle, Square},
    student_service::StudentService,
};
pub use domain::model::Student;
pub use domain::ports::{CanPlaySports, CanStudy, Calculator, Logger, Quadrilateral};
pub use utils::error::{Result, SolidError};
