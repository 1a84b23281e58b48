pub mod calculator;
pub mod roles;
pub mod shapes;
pub mod student_service;

pub use crate::domain::model::Student;
pub use crate::domain::ports::{CanPlaySports, CanStudy, Calculator, Logger, Quadrilateral};
pub use crate::utils::error::Result;
