use crate::core::{Logger, Student};
use std::sync::Arc;

/// High-level service that only knows the `Logger` trait. The logger is
/// injected and shared; the service never decides where messages go.
pub struct StudentService {
    logger: Arc<dyn Logger>,
}

impl StudentService {
    pub fn new(logger: Arc<dyn Logger>) -> Self {
        Self { logger }
    }

    pub fn logger(&self) -> &Arc<dyn Logger> {
        &self.logger
    }

    pub fn add_student(&self, student: &Student) {
        tracing::debug!(student = %student, "adding student");
        self.logger.log(&format!("Student added: {}", student.name));
    }
}
