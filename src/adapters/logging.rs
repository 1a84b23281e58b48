use crate::core::Logger;
use std::sync::{Mutex, PoisonError};

/// Writes each message as one line on stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleLogger;

impl Logger for ConsoleLogger {
    fn log(&self, message: &str) {
        println!("{}", message);
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NullLogger;

impl Logger for NullLogger {
    fn log(&self, _message: &str) {}
}

/// Forwards messages into the `tracing` pipeline as info events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn log(&self, message: &str) {
        tracing::info!(target: "solid_principles::log", "{}", message);
    }
}

/// Keeps every message in memory, in call order.
#[derive(Debug, Default)]
pub struct MemoryLogger {
    messages: Mutex<Vec<String>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl Logger for MemoryLogger {
    fn log(&self, message: &str) {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_logger_keeps_order() {
        let logger = MemoryLogger::new();
        assert!(logger.is_empty());
        logger.log("first");
        logger.log("second");
        assert_eq!(logger.messages(), vec!["first", "second"]);
        logger.clear();
        assert!(logger.is_empty());
    }

    #[test]
    fn test_loggers_as_trait_objects() {
        let sinks: Vec<Box<dyn Logger>> = vec![
            Box::new(ConsoleLogger),
            Box::new(NullLogger),
            Box::new(TracingLogger),
            Box::new(MemoryLogger::new()),
        ];
        for sink in &sinks {
            sink.log("hello");
        }
    }
}
