use crate::core::Calculator;
use crate::utils::error::{Result, SolidError};

#[derive(Debug, Clone, Copy, Default)]
pub struct AdditionCalculator;

impl Calculator for AdditionCalculator {
    /// Two's-complement wrapping on overflow, identical in debug and release builds.
    fn calculate(&self, a: i32, b: i32) -> i32 {
        a.wrapping_add(b)
    }

    fn try_calculate(&self, a: i32, b: i32) -> Result<i32> {
        a.checked_add(b).ok_or(SolidError::Overflow {
            operation: "addition",
            a,
            b,
        })
    }
}
