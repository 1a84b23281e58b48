use crate::utils::error::Result;

/// Arithmetic over two integers. New operations are new implementors; this
/// trait and the existing calculators stay untouched.
pub trait Calculator {
    fn calculate(&self, a: i32, b: i32) -> i32;

    /// Checked variant: overflow comes back as `SolidError::Overflow`, never a wrapped value.
    fn try_calculate(&self, a: i32, b: i32) -> Result<i32>;
}

/// Four-sided shape with settable sides.
///
/// `Square` implements this too, and its setters are coupled: after
/// `set_width(3); set_height(5)` a square is 5x5, not 3x5. Callers written
/// against `Rectangle` get a different shape than they asked for; this is the
/// substitution hazard the example demonstrates, not a bug to fix.
pub trait Quadrilateral {
    fn width(&self) -> i32;
    fn height(&self) -> i32;
    fn set_width(&mut self, width: i32);
    fn set_height(&mut self, height: i32);

    fn area(&self) -> i32 {
        self.width().wrapping_mul(self.height())
    }
}

pub trait CanStudy {
    fn study(&self);
}

pub trait CanPlaySports {
    fn play_sports(&self);
}

/// Message sink that high-level code depends on instead of a concrete writer.
pub trait Logger: Send + Sync {
    fn log(&self, message: &str);
}
