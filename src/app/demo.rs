use crate::config::DriverSettings;
use crate::core::calculator::AdditionCalculator;
use crate::core::roles::{GoodSportsPlayer, GoodStudent};
use crate::core::shapes::{Rectangle, Square};
use crate::core::student_service::StudentService;
use crate::core::{CanPlaySports, CanStudy, Calculator, Logger, Quadrilateral, Student};
use std::sync::Arc;

/// The original driver: one service, one student.
pub fn run_service(settings: &DriverSettings, logger: Arc<dyn Logger>) {
    let service = StudentService::new(logger);
    service.add_student(&settings.student);
    tracing::debug!(logger = %settings.logger, "Student service example finished");
}

/// Sets width 5 then height 4 through the general contract and reports the area.
/// A caller expecting independent sides would predict 20.
pub fn resize_to_five_by_four(shape: &mut dyn Quadrilateral) -> i32 {
    shape.set_width(5);
    shape.set_height(4);
    shape.area()
}

/// Runs the remaining four examples, writing one line per observation to `out`.
pub fn run_tour(student: &Student, out: Arc<dyn Logger>) {
    out.log(&format!("[S] Student record: {}", student));

    let calculator: &dyn Calculator = &AdditionCalculator;
    out.log(&format!(
        "[O] AdditionCalculator: 2 + 3 = {}",
        calculator.calculate(2, 3)
    ));

    let mut rect = Rectangle::new(0, 0);
    let mut square = Square::new(0);
    out.log(&format!(
        "[L] Rectangle resized to 5x4 has area {}",
        resize_to_five_by_four(&mut rect)
    ));
    out.log(&format!(
        "[L] Square resized to 5x4 has area {} (both sides follow the last setter)",
        resize_to_five_by_four(&mut square)
    ));

    out.log("[I] GoodStudent:");
    GoodStudent::new(out.clone()).study();
    let athlete = GoodSportsPlayer::new(out.clone());
    out.log("[I] GoodSportsPlayer:");
    athlete.study();
    athlete.play_sports();

    tracing::debug!("Tour finished");
}
