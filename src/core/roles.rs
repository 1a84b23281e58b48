//! Small capability traits instead of one wide "student" interface: a plain
//! student only studies, a student athlete also plays sports.
//!
//! A plain student has no sports operation at all:
//!
//! ```compile_fail
//! use solid_principles::core::roles::GoodStudent;
//! use solid_principles::core::CanPlaySports;
//!
//! GoodStudent::default().play_sports();
//! ```

use crate::adapters::logging::ConsoleLogger;
use crate::core::{CanPlaySports, CanStudy, Logger};
use std::sync::Arc;

pub const STUDY_MESSAGE: &str = "Doing homework.";
pub const SPORTS_MESSAGE: &str = "Playing sports.";

pub struct GoodStudent {
    out: Arc<dyn Logger>,
}

impl GoodStudent {
    pub fn new(out: Arc<dyn Logger>) -> Self {
        Self { out }
    }
}

impl Default for GoodStudent {
    fn default() -> Self {
        Self::new(Arc::new(ConsoleLogger))
    }
}

impl CanStudy for GoodStudent {
    fn study(&self) {
        self.out.log(STUDY_MESSAGE);
    }
}

pub struct GoodSportsPlayer {
    out: Arc<dyn Logger>,
}

impl GoodSportsPlayer {
    pub fn new(out: Arc<dyn Logger>) -> Self {
        Self { out }
    }
}

impl Default for GoodSportsPlayer {
    fn default() -> Self {
        Self::new(Arc::new(ConsoleLogger))
    }
}

impl CanStudy for GoodSportsPlayer {
    fn study(&self) {
        self.out.log(STUDY_MESSAGE);
    }
}

impl CanPlaySports for GoodSportsPlayer {
    fn play_sports(&self) {
        self.out.log(SPORTS_MESSAGE);
    }
}
