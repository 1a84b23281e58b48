// Domain layer: the student record and the traits (ports) the examples are written against.

pub mod model;
pub mod ports;
