// Re-export glam for convenience
pub use glam::*;

// Orb math types
mod interval;
mod ray;
pub mod vec;

pub use interval::Interval;
pub use ray::Ray;
pub use vec::{near_zero, reflect, refract};
