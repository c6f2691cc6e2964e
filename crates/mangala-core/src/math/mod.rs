//! Geometry types for particle positions and surface dimensions

mod size;
mod vec2;

pub use size::Size;
pub use vec2::Vec2;
