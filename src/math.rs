//! Math types for Lumenfield

pub use glam::Vec2;

/// Moves `current` toward `target` by the given fraction of the remaining
/// distance. The hotspot opacity easing applies this once per frame.
pub fn lerp(current: f64, target: f64, amount: f64) -> f64 {
    current + amount * (target - current)
}

/// Unit direction vector for an angle given in degrees, measured
/// counterclockwise from +X.
pub fn dir_from_degrees(angle_deg: f32) -> Vec2 {
    Vec2::from_angle(angle_deg.to_radians())
}
