// Re-export glam for convenience
pub use glam::*;

// Glint math types
mod ray;
pub use ray::Ray;

pub mod colors;

/// RGB color with components conventionally in [0, 1].
///
/// Shares its representation with `Vec3` so colors and vectors use the same
/// arithmetic. Blending never clamps.
pub type Color = Vec3;

/// Offset applied along a surface normal before casting secondary rays,
/// so a ray leaving a surface does not immediately hit it again.
pub const SURFACE_EPSILON: f32 = 1e-3;

/// Linearly interpolate between two colors.
///
/// Returns `from` for `t <= 0` and `to` for `t >= 1` exactly.
#[inline]
pub fn lerp(from: Color, to: Color, t: f32) -> Color {
    if t <= 0.0 {
        return from;
    }
    if t >= 1.0 {
        return to;
    }
    from * (1.0 - t) + to * t
}

/// Mirror `direction` about `normal`.
///
/// `normal` must be unit length. The result has the length of `direction`.
#[inline]
pub fn reflect(direction: Vec3, normal: Vec3) -> Vec3 {
    normal * 2.0 * (-direction).dot(normal) + direction
}
