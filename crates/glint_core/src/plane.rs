//! Infinite plane primitive with a procedural checkerboard.

use glint_math::{colors, Color, Ray, Vec3};

use crate::shape::{Shape, Surface};

/// Rays whose direction is this close to perpendicular with the plane
/// normal are treated as parallel.
const PARALLEL_EPSILON: f32 = 1e-3;

/// Edge length of one full checkerboard period (two tiles).
const CHECKER_PERIOD: f32 = 100.0;

/// An infinite plane through `origin`, oriented by `normal`.
#[derive(Debug, Clone)]
pub struct Plane {
    surface: Surface,
    normal: Vec3,
    check_color: Color,
}

impl Plane {
    /// Create a new plane with a white checker color.
    ///
    /// `normal` is normalized; it must not be the zero vector.
    pub fn new(origin: Vec3, normal: Vec3, color: Color) -> Self {
        Self {
            surface: Surface::new(origin, color),
            normal: normal.normalize(),
            check_color: colors::WHITE,
        }
    }

    /// Set the secondary checkerboard color.
    pub fn with_check_color(mut self, check_color: Color) -> Self {
        self.check_color = check_color;
        self
    }

    /// Set the reflectivity, clamped to [0, 1].
    pub fn with_reflectivity(mut self, reflectivity: f32) -> Self {
        self.surface = self.surface.with_reflectivity(reflectivity);
        self
    }

    /// Get the plane's unit normal.
    pub fn plane_normal(&self) -> Vec3 {
        self.normal
    }

    /// Get the secondary checkerboard color.
    pub fn check_color(&self) -> Color {
        self.check_color
    }
}

impl Shape for Plane {
    fn intersect(&self, ray: &Ray) -> Option<f32> {
        let denom = self.normal.dot(ray.direction);
        if denom.abs() <= PARALLEL_EPSILON {
            return None;
        }

        let t = (self.surface.origin - ray.origin).dot(self.normal) / denom;
        if t <= 0.0 {
            return None;
        }

        Some(t)
    }

    fn normal(&self, point: Vec3) -> Ray {
        Ray::new(point, self.normal)
    }

    fn surface(&self) -> &Surface {
        &self.surface
    }

    fn surface_mut(&mut self) -> &mut Surface {
        &mut self.surface
    }

    /// Checkerboard aligned to the world X/Z axes, tiled every 50 units.
    fn sample(&self, ray: &Ray) -> Color {
        let point = ray.at(self.intersect(ray).unwrap_or(0.0));

        let diff_x = self.surface.origin.x - point.x;
        let diff_z = self.surface.origin.z - point.z;

        // XOR of the signs mirrors the pattern across the origin's axes
        let mut primary = (diff_x < 0.0) ^ (diff_z < 0.0);

        let half_period = CHECKER_PERIOD / 2.0;
        if diff_z.abs() % CHECKER_PERIOD < half_period {
            primary = !primary;
        }
        if diff_x.abs() % CHECKER_PERIOD < half_period {
            primary = !primary;
        }

        if primary {
            self.surface.color
        } else {
            self.check_color
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn floor() -> Plane {
        Plane::new(Vec3::new(0.0, 300.0, 0.0), Vec3::new(0.0, -1.0, 0.0), colors::BLUE)
            .with_check_color(colors::WHITE)
    }

    /// Ray from straight above the floor landing on (x, 300, z).
    fn ray_down_to(x: f32, z: f32) -> Ray {
        Ray::new(Vec3::new(x, 0.0, z), Vec3::Y)
    }

    #[test]
    fn test_plane_hit() {
        let plane = floor();
        let ray = Ray::new(Vec3::ZERO, Vec3::Y);

        let t = plane.intersect(&ray).expect("ray heading at the floor must hit");
        assert!((t - 300.0).abs() < 1e-4);
    }

    #[test]
    fn test_plane_parallel_is_miss() {
        let plane = floor();

        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        assert_eq!(plane.intersect(&ray), None);

        // Within the parallel tolerance
        let ray = Ray::new(Vec3::ZERO, Vec3::new(1.0, 0.0005, 0.0));
        assert_eq!(plane.intersect(&ray), None);
    }

    #[test]
    fn test_plane_behind_is_miss() {
        let plane = floor();
        let ray = Ray::new(Vec3::ZERO, -Vec3::Y);
        assert_eq!(plane.intersect(&ray), None);
    }

    #[test]
    fn test_plane_normal_is_constant() {
        let plane = floor();
        let a = plane.normal(Vec3::new(10.0, 300.0, -40.0));
        let b = plane.normal(Vec3::new(-900.0, 300.0, 7.0));

        assert_eq!(a.direction, Vec3::new(0.0, -1.0, 0.0));
        assert_eq!(a.direction, b.direction);
        assert_eq!(b.origin, Vec3::new(-900.0, 300.0, 7.0));
    }

    #[test]
    fn test_plane_normalizes_normal() {
        let plane = Plane::new(Vec3::ZERO, Vec3::new(0.0, 5.0, 0.0), colors::RED);
        assert_eq!(plane.plane_normal(), Vec3::Y);
    }

    #[test]
    fn test_plane_check_color() {
        let plane = Plane::new(Vec3::ZERO, Vec3::Y, colors::RED);
        assert_eq!(plane.check_color(), colors::WHITE);

        let plane = floor().with_check_color(colors::GREEN);
        assert_eq!(plane.check_color(), colors::GREEN);
        assert_eq!(plane.sample(&ray_down_to(-25.0, -25.0)), plane.check_color());
    }

    #[test]
    fn test_plane_checkerboard_tiles() {
        let plane = floor();

        // Same quadrant, both offsets in the first half period: flipped twice
        assert_eq!(plane.sample(&ray_down_to(-25.0, -25.0)), colors::WHITE);
        // Step one tile along X
        assert_eq!(plane.sample(&ray_down_to(-75.0, -25.0)), colors::BLUE);
        // Step one tile along Z
        assert_eq!(plane.sample(&ray_down_to(-25.0, -75.0)), colors::BLUE);
        // One tile along both axes is back to the first color
        assert_eq!(plane.sample(&ray_down_to(-75.0, -75.0)), colors::WHITE);
        // Opposite sign on one axis
        assert_eq!(plane.sample(&ray_down_to(25.0, -25.0)), colors::BLUE);
    }

    #[test]
    fn test_plane_sample_idempotent() {
        let plane = floor();
        let ray = Ray::new(Vec3::new(0.0, 0.0, -800.0), Vec3::new(0.3, 0.5, 1.0).normalize());

        let first = plane.sample(&ray);
        for _ in 0..8 {
            assert_eq!(plane.sample(&ray), first);
        }
    }

    #[test]
    fn test_plane_sample_on_miss_uses_ray_origin() {
        let plane = floor();
        // Misses the floor; the checker is evaluated at the ray origin instead
        let ray = Ray::new(Vec3::new(-25.0, 0.0, -25.0), -Vec3::Y);
        assert_eq!(plane.sample(&ray), colors::WHITE);
    }
}
