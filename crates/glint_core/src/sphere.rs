//! Sphere primitive for ray tracing.

use glint_math::{Color, Ray, Vec3};

use crate::shape::{Shape, Surface};

/// A sphere primitive.
#[derive(Debug, Clone)]
pub struct Sphere {
    surface: Surface,
    radius: f32,
}

impl Sphere {
    /// Create a new non-reflective sphere.
    ///
    /// Negative radius values are clamped to 0.0.
    pub fn new(center: Vec3, radius: f32, color: Color) -> Self {
        Self {
            surface: Surface::new(center, color),
            radius: radius.max(0.0),
        }
    }

    /// Set the reflectivity, clamped to [0, 1].
    pub fn with_reflectivity(mut self, reflectivity: f32) -> Self {
        self.surface = self.surface.with_reflectivity(reflectivity);
        self
    }

    /// Get the sphere's radius.
    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl Shape for Sphere {
    fn intersect(&self, ray: &Ray) -> Option<f32> {
        let oc = ray.origin - self.surface.origin;

        let a = ray.direction.length_squared();
        let b = 2.0 * oc.dot(ray.direction);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        // Only the near root counts. A ray starting inside the sphere gets a
        // negative near root and reports no hit.
        let t = (-b - discriminant.sqrt()) / (2.0 * a);
        if t < 0.0 {
            return None;
        }

        Some(t)
    }

    fn normal(&self, point: Vec3) -> Ray {
        Ray::new(point, (point - self.surface.origin).normalize())
    }

    fn surface(&self) -> &Surface {
        &self.surface
    }

    fn surface_mut(&mut self) -> &mut Surface {
        &mut self.surface
    }
}
