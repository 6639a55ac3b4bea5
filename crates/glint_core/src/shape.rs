//! Shape trait and the surface properties every shape carries.

use glint_math::{Color, Ray, Vec3};

/// Position and material shared by every shape variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    /// Reference point of the shape (sphere center, point on a plane)
    pub origin: Vec3,
    /// Base color (RGB, 0-1)
    pub color: Color,
    /// Mirror contribution, 0 = matte, 1 = perfect mirror
    pub reflectivity: f32,
}

impl Surface {
    /// Create a non-reflective surface.
    pub fn new(origin: Vec3, color: Color) -> Self {
        Self {
            origin,
            color,
            reflectivity: 0.0,
        }
    }

    /// Set the reflectivity, clamped to [0, 1].
    pub fn with_reflectivity(mut self, reflectivity: f32) -> Self {
        self.reflectivity = reflectivity.clamp(0.0, 1.0);
        self
    }
}

/// Trait for analytic surfaces that can be ray traced.
///
/// Absence of a hit is always `None`; implementations never return a
/// sentinel distance.
pub trait Shape: Send + Sync + std::fmt::Debug {
    /// Distance along `ray` to the first visible intersection, if any.
    fn intersect(&self, ray: &Ray) -> Option<f32>;

    /// Surface normal at `point`, as a ray starting at `point`.
    fn normal(&self, point: Vec3) -> Ray;

    /// Shared surface properties.
    fn surface(&self) -> &Surface;

    /// Mutable access to the shared surface properties.
    fn surface_mut(&mut self) -> &mut Surface;

    /// Color seen along `ray`. Only called after a successful `intersect`.
    fn sample(&self, _ray: &Ray) -> Color {
        self.surface().color
    }

    #[inline]
    fn origin(&self) -> Vec3 {
        self.surface().origin
    }

    /// Move the shape. Used by the animation driver between frames.
    #[inline]
    fn set_origin(&mut self, origin: Vec3) {
        self.surface_mut().origin = origin;
    }

    #[inline]
    fn reflectivity(&self) -> f32 {
        self.surface().reflectivity
    }
}
