use crate::{Vec3, SURFACE_EPSILON};

/// A ray in 3D space with an origin and a direction.
///
/// The direction is never the zero vector. Most consumers want a unit
/// direction; use [`Ray::normalized`] at the boundary where that matters.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Copy of this ray with a unit-length direction.
    #[inline]
    pub fn normalized(&self) -> Self {
        Self::new(self.origin, self.direction.normalize())
    }

    /// Copy of this ray with its origin pushed off a surface along `normal`.
    #[inline]
    pub fn nudged(&self, normal: Vec3) -> Self {
        Self::new(self.origin + normal * SURFACE_EPSILON, self.direction)
    }
}
