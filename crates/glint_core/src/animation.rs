//! Time-driven animation of shape origins.
//!
//! Animation runs strictly between frames: [`Animation::apply`] takes the
//! scene mutably, so it cannot overlap a render sweep that borrows it.

use glint_math::Vec3;
use serde::{Deserialize, Serialize};

use crate::scene::Scene;

/// Circular (or elliptical) motion of one shape's origin.
///
/// At elapsed time `t` the origin is
/// `center + sin_axis * sin(t * speed) + cos_axis * cos(t * speed)`.
/// The axis lengths are the orbit radii.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Orbit {
    /// Index of the animated shape in the scene
    pub shape: usize,
    pub center: Vec3,
    pub sin_axis: Vec3,
    pub cos_axis: Vec3,
    /// Angular speed in radians per second
    #[serde(default = "default_speed")]
    pub speed: f32,
}

fn default_speed() -> f32 {
    1.0
}

impl Orbit {
    /// Orbit `shape` around `center` in the plane spanned by the two axes.
    pub fn new(shape: usize, center: Vec3, sin_axis: Vec3, cos_axis: Vec3) -> Self {
        Self {
            shape,
            center,
            sin_axis,
            cos_axis,
            speed: 1.0,
        }
    }

    /// Set the angular speed.
    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    /// Origin of the animated shape at `time` seconds.
    pub fn position_at(&self, time: f32) -> Vec3 {
        let angle = time * self.speed;
        self.center + self.sin_axis * angle.sin() + self.cos_axis * angle.cos()
    }
}

/// The set of orbits driving a scene.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Animation {
    orbits: Vec<Orbit>,
}

impl Animation {
    pub fn new(orbits: Vec<Orbit>) -> Self {
        Self { orbits }
    }

    /// Add an orbit.
    pub fn add(&mut self, orbit: Orbit) {
        self.orbits.push(orbit);
    }

    pub fn orbits(&self) -> &[Orbit] {
        &self.orbits
    }

    /// Check if nothing is animated.
    pub fn is_empty(&self) -> bool {
        self.orbits.is_empty()
    }

    /// Move every animated shape to its position at `time`.
    ///
    /// Orbits pointing past the end of the scene are skipped.
    pub fn apply(&self, scene: &mut Scene, time: f32) {
        for orbit in &self.orbits {
            match scene.shape_mut(orbit.shape) {
                Some(shape) => shape.set_origin(orbit.position_at(time)),
                None => log::warn!("Orbit targets missing shape {}", orbit.shape),
            }
        }
    }
}
