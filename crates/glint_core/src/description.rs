//! JSON scene descriptions.
//!
//! A description lists the light, the shapes and any orbit animations. It is
//! validated once and turned into a [`Scene`] plus an [`Animation`].
//!
//! ```json
//! {
//!   "light": [0, -500, -500],
//!   "shapes": [
//!     { "type": "sphere", "origin": [0, 0, 200], "color": [0, 1, 1], "radius": 100, "reflectivity": 0.8 },
//!     { "type": "plane", "origin": [0, 300, 0], "normal": [0, -1, 0], "color": [0, 0, 1] }
//!   ],
//!   "orbits": [
//!     { "shape": 0, "center": [0, 0, 0], "sin_axis": [200, 0, 0], "cos_axis": [0, 200, 0] }
//!   ]
//! }
//! ```

use std::path::Path;

use glint_math::{colors, Color, Vec3};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::animation::{Animation, Orbit};
use crate::plane::Plane;
use crate::scene::Scene;
use crate::shape::Shape;
use crate::sphere::Sphere;

/// Errors that can occur while loading a scene description.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Shape {index}: sphere radius must be positive, got {radius}")]
    InvalidRadius { index: usize, radius: f32 },

    #[error("Shape {index}: plane normal must be non-zero")]
    InvalidNormal { index: usize },

    #[error("Shape {index}: reflectivity must be within [0, 1], got {reflectivity}")]
    InvalidReflectivity { index: usize, reflectivity: f32 },

    #[error("Orbit {orbit} targets shape {shape}, but the scene has {count} shapes")]
    InvalidOrbitTarget {
        orbit: usize,
        shape: usize,
        count: usize,
    },
}

pub type SceneResult<T> = Result<T, SceneError>;

/// One shape entry in a description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ShapeDescription {
    Sphere {
        origin: Vec3,
        color: Color,
        radius: f32,
        #[serde(default)]
        reflectivity: f32,
    },
    Plane {
        origin: Vec3,
        normal: Vec3,
        color: Color,
        #[serde(default = "default_check_color")]
        check_color: Color,
        #[serde(default)]
        reflectivity: f32,
    },
}

fn default_check_color() -> Color {
    colors::WHITE
}

impl ShapeDescription {
    fn reflectivity(&self) -> f32 {
        match self {
            ShapeDescription::Sphere { reflectivity, .. } => *reflectivity,
            ShapeDescription::Plane { reflectivity, .. } => *reflectivity,
        }
    }

    /// Validate and build the shape at position `index`.
    fn build(&self, index: usize) -> SceneResult<Box<dyn Shape>> {
        let reflectivity = self.reflectivity();
        if !(0.0..=1.0).contains(&reflectivity) {
            return Err(SceneError::InvalidReflectivity {
                index,
                reflectivity,
            });
        }

        match *self {
            ShapeDescription::Sphere {
                origin,
                color,
                radius,
                reflectivity,
            } => {
                if radius.is_nan() || radius <= 0.0 {
                    return Err(SceneError::InvalidRadius { index, radius });
                }
                Ok(Box::new(
                    Sphere::new(origin, radius, color).with_reflectivity(reflectivity),
                ))
            }
            ShapeDescription::Plane {
                origin,
                normal,
                color,
                check_color,
                reflectivity,
            } => {
                if normal.length_squared() == 0.0 || !normal.is_finite() {
                    return Err(SceneError::InvalidNormal { index });
                }
                Ok(Box::new(
                    Plane::new(origin, normal, color)
                        .with_check_color(check_color)
                        .with_reflectivity(reflectivity),
                ))
            }
        }
    }
}

/// Serializable description of a full scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneDescription {
    /// Position of the point light
    pub light: Vec3,
    pub shapes: Vec<ShapeDescription>,
    #[serde(default)]
    pub orbits: Vec<Orbit>,
}

impl SceneDescription {
    /// Parse a description from a JSON string.
    pub fn from_json_str(json: &str) -> SceneResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a description from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> SceneResult<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&json)
    }

    /// Validate the description and build the scene and its animation.
    pub fn build(&self) -> SceneResult<(Scene, Animation)> {
        let mut scene = Scene::new(self.light);
        for (index, shape) in self.shapes.iter().enumerate() {
            scene.add(shape.build(index)?);
        }

        for (orbit_index, orbit) in self.orbits.iter().enumerate() {
            if orbit.shape >= scene.len() {
                return Err(SceneError::InvalidOrbitTarget {
                    orbit: orbit_index,
                    shape: orbit.shape,
                    count: scene.len(),
                });
            }
        }

        log::debug!(
            "Built scene with {} shapes and {} orbits",
            scene.len(),
            self.orbits.len()
        );

        Ok((scene, Animation::new(self.orbits.clone())))
    }
}
