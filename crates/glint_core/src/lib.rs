//! Glint Core - Shapes, scenes and animation.
//!
//! This crate provides:
//!
//! - **Shapes**: the `Shape` trait with `Sphere` and `Plane` implementations
//! - **Scene**: shape ownership plus nearest-hit and shadow queries
//! - **Animation**: orbits that move shape origins between frames
//! - **Descriptions**: JSON scene files
//!
//! # Example
//!
//! ```ignore
//! use glint_core::SceneDescription;
//!
//! let (mut scene, animation) = SceneDescription::load("scene.json")?.build()?;
//! animation.apply(&mut scene, 0.5);
//! println!("Loaded {} shapes", scene.len());
//! ```

pub mod animation;
pub mod description;
pub mod plane;
pub mod scene;
pub mod shape;
pub mod sphere;

// Re-export commonly used types
pub use animation::{Animation, Orbit};
pub use description::{SceneDescription, SceneError, SceneResult, ShapeDescription};
pub use plane::Plane;
pub use scene::{Hit, LightSample, Scene};
pub use shape::{Shape, Surface};
pub use sphere::Sphere;
