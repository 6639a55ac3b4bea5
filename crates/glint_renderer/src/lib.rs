//! Glint Renderer - recursive CPU ray tracing.
//!
//! Casts one ray per sample into a [`glint_core::Scene`], shades the nearest
//! hit with reflection, hard shadows and distance fog, and averages jittered
//! samples per pixel.
//!
//! Everything runs on the calling thread. Rendering only reads the scene;
//! hosts move shapes between frames.

mod camera;
mod config;
mod renderer;
mod shading;

pub use camera::Camera;
pub use config::{ConfigError, RenderConfig, MAX_DIMENSION};
pub use renderer::{clamp_01, color_to_rgba, gen_f32, render, sample_color, ImageBuffer};
pub use shading::shade;

/// Re-export Vec3 and common math types from glint_math
pub use glint_math::{Color, Ray, Vec3};
