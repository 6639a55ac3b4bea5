//! Camera for ray generation.

use glint_math::{Ray, Vec3};

/// Pinhole camera looking down +Z through a screen plane.
///
/// Screen coordinates are pixels with the origin at the top-left corner and
/// Y growing downward, which maps to +Y in the world.
#[derive(Debug, Clone)]
pub struct Camera {
    // Image settings
    pub image_width: u32,
    pub image_height: u32,

    // Lens settings
    eye: Vec3,
    fov_scale: f32, // Lateral spread at the screen edge
    depth: f32,     // Forward distance to the screen plane
}

impl Camera {
    /// Create a new camera with default settings.
    pub fn new() -> Self {
        Self {
            image_width: 400,
            image_height: 400,
            eye: Vec3::new(0.0, 0.0, -800.0),
            fov_scale: 100.0,
            depth: 200.0,
        }
    }

    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.image_width = width;
        self.image_height = height;
        self
    }

    /// Set the eye position.
    pub fn with_eye(mut self, eye: Vec3) -> Self {
        self.eye = eye;
        self
    }

    /// Set lens settings.
    pub fn with_lens(mut self, fov_scale: f32, depth: f32) -> Self {
        self.fov_scale = fov_scale;
        self.depth = depth;
        self
    }

    pub fn eye(&self) -> Vec3 {
        self.eye
    }

    /// Generate the normalized primary ray through screen point (x, y).
    ///
    /// Fractional coordinates address sub-pixel positions.
    pub fn pixel_to_ray(&self, x: f32, y: f32) -> Ray {
        let width = self.image_width as f32;
        let height = self.image_height as f32;

        // Center the screen on the view axis
        let centered_x = x - width / 2.0;
        let centered_y = y - height / 2.0;

        let direction = Vec3::new(
            centered_x / width * self.fov_scale,
            centered_y / height * self.fov_scale,
            self.depth,
        );

        Ray::new(self.eye, direction).normalized()
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}
