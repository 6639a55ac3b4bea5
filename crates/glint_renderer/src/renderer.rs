//! Per-pixel sampling and whole-frame rendering.
//!
//! [`sample_color`] is the entry point a host calls once per pixel per
//! frame. [`render`] is a single-threaded sweep built on it.

use glint_core::Scene;
use glint_math::Color;
use rand::{Rng, RngCore};

use crate::{shade, Camera, RenderConfig};

/// Uniform random `f32` in [0, 1).
#[inline]
pub fn gen_f32(rng: &mut dyn RngCore) -> f32 {
    rng.gen::<f32>()
}

/// Sample the color at screen point (x, y) with multi-sampling.
///
/// With a single sample the point is used exactly as given and `rng` is not
/// touched. Otherwise each sample adds a uniform [0, 1) jitter on both axes
/// and the results are averaged. Rays that hit nothing take the fog color.
pub fn sample_color(
    camera: &Camera,
    scene: &Scene,
    x: f32,
    y: f32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    let trace = |x: f32, y: f32| {
        let ray = camera.pixel_to_ray(x, y);
        shade(scene, &ray, config.bounce_limit, config).unwrap_or(config.fog_color)
    };

    if config.sample_count <= 1 {
        return trace(x, y);
    }

    let mut pixel_color = Color::ZERO;
    for _ in 0..config.sample_count {
        let offset_x = gen_f32(rng);
        let offset_y = gen_f32(rng);
        pixel_color += trace(x + offset_x, y + offset_y);
    }

    // Average the samples
    pixel_color / config.sample_count as f32
}

/// Clamp a value to [0, 1] range.
#[inline]
pub fn clamp_01(x: f32) -> f32 {
    x.clamp(0.0, 1.0)
}

/// Convert a color to 8-bit RGBA.
///
/// Channels are clamped; no gamma curve is applied.
pub fn color_to_rgba(color: Color) -> [u8; 4] {
    let r = (255.0 * clamp_01(color.x)) as u8;
    let g = (255.0 * clamp_01(color.y)) as u8;
    let b = (255.0 * clamp_01(color.z)) as u8;
    [r, g, b, 255]
}

/// Simple image buffer for storing render output.
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    /// Convert to RGBA bytes (for display or saving).
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgba(*color));
        }
        bytes
    }
}

/// Render the entire scene to an image buffer.
///
/// Pixels are visited row by row. The scene is only borrowed, so any
/// animation has to be applied before the sweep starts.
pub fn render(
    camera: &Camera,
    scene: &Scene,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> ImageBuffer {
    let mut image = ImageBuffer::new(camera.image_width, camera.image_height);

    for y in 0..camera.image_height {
        for x in 0..camera.image_width {
            let color = sample_color(camera, scene, x as f32, y as f32, config, rng);
            image.set(x, y, color);
        }
    }

    log::debug!(
        "Rendered {}x{} at {} samples per pixel",
        image.width,
        image.height,
        config.sample_count.max(1)
    );

    image
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_core::Sphere;
    use glint_math::{colors, lerp, Vec3};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn grey_sphere_scene() -> Scene {
        Scene::new(Vec3::new(0.0, -500.0, -500.0))
            .with_shape(Sphere::new(Vec3::new(0.0, 0.0, 200.0), 100.0, Color::splat(0.5)))
    }

    fn single_sample_config() -> RenderConfig {
        RenderConfig {
            bounce_limit: 1,
            sample_count: 1,
            ambient_light: 0.2,
            ..Default::default()
        }
    }

    #[test]
    fn test_screen_center_end_to_end() {
        let scene = grey_sphere_scene();
        let config = single_sample_config();
        let camera = Camera::new().with_resolution(config.width, config.height);
        let mut rng = StdRng::seed_from_u64(7);

        let color = sample_color(&camera, &scene, 200.0, 200.0, &config, &mut rng);

        // Center ray hits the sphere front at (0, 0, 100), 900 units out
        let point = Vec3::new(0.0, 0.0, 100.0);
        let normal = Vec3::new(0.0, 0.0, -1.0);
        let light_dir = (scene.light() - point).normalize();
        let lit = (config.ambient_light + light_dir.dot(normal)).clamp(0.0, 1.0);
        assert!(lit > config.ambient_light && lit < 1.0);

        let expected = lerp(Color::splat(0.5) * lit, config.fog_color, 900.0 * config.fog_intensity());
        assert!(
            (color - expected).length() < 1e-5,
            "expected {:?}, got {:?}",
            expected,
            color
        );
    }

    #[test]
    fn test_single_sample_is_deterministic_and_skips_rng() {
        let scene = grey_sphere_scene();
        let config = single_sample_config();
        let camera = Camera::new();

        let mut rng = StdRng::seed_from_u64(42);
        let first = sample_color(&camera, &scene, 180.0, 215.0, &config, &mut rng);
        let second = sample_color(&camera, &scene, 180.0, 215.0, &config, &mut rng);
        assert_eq!(first, second);

        // No random numbers were drawn
        let mut fresh = StdRng::seed_from_u64(42);
        assert_eq!(gen_f32(&mut rng), gen_f32(&mut fresh));
    }

    #[test]
    fn test_multisample_average_of_misses_is_fog() {
        let scene = Scene::new(Vec3::ZERO);
        let config = RenderConfig {
            sample_count: 5,
            ..Default::default()
        };
        let camera = Camera::new();
        let mut rng = StdRng::seed_from_u64(1);

        let color = sample_color(&camera, &scene, 10.0, 10.0, &config, &mut rng);
        assert!((color - config.fog_color).length() < 1e-5);
    }

    #[test]
    fn test_multisample_on_edge_mixes_colors() {
        let scene = Scene::new(Vec3::new(0.0, 0.0, -2000.0))
            .with_shape(Sphere::new(Vec3::new(0.0, 0.0, 200.0), 100.0, colors::RED));
        let config = RenderConfig {
            sample_count: 64,
            ..Default::default()
        };
        let camera = Camera::new();
        let mut rng = StdRng::seed_from_u64(11);

        // The silhouette crosses this pixel at roughly x = 280.4, so part of
        // the jittered samples hit the sphere and the rest see fog
        let color = sample_color(&camera, &scene, 280.0, 200.0, &config, &mut rng);

        // Green only comes from fog: about 0.12 on the sphere, 0.7 off it
        assert!(color.y > 0.15 && color.y < 0.65, "got {:?}", color);
    }

    #[test]
    fn test_multisample_reproducible_with_seed() {
        let scene = grey_sphere_scene();
        let config = RenderConfig {
            sample_count: 4,
            ..Default::default()
        };
        let camera = Camera::new();

        let a = sample_color(&camera, &scene, 230.0, 190.0, &config, &mut StdRng::seed_from_u64(3));
        let b = sample_color(&camera, &scene, 230.0, 190.0, &config, &mut StdRng::seed_from_u64(3));
        assert_eq!(a, b);
    }

    #[test]
    fn test_render_fills_every_pixel() {
        let scene = grey_sphere_scene();
        let config = RenderConfig {
            width: 8,
            height: 6,
            ..single_sample_config()
        };
        let camera = Camera::new().with_resolution(config.width, config.height);
        let mut rng = StdRng::seed_from_u64(0);

        let image = render(&camera, &scene, &config, &mut rng);
        assert_eq!(image.pixels.len(), 48);

        // Corners look past the sphere into the fog, the center hits it
        assert_eq!(image.get(0, 0), config.fog_color);
        assert_eq!(image.get(7, 5), config.fog_color);
        assert_ne!(image.get(4, 3), config.fog_color);
        assert_eq!(
            image.get(4, 3),
            sample_color(&camera, &scene, 4.0, 3.0, &config, &mut rng)
        );
    }

    #[test]
    fn test_color_to_rgba_clamps() {
        assert_eq!(color_to_rgba(Color::new(-0.5, 0.5, 2.0)), [0, 127, 255, 255]);
        assert_eq!(color_to_rgba(Color::ZERO), [0, 0, 0, 255]);
        assert_eq!(color_to_rgba(colors::WHITE), [255, 255, 255, 255]);
    }

    #[test]
    fn test_image_buffer_indexes_past_u32_pixel_count() {
        // 70000 * 70000 does not fit in a u32
        let image = ImageBuffer {
            width: 70_000,
            height: 70_000,
            pixels: Vec::new(),
        };
        assert_eq!(image.index(1, 69_999), 4_899_930_001);
    }

    #[test]
    fn test_image_buffer() {
        let mut image = ImageBuffer::new(3, 2);
        assert_eq!(image.get(2, 1), Color::ZERO);

        image.set(2, 1, colors::RED);
        assert_eq!(image.get(2, 1), colors::RED);

        let bytes = image.to_rgba();
        assert_eq!(bytes.len(), 3 * 2 * 4);
        assert_eq!(&bytes[20..24], &[255, 0, 0, 255]);
    }
}
