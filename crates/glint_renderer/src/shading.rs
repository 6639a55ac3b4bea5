//! Recursive Whitted-style shading.
//!
//! Combines the surface color with mirror reflection, a hard-shadowed point
//! light and distance fog.

use glint_core::Scene;
use glint_math::{lerp, reflect, Color, Ray};

use crate::RenderConfig;

/// Compute the color seen along `ray`.
///
/// `ray` must have a unit direction. Returns `None` when nothing is hit;
/// callers substitute the fog color. `bounces` is the remaining budget: one
/// is spent here, and the reflection branch only runs while budget remains.
pub fn shade(scene: &Scene, ray: &Ray, bounces: u32, config: &RenderConfig) -> Option<Color> {
    let bounces = bounces.saturating_sub(1);

    let hit = scene.nearest_hit(ray)?;
    let shape = hit.shape;
    let distance = hit.distance;

    // Fully fogged out, nothing else can show through
    if let Some(max_distance) = config.fog_max_distance {
        if distance >= max_distance {
            return Some(config.fog_color);
        }
    }

    let mut color = shape.sample(ray);

    let point = ray.at(distance);
    let normal = shape.normal(point).direction;

    // Reflection
    if bounces != 0 && shape.reflectivity() > 0.0 {
        let reflection = Ray::new(point, reflect(ray.direction, normal))
            .nudged(normal)
            .normalized();
        let reflected = shade(scene, &reflection, bounces, config).unwrap_or(config.fog_color);
        color = lerp(color, reflected, shape.reflectivity());
    }

    // Shadow and diffuse lighting
    let light = scene.light_sample(point, normal);
    color = if scene.is_blocked(&light) {
        color * config.ambient_light
    } else {
        let lit = (config.ambient_light + light.ray.direction.dot(normal)).clamp(0.0, 1.0);
        color * lit
    };

    // Fog
    color = lerp(color, config.fog_color, distance * config.fog_intensity());

    Some(color)
}
