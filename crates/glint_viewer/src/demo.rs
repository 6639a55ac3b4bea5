//! Built-in demo scene: three mirrored spheres over a checkerboard floor,
//! two of them orbiting.

use glint_core::{Orbit, SceneDescription, ShapeDescription};
use glint_math::{colors, Vec3};

/// Description of the demo scene.
pub fn demo_scene() -> SceneDescription {
    let center = Vec3::new(0.0, 0.0, 200.0);

    let shapes = vec![
        ShapeDescription::Sphere {
            origin: center,
            color: colors::CYAN,
            radius: 100.0,
            reflectivity: 0.8,
        },
        ShapeDescription::Sphere {
            origin: center,
            color: colors::RED,
            radius: 100.0,
            reflectivity: 0.5,
        },
        ShapeDescription::Sphere {
            origin: center,
            color: colors::GREEN,
            radius: 100.0,
            reflectivity: 0.2,
        },
        ShapeDescription::Plane {
            origin: Vec3::new(0.0, 300.0, 0.0),
            normal: Vec3::new(0.0, -1.0, 0.0),
            color: colors::BLUE,
            check_color: colors::WHITE,
            reflectivity: 0.0,
        },
    ];

    let orbits = vec![
        // Circles the center sphere facing the camera
        Orbit::new(1, center, Vec3::X * 200.0, Vec3::Y * 200.0),
        // Slow sweep around it in the floor plane
        Orbit::new(2, center, Vec3::X * 300.0, Vec3::Z * 300.0).with_speed(1.0 / 3.0),
    ];

    SceneDescription {
        light: Vec3::new(0.0, -500.0, -500.0),
        shapes,
        orbits,
    }
}
