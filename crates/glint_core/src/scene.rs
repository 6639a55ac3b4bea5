//! Scene container and the intersection queries the shading engine runs.

use glint_math::{Ray, Vec3};

use crate::shape::Shape;

/// Nearest intersection found by [`Scene::nearest_hit`].
#[derive(Debug, Clone, Copy)]
pub struct Hit<'a> {
    /// The shape that was hit
    pub shape: &'a dyn Shape,
    /// Parameter t along the query ray
    pub distance: f32,
}

/// Ray from a surface point toward the light.
#[derive(Debug, Clone, Copy)]
pub struct LightSample {
    /// Normalized ray, origin nudged off the surface
    pub ray: Ray,
    /// Distance from the surface point to the light
    pub distance: f32,
}

/// An ordered set of shapes lit by a single point light.
///
/// Every intersection query is a linear scan over all shapes.
#[derive(Debug, Default)]
pub struct Scene {
    shapes: Vec<Box<dyn Shape>>,
    light: Vec3,
}

impl Scene {
    /// Create an empty scene with a light at `light`.
    pub fn new(light: Vec3) -> Self {
        Self {
            shapes: Vec::new(),
            light,
        }
    }

    /// Add a shape and return its index.
    pub fn add(&mut self, shape: Box<dyn Shape>) -> usize {
        self.shapes.push(shape);
        self.shapes.len() - 1
    }

    /// Add a shape, builder style.
    pub fn with_shape(mut self, shape: impl Shape + 'static) -> Self {
        self.add(Box::new(shape));
        self
    }

    /// Get a shape by index.
    pub fn shape(&self, index: usize) -> Option<&dyn Shape> {
        self.shapes.get(index).map(|shape| shape.as_ref())
    }

    /// Get a shape by index for mutation between frames.
    pub fn shape_mut(&mut self, index: usize) -> Option<&mut (dyn Shape + 'static)> {
        self.shapes.get_mut(index).map(|shape| shape.as_mut())
    }

    /// Iterate over shapes in storage order.
    pub fn shapes(&self) -> impl Iterator<Item = &dyn Shape> {
        self.shapes.iter().map(|shape| shape.as_ref())
    }

    /// Get the number of shapes.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Check if the scene has no shapes.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Position of the point light.
    pub fn light(&self) -> Vec3 {
        self.light
    }

    /// Move the point light.
    pub fn set_light(&mut self, light: Vec3) {
        self.light = light;
    }

    /// Find the closest shape along `ray`.
    ///
    /// On an exact distance tie the shape stored first wins.
    pub fn nearest_hit(&self, ray: &Ray) -> Option<Hit<'_>> {
        let mut nearest: Option<Hit<'_>> = None;

        for shape in &self.shapes {
            let Some(distance) = shape.intersect(ray) else {
                continue;
            };
            if nearest.map_or(true, |hit| distance < hit.distance) {
                nearest = Some(Hit {
                    shape: shape.as_ref(),
                    distance,
                });
            }
        }

        nearest
    }

    /// Build the shadow ray from `point` toward the light.
    ///
    /// The distance is measured before the origin is nudged along `normal`
    /// and before the direction is normalized.
    pub fn light_sample(&self, point: Vec3, normal: Vec3) -> LightSample {
        let to_light = Ray::new(point, self.light - point);
        let distance = to_light.direction.length();

        LightSample {
            ray: to_light.nudged(normal).normalized(),
            distance,
        }
    }

    /// Check if any shape sits between the sample origin and the light.
    pub fn is_blocked(&self, sample: &LightSample) -> bool {
        self.shapes
            .iter()
            .filter_map(|shape| shape.intersect(&sample.ray))
            .any(|distance| distance < sample.distance)
    }

    /// Check if the light is hidden from `point` on a surface facing `normal`.
    pub fn is_occluded(&self, point: Vec3, normal: Vec3) -> bool {
        self.is_blocked(&self.light_sample(point, normal))
    }
}
