//! Scene: the primitive collection and its light.
//!
//! Finding the closest hit is a linear scan over the primitives. Order of
//! iteration is deterministic, and the result is order-independent except
//! for exactly-equal times, where the first primitive in scene order wins.

use std::collections::HashMap;
use std::sync::Arc;

use glint_core::{PrimitiveDescription, SceneDescription, SceneError};
use glint_math::{Ray, Vec3};

use crate::{
    primitive::{Intersection, Primitive},
    Material, Plane, Sphere, Triangle,
};

/// A point light with per-channel intensity.
#[derive(Debug, Clone, Copy)]
pub struct PointLight {
    /// Position in world space
    pub position: Vec3,
    /// Per-channel intensity (RGB); multiplies the shaded color
    pub intensity: Vec3,
}

/// An ordered collection of primitives plus the light illuminating them.
///
/// Read-only for the duration of a frame; every cast shares it immutably.
pub struct Scene {
    primitives: Vec<Box<dyn Primitive>>,
    light: PointLight,
}

impl Scene {
    /// Create an empty scene lit by the given light.
    pub fn new(light: PointLight) -> Self {
        Self {
            primitives: Vec::new(),
            light,
        }
    }

    /// Build a scene from a description, resolving named material
    /// references into shared `Arc<Material>`s.
    pub fn from_description(description: &SceneDescription) -> Result<Self, SceneError> {
        let materials: HashMap<&str, Arc<Material>> = description
            .materials
            .iter()
            .map(|m| (m.name.as_str(), Arc::new(Material::from(m))))
            .collect();

        let resolve = |primitive: &PrimitiveDescription| -> Result<Arc<Material>, SceneError> {
            materials
                .get(primitive.material_name())
                .cloned()
                .ok_or_else(|| SceneError::UnknownMaterial {
                    material: primitive.material_name().to_string(),
                    shape: primitive.shape_name().to_string(),
                })
        };

        let mut scene = Scene::new(PointLight {
            position: description.light.position,
            intensity: description.light.intensity,
        });

        for primitive in &description.primitives {
            let material = resolve(primitive)?;
            match primitive {
                PrimitiveDescription::Sphere { center, radius, .. } => {
                    scene.add(Box::new(Sphere::new(*center, *radius, material)));
                }
                PrimitiveDescription::Plane { point, normal, .. } => {
                    scene.add(Box::new(Plane::new(*point, *normal, material)));
                }
                PrimitiveDescription::Triangle { points, .. } => {
                    scene.add(Box::new(Triangle::new(
                        points[0], points[1], points[2], material,
                    )));
                }
            }
        }

        log::debug!(
            "Built scene: {} primitives, light at {:?}",
            scene.len(),
            scene.light.position
        );

        Ok(scene)
    }

    /// Add a primitive to the scene.
    pub fn add(&mut self, primitive: Box<dyn Primitive>) {
        self.primitives.push(primitive);
    }

    /// The scene's point light.
    pub fn light(&self) -> PointLight {
        self.light
    }

    /// The ordered primitive list.
    pub fn primitives(&self) -> &[Box<dyn Primitive>] {
        &self.primitives
    }

    /// Get the number of primitives.
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    /// Check if the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Find the intersection with minimal positive time along the ray.
    pub fn closest_hit(&self, ray: &Ray) -> Option<Intersection<'_>> {
        let mut closest: Option<Intersection> = None;
        let mut closest_time = f32::INFINITY;

        for primitive in &self.primitives {
            if let Some(hit) = primitive.intersect(ray) {
                if hit.time < closest_time {
                    closest_time = hit.time;
                    closest = Some(hit);
                }
            }
        }

        closest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_core::demo_scene;

    fn lit() -> PointLight {
        PointLight {
            position: Vec3::new(0.0, 100.0, 0.0),
            intensity: Vec3::ONE,
        }
    }

    #[test]
    fn test_closest_hit_picks_smaller_time() {
        // Two overlapping spheres along one ray; the nearer surface wins.
        let material = Arc::new(Material::default());
        let mut scene = Scene::new(lit());
        scene.add(Box::new(Sphere::new(
            Vec3::new(0.0, 0.0, -10.0),
            2.0,
            material.clone(),
        )));
        scene.add(Box::new(Sphere::new(
            Vec3::new(0.0, 0.0, -11.0),
            2.0,
            material,
        )));

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let hit = scene.closest_hit(&ray).unwrap();
        assert!((hit.time - 8.0).abs() < 1e-5);
    }

    #[test]
    fn test_closest_hit_order_independent() {
        let material = Arc::new(Material::default());

        let mut forward = Scene::new(lit());
        forward.add(Box::new(Sphere::new(Vec3::new(0.0, 0.0, -10.0), 2.0, material.clone())));
        forward.add(Box::new(Sphere::new(Vec3::new(0.0, 0.0, -11.0), 2.0, material.clone())));

        let mut reversed = Scene::new(lit());
        reversed.add(Box::new(Sphere::new(Vec3::new(0.0, 0.0, -11.0), 2.0, material.clone())));
        reversed.add(Box::new(Sphere::new(Vec3::new(0.0, 0.0, -10.0), 2.0, material)));

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let a = forward.closest_hit(&ray).unwrap();
        let b = reversed.closest_hit(&ray).unwrap();
        assert_eq!(a.time, b.time);
        assert_eq!(a.point, b.point);
    }

    #[test]
    fn test_empty_scene_misses() {
        let scene = Scene::new(lit());
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        assert!(scene.closest_hit(&ray).is_none());
        assert!(scene.is_empty());
    }

    #[test]
    fn test_from_description_builds_demo() {
        let description = demo_scene();
        let scene = Scene::from_description(&description).unwrap();
        assert_eq!(scene.len(), description.primitives.len());
        assert_eq!(scene.light().position, description.light.position);
    }

    #[test]
    fn test_from_description_rejects_unknown_material() {
        let mut description = demo_scene();
        description.primitives.push(PrimitiveDescription::Sphere {
            center: Vec3::ZERO,
            radius: 1.0,
            material: "missing".to_string(),
        });

        assert!(matches!(
            Scene::from_description(&description),
            Err(SceneError::UnknownMaterial { .. })
        ));
    }
}
