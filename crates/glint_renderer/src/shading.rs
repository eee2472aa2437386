//! Direct illumination and the shadow test.

use glint_math::{Ray, Vec3};

use crate::{primitive::Intersection, tracer::EPSILON, Color, Scene};

/// Phong shading at a surface point from the scene's point light.
///
/// Specular and diffuse terms are clamped at zero independently; the
/// ambient term is applied unscaled. The final color is the component-wise
/// product of the light intensity with their sum. There is no distance
/// attenuation.
pub fn phong(scene: &Scene, ray: &Ray, hit: &Intersection) -> Color {
    let light = scene.light();
    let normal = hit.normal;

    let light_vec = (light.position - hit.point).normalize();
    let view_vec = (ray.origin - hit.point).normalize();

    // Light reflected about the normal, toward the viewer for highlights
    let reflected = 2.0 * normal * light_vec.dot(normal) - light_vec;
    let cos_alpha = reflected.dot(view_vec).max(0.0);

    let specular = hit.material.specular * cos_alpha.powf(hit.material.glossiness);
    let diffuse = (hit.material.diffuse * light_vec.dot(normal)).max(Vec3::ZERO);
    let ambient = hit.material.ambient;

    light.intensity * (specular + diffuse + ambient)
}

/// Whether the point is occluded from the scene's light.
///
/// Casts a secondary ray from the point toward the light, re-originated
/// `EPSILON` along its direction so the surface the point lies on does not
/// occlude itself. Any primitive hit strictly closer than the light settles
/// the query; occluders beyond the light do not count.
pub fn in_shadow(scene: &Scene, point: Vec3) -> bool {
    let light = scene.light();
    let direction = (light.position - point).normalize();
    let shadow_ray = Ray::new(point + EPSILON * direction, direction);
    let light_distance = light.position.distance(point);

    scene
        .primitives()
        .iter()
        .any(|primitive| {
            primitive
                .intersect(&shadow_ray)
                .is_some_and(|hit| hit.time < light_distance)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Material, PointLight, Sphere};
    use std::sync::Arc;

    fn light_above() -> PointLight {
        PointLight {
            position: Vec3::new(0.0, 100.0, 0.0),
            intensity: Vec3::ONE,
        }
    }

    #[test]
    fn test_phong_head_on() {
        // Light and viewer both straight up from the point: the reflected
        // light vector coincides with the view vector, so cos_alpha = 1 and
        // the color is intensity * (specular + diffuse + ambient).
        let scene = Scene::new(light_above());
        let material = Material {
            ambient: Vec3::splat(0.1),
            diffuse: Vec3::splat(0.5),
            specular: Vec3::splat(0.3),
            glossiness: 20.0,
            ..Material::default()
        };
        let hit = Intersection {
            point: Vec3::ZERO,
            normal: Vec3::Y,
            material: &material,
            time: 10.0,
        };
        let ray = Ray::new(Vec3::new(0.0, 10.0, 0.0), Vec3::new(0.0, -1.0, 0.0));

        let color = phong(&scene, &ray, &hit);
        assert!((color - Vec3::splat(0.9)).length() < 1e-5);
    }

    #[test]
    fn test_phong_light_behind_surface_leaves_ambient() {
        // Light below the surface: diffuse clamps to zero; the specular
        // lobe also vanishes for a viewer above.
        let scene = Scene::new(PointLight {
            position: Vec3::new(0.0, -100.0, 0.0),
            intensity: Vec3::ONE,
        });
        let material = Material {
            ambient: Vec3::splat(0.1),
            diffuse: Vec3::splat(0.5),
            specular: Vec3::ZERO,
            ..Material::default()
        };
        let hit = Intersection {
            point: Vec3::ZERO,
            normal: Vec3::Y,
            material: &material,
            time: 10.0,
        };
        let ray = Ray::new(Vec3::new(0.0, 10.0, 0.0), Vec3::new(0.0, -1.0, 0.0));

        let color = phong(&scene, &ray, &hit);
        assert!((color - Vec3::splat(0.1)).length() < 1e-5);
    }

    #[test]
    fn test_in_shadow_with_occluder() {
        let mut scene = Scene::new(light_above());
        scene.add(Box::new(Sphere::new(
            Vec3::new(0.0, 50.0, 0.0),
            5.0,
            Arc::new(Material::default()),
        )));

        assert!(in_shadow(&scene, Vec3::ZERO));
    }

    #[test]
    fn test_not_in_shadow_without_occluder() {
        let scene = Scene::new(light_above());
        assert!(!in_shadow(&scene, Vec3::ZERO));
    }

    #[test]
    fn test_occluder_beyond_light_ignored() {
        // The sphere is on the light ray but farther than the light itself.
        let mut scene = Scene::new(light_above());
        scene.add(Box::new(Sphere::new(
            Vec3::new(0.0, 200.0, 0.0),
            5.0,
            Arc::new(Material::default()),
        )));

        assert!(!in_shadow(&scene, Vec3::ZERO));
    }

    #[test]
    fn test_surface_does_not_shadow_itself() {
        // A point on a large sphere: the epsilon offset keeps the sphere
        // itself from occluding the light.
        let mut scene = Scene::new(light_above());
        scene.add(Box::new(Sphere::new(
            Vec3::new(0.0, -10.0, 0.0),
            10.0,
            Arc::new(Material::default()),
        )));

        // Top of the sphere, facing the light
        assert!(!in_shadow(&scene, Vec3::ZERO));
    }
}
