//! Sphere primitive.

use std::sync::Arc;

use glint_math::{Ray, Vec3};

use crate::{
    primitive::{Intersection, Primitive},
    Material,
};

/// A sphere primitive.
pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: Arc<Material>,
}

impl Sphere {
    /// Create a new sphere. The radius must be positive.
    pub fn new(center: Vec3, radius: f32, material: Arc<Material>) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }
}

impl Primitive for Sphere {
    fn intersect(&self, ray: &Ray) -> Option<Intersection<'_>> {
        // Solve the quadratic a*t^2 + b*t + c = 0
        let oc = ray.origin - self.center;
        let a = ray.direction.dot(ray.direction);
        let b = (2.0 * ray.direction).dot(oc);
        let c = oc.dot(oc) - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        // The smaller root is the near intersection. The far root is never
        // consulted, so a ray starting inside the sphere does not hit it.
        let t = (-b - discriminant.sqrt()) / (2.0 * a);
        if t < 0.0 {
            // intersection behind the ray origin
            return None;
        }

        let point = ray.at(t);
        Some(Intersection {
            point,
            normal: (point - self.center).normalize(),
            material: self.material.as_ref(),
            time: ray.origin.distance(point),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_sphere() -> Sphere {
        Sphere::new(Vec3::ZERO, 1.0, Arc::new(Material::default()))
    }

    #[test]
    fn test_sphere_hit_along_axis() {
        let sphere = Sphere::new(Vec3::ZERO, 3.0, Arc::new(Material::default()));
        let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::new(0.0, 0.0, -1.0));

        let hit = sphere.intersect(&ray).expect("ray should hit the sphere");
        assert!((hit.time - 7.0).abs() < 1e-5); // 10 - r
        assert!((hit.normal - Vec3::Z).length() < 1e-5);
        assert!((hit.point - Vec3::new(0.0, 0.0, 3.0)).length() < 1e-4);
    }

    #[test]
    fn test_sphere_miss_negative_discriminant() {
        let sphere = unit_sphere();

        // Ray passing well to the side of the sphere
        let ray = Ray::new(Vec3::new(0.0, 5.0, 10.0), Vec3::new(0.0, 0.0, -1.0));
        assert!(sphere.intersect(&ray).is_none());
    }

    #[test]
    fn test_sphere_behind_origin_rejected() {
        let sphere = unit_sphere();

        // Sphere is behind the ray
        let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::new(0.0, 0.0, 1.0));
        assert!(sphere.intersect(&ray).is_none());
    }

    #[test]
    fn test_sphere_inside_origin_not_hit() {
        // The near root is negative for a ray starting inside, so no hit
        // is reported.
        let sphere = unit_sphere();
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        assert!(sphere.intersect(&ray).is_none());
    }

    #[test]
    fn test_sphere_normal_points_outward() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -5.0), 2.0, Arc::new(Material::default()));
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        let hit = sphere.intersect(&ray).unwrap();
        assert!((hit.normal - Vec3::Z).length() < 1e-5);
        assert!((hit.normal.length() - 1.0).abs() < 1e-5);
    }
}
