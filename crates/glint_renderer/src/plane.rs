//! Infinite plane primitive.

use std::sync::Arc;

use glint_math::{Ray, Vec3};

use crate::{
    primitive::{Intersection, Primitive},
    Material,
};

/// An infinite plane defined by a point on it and its normal.
pub struct Plane {
    point: Vec3,
    normal: Vec3,
    material: Arc<Material>,
}

impl Plane {
    /// Create a new plane. The normal is normalized here; the raw vector
    /// may have any non-zero length.
    pub fn new(point: Vec3, normal: Vec3, material: Arc<Material>) -> Self {
        Self {
            point,
            normal: normal.normalize(),
            material,
        }
    }
}

impl Primitive for Plane {
    fn intersect(&self, ray: &Ray) -> Option<Intersection<'_>> {
        let angle = ray.direction.dot(self.normal);
        // A parallel ray never crosses the plane, and this also guards the
        // division below.
        if angle == 0.0 {
            return None;
        }

        let t = (self.point - ray.origin).dot(self.normal) / angle;
        if t <= 0.0 {
            // intersection on or behind the ray origin
            return None;
        }

        let point = ray.at(t);
        Some(Intersection {
            point,
            // The stored normal, never flipped toward the ray
            normal: self.normal,
            material: self.material.as_ref(),
            time: ray.origin.distance(point),
        })
    }
}
