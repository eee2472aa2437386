//! Triangle primitive.
//!
//! Intersects the triangle's supporting plane first, then accepts the hit
//! only if it lies on the inner side of all three edges (the edge-function
//! inside test).

use std::sync::Arc;

use glint_math::{Ray, Vec3};

use crate::{
    primitive::{Intersection, Primitive},
    Material,
};

/// A triangle primitive.
pub struct Triangle {
    p1: Vec3,
    p2: Vec3,
    p3: Vec3,
    /// Face normal (unit length), fixed by the winding of the vertices
    normal: Vec3,
    material: Arc<Material>,
}

impl Triangle {
    /// Create a new triangle from three vertices in winding order.
    /// The vertices must not be collinear.
    pub fn new(p1: Vec3, p2: Vec3, p3: Vec3, material: Arc<Material>) -> Self {
        let normal = (p2 - p1).cross(p3 - p1).normalize();
        Self {
            p1,
            p2,
            p3,
            normal,
            material,
        }
    }
}

impl Primitive for Triangle {
    fn intersect(&self, ray: &Ray) -> Option<Intersection<'_>> {
        // Ray-plane intersection against the supporting plane
        let angle = ray.direction.dot(self.normal);
        if angle == 0.0 {
            return None;
        }

        let t = (self.p1 - ray.origin).dot(self.normal) / angle;
        if t <= 0.0 {
            return None;
        }

        let point = ray.at(t);

        // The candidate must lie on the same side of every edge.
        let edges = [(self.p1, self.p2), (self.p2, self.p3), (self.p3, self.p1)];
        for (a, b) in edges {
            if self.normal.dot((b - a).cross(point - a)) < 0.0 {
                return None;
            }
        }

        Some(Intersection {
            point,
            normal: self.normal,
            material: self.material.as_ref(),
            time: ray.origin.distance(point),
        })
    }
}
