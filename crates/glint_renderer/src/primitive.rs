//! Primitive trait and Intersection record for ray-object intersection.

use glint_math::{Ray, Vec3};

use crate::Material;

/// Record of a successful ray-primitive intersection.
///
/// Constructed fresh per query and never persisted; the material reference
/// borrows from the primitive that produced the hit.
#[derive(Clone)]
pub struct Intersection<'a> {
    /// Point of intersection in world space
    pub point: Vec3,
    /// Surface normal at the intersection (unit length, oriented per
    /// primitive convention; not flipped toward the ray)
    pub normal: Vec3,
    /// Material at the intersection point
    pub material: &'a Material,
    /// Distance from the ray origin to the intersection, always positive
    pub time: f32,
}

/// Trait for shapes that can be intersected by rays.
///
/// Implementations are side-effect free: they read only their own fields
/// and the ray. A miss is `None`, never an error - degenerate rays and
/// hits behind the origin are ordinary misses.
pub trait Primitive: Send + Sync {
    /// Test the ray against this primitive.
    ///
    /// Returns the intersection closest to the ray origin with strictly
    /// positive distance, or `None`.
    fn intersect(&self, ray: &Ray) -> Option<Intersection<'_>>;
}
