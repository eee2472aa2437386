//! Recursive ray casting.
//!
//! `cast_ray` resolves visibility, shading, shadowing, reflection and
//! refraction for one ray and returns an explicit [`Trace`] carrying the
//! color together with the recursion bookkeeping (bounce count, current
//! medium). Callers thread that bookkeeping into any further casts on the
//! same path; nothing is shared between pixels.

use glint_math::{Ray, Vec3};

use crate::{
    primitive::Intersection,
    shading::{in_shadow, phong},
    Color, Scene,
};

/// Forward offset applied to every secondary ray so it cannot immediately
/// re-intersect the surface it spawned from.
pub const EPSILON: f32 = 0.01;

/// Hard cutoff on reflective recursion depth.
pub const REFLECTION_LIMIT: u32 = 6;

/// Refractive index of the vacuum/air a path starts in.
pub const VACUUM_INDEX: f32 = 1.0;

/// Sentinel time reported when a ray hits nothing.
pub const NO_HIT: f32 = -1.0;

/// Result of casting one ray.
///
/// `bounces` and `medium` accumulate along the whole path: a recursive
/// cast returns them updated, and the caller passes them on to its next
/// recursive cast, exactly as if the path were traced sequentially.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trace {
    /// Light transport color for this ray
    pub color: Color,
    /// Distance to the hit, or [`NO_HIT`] if the ray escaped the scene
    pub time: f32,
    /// Reflective bounces spent so far on this path
    pub bounces: u32,
    /// Refractive index of the medium the path is currently inside
    pub medium: f32,
}

/// Cast a top-level pixel ray: no bounces spent, starting in vacuum.
pub fn trace_pixel(scene: &Scene, ray: &Ray) -> Trace {
    cast_ray(scene, ray, 0, VACUUM_INDEX)
}

/// Recursively cast a ray and compute its color.
///
/// A miss yields black and the [`NO_HIT`] sentinel. On a hit, the surface
/// color is Phong shading, or ambient alone when the point is shadowed;
/// reflection and refraction then each blend a recursive cast over it,
/// bounded by [`REFLECTION_LIMIT`] and the single-entry medium guard
/// respectively.
pub fn cast_ray(scene: &Scene, ray: &Ray, bounces: u32, medium: f32) -> Trace {
    let Some(hit) = scene.closest_hit(ray) else {
        return Trace {
            color: Color::ZERO,
            time: NO_HIT,
            bounces,
            medium,
        };
    };

    // A shadowed point keeps only its ambient term
    let surface = if in_shadow(scene, hit.point) {
        hit.material.ambient
    } else {
        phong(scene, ray, &hit)
    };

    // Reflection. One bounce is spent whether or not the recursive cast is
    // issued; at the limit the surface color passes through unchanged.
    let mut bounces = bounces + 1;
    let mut medium = medium;
    let reflection_color = if bounces < REFLECTION_LIMIT {
        let direction = reflect(ray.direction, hit.normal).normalize();
        let reflected = Ray::new(hit.point + EPSILON * direction, direction);
        let traced = cast_ray(scene, &reflected, bounces, medium);
        bounces = traced.bounces;
        medium = traced.medium;

        let reflectivity = hit.material.reflection;
        reflectivity * traced.color + (1.0 - reflectivity) * surface
    } else {
        surface
    };

    let (color, bounces, medium) =
        refraction_color(scene, ray, &hit, reflection_color, bounces, medium);

    Trace {
        color,
        time: hit.time,
        bounces,
        medium,
    }
}

/// Mirror `direction` about `normal`.
fn reflect(direction: Vec3, normal: Vec3) -> Vec3 {
    direction - 2.0 * direction.dot(normal) * normal
}

/// Blend the refracted cast over the reflection-stage color.
///
/// Refraction is taken only when the material refracts and the path is
/// still in vacuum: one refractive transition per path. The medium
/// transition is committed before the total-internal-reflection test, which
/// bars any further refraction along this path either way.
fn refraction_color(
    scene: &Scene,
    ray: &Ray,
    hit: &Intersection,
    reflection_color: Color,
    bounces: u32,
    medium: f32,
) -> (Color, u32, f32) {
    if hit.material.refraction <= 0.0 || medium != VACUUM_INDEX {
        return (reflection_color, bounces, medium);
    }

    let ratio = -medium / hit.material.refractive_index;
    let medium = hit.material.refractive_index;

    // Snell's law in vector form; a negative radicand means total internal
    // reflection and the refracted branch contributes nothing.
    let cos_incident = hit.normal.dot(-ray.direction);
    let radicand = 1.0 - ratio * ratio * (1.0 - cos_incident * cos_incident);
    if radicand < 0.0 {
        return (reflection_color, bounces, medium);
    }

    let direction =
        (ratio * cos_incident - radicand.sqrt()) * hit.normal - ratio * (-ray.direction);
    let refracted = Ray::new(hit.point + EPSILON * direction, direction);
    let traced = cast_ray(scene, &refracted, bounces, medium);

    let refraction = hit.material.refraction;
    (
        refraction * traced.color + (1.0 - refraction) * reflection_color,
        traced.bounces,
        traced.medium,
    )
}
