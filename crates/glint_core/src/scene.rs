//! Scene description types for glint.
//!
//! This module defines the serializable scene format consumed by the
//! renderer: a camera, one point light, a table of named Phong materials,
//! and an ordered list of primitives referencing materials by name.

use glint_math::Vec3;
use serde::{Deserialize, Serialize};

/// Complete description of a renderable scene.
///
/// The primitive list is ordered; the renderer scans it in order, so a
/// description round-trips deterministically.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SceneDescription {
    /// Camera the frame is rendered from
    pub camera: CameraDescription,

    /// The single point light illuminating the scene
    pub light: LightDescription,

    /// Named material table, shared by the primitives
    pub materials: Vec<MaterialDescription>,

    /// Ordered list of primitives
    pub primitives: Vec<PrimitiveDescription>,
}

/// Camera placement and projection settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CameraDescription {
    /// Eye position
    pub look_from: Vec3,

    /// Point the camera looks at
    pub look_at: Vec3,

    /// Up direction
    pub up: Vec3,

    /// Vertical field of view in degrees
    pub vfov: f32,

    /// Image width in pixels
    pub width: u32,

    /// Image height in pixels
    pub height: u32,
}

/// A point light with per-channel intensity.
///
/// Intensity multiplies the shaded color component-wise; there is no
/// distance attenuation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LightDescription {
    /// Light position in world space
    pub position: Vec3,

    /// Per-channel light intensity (RGB)
    pub intensity: Vec3,
}

/// A named Phong material.
///
/// Reflectance channels are conventionally in [0, 1] but are not clamped.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MaterialDescription {
    /// Unique name, referenced by primitives
    pub name: String,

    /// Ambient reflectance (RGB)
    pub ambient: Vec3,

    /// Diffuse reflectance (RGB)
    pub diffuse: Vec3,

    /// Specular reflectance (RGB)
    pub specular: Vec3,

    /// Phong specular exponent, must be positive
    pub glossiness: f32,

    /// Reflectivity coefficient in [0, 1]; 0 disables the reflected blend
    #[serde(default)]
    pub reflection: f32,

    /// Refractive contribution in [0, 1]; 0 disables refraction entirely
    #[serde(default)]
    pub refraction: f32,

    /// Index of refraction of the material's interior; only consulted when
    /// `refraction` is positive
    #[serde(default = "default_refractive_index")]
    pub refractive_index: f32,
}

fn default_refractive_index() -> f32 {
    1.0
}

/// A geometric primitive referencing a material by name.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PrimitiveDescription {
    Sphere {
        center: Vec3,
        radius: f32,
        material: String,
    },
    Plane {
        /// Any point on the plane
        point: Vec3,
        /// Plane normal; normalized by the renderer at construction
        normal: Vec3,
        material: String,
    },
    Triangle {
        /// The three vertices, in winding order
        points: [Vec3; 3],
        material: String,
    },
}

impl PrimitiveDescription {
    /// Name of the material this primitive references.
    pub fn material_name(&self) -> &str {
        match self {
            PrimitiveDescription::Sphere { material, .. } => material,
            PrimitiveDescription::Plane { material, .. } => material,
            PrimitiveDescription::Triangle { material, .. } => material,
        }
    }

    /// Shape name for diagnostics.
    pub fn shape_name(&self) -> &'static str {
        match self {
            PrimitiveDescription::Sphere { .. } => "sphere",
            PrimitiveDescription::Plane { .. } => "plane",
            PrimitiveDescription::Triangle { .. } => "triangle",
        }
    }
}
