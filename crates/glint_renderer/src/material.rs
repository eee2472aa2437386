//! Phong material for surface shading.

use glint_core::MaterialDescription;
use glint_math::Vec3;

/// Color type alias (RGB values typically 0-1)
pub type Color = Vec3;

/// Surface material for Phong shading plus reflection/refraction blending.
///
/// Materials are immutable once constructed and shared many-to-one by the
/// primitives that use them (via `Arc`). Reflectance channels are
/// conventionally in [0, 1] but are not clamped.
#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    /// Ambient reflectance, applied unscaled by the light
    pub ambient: Vec3,
    /// Diffuse reflectance
    pub diffuse: Vec3,
    /// Specular reflectance
    pub specular: Vec3,
    /// Phong specular exponent (> 0)
    pub glossiness: f32,
    /// Reflectivity coefficient in [0, 1]
    pub reflection: f32,
    /// Refractive contribution in [0, 1]; 0 means the material never refracts
    pub refraction: f32,
    /// Index of refraction of the interior; 1 denotes no special medium
    pub refractive_index: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            ambient: Vec3::ONE,
            diffuse: Vec3::ONE,
            specular: Vec3::ONE,
            glossiness: 10.0,
            reflection: 0.0,
            refraction: 0.0,
            refractive_index: 1.0,
        }
    }
}

impl From<&MaterialDescription> for Material {
    fn from(description: &MaterialDescription) -> Self {
        Self {
            ambient: description.ambient,
            diffuse: description.diffuse,
            specular: description.specular,
            glossiness: description.glossiness,
            reflection: description.reflection,
            refraction: description.refraction,
            refractive_index: description.refractive_index,
        }
    }
}
