//! Scene file loading and validation.
//!
//! Scenes are stored as JSON. Loading reads the file, deserializes it and
//! validates the preconditions the renderer relies on: every referenced
//! material exists, spheres have positive radii, planes have usable normals
//! and triangles are not collinear.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::scene::{PrimitiveDescription, SceneDescription};

/// Errors that can occur while loading or validating a scene.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("unknown material '{material}' referenced by {shape}")]
    UnknownMaterial { material: String, shape: String },

    #[error("duplicate material name '{0}'")]
    DuplicateMaterial(String),

    #[error("material '{material}': glossiness must be positive, got {value}")]
    InvalidGlossiness { material: String, value: f32 },

    #[error("material '{material}': refractive index {value} is unusable for a refractive material")]
    InvalidRefractiveIndex { material: String, value: f32 },

    #[error("sphere radius must be positive, got {0}")]
    InvalidRadius(f32),

    #[error("plane normal must be non-zero")]
    ZeroNormal,

    #[error("triangle vertices are collinear")]
    DegenerateTriangle,
}

/// Result type for scene loading operations.
pub type SceneResult<T> = Result<T, SceneError>;

/// Load a scene description from a JSON file.
///
/// The description is validated before it is returned, so a successful load
/// is safe to hand to the renderer.
pub fn load_scene(path: impl AsRef<Path>) -> SceneResult<SceneDescription> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let description: SceneDescription = serde_json::from_str(&text)?;
    description.validate()?;

    log::info!(
        "Loaded scene '{}': {} materials, {} primitives",
        path.display(),
        description.materials.len(),
        description.primitives.len()
    );

    Ok(description)
}

impl SceneDescription {
    /// Check the preconditions the renderer relies on.
    pub fn validate(&self) -> SceneResult<()> {
        let mut names = HashSet::new();
        for material in &self.materials {
            if !names.insert(material.name.as_str()) {
                return Err(SceneError::DuplicateMaterial(material.name.clone()));
            }
            if material.glossiness <= 0.0 {
                return Err(SceneError::InvalidGlossiness {
                    material: material.name.clone(),
                    value: material.glossiness,
                });
            }
            // The tracer divides by the refractive index when the material
            // refracts; non-refractive materials may carry any index.
            if material.refraction > 0.0 && material.refractive_index <= 0.0 {
                return Err(SceneError::InvalidRefractiveIndex {
                    material: material.name.clone(),
                    value: material.refractive_index,
                });
            }
        }

        for primitive in &self.primitives {
            let material = primitive.material_name();
            if !names.contains(material) {
                return Err(SceneError::UnknownMaterial {
                    material: material.to_string(),
                    shape: primitive.shape_name().to_string(),
                });
            }
            match primitive {
                PrimitiveDescription::Sphere { radius, .. } => {
                    if *radius <= 0.0 {
                        return Err(SceneError::InvalidRadius(*radius));
                    }
                }
                PrimitiveDescription::Plane { normal, .. } => {
                    if normal.length_squared() == 0.0 {
                        return Err(SceneError::ZeroNormal);
                    }
                }
                PrimitiveDescription::Triangle { points, .. } => {
                    let cross = (points[1] - points[0]).cross(points[2] - points[0]);
                    if cross.length_squared() == 0.0 {
                        return Err(SceneError::DegenerateTriangle);
                    }
                }
            }
        }

        if self.primitives.is_empty() {
            log::warn!("Scene has no primitives; every pixel will miss");
        }

        Ok(())
    }
}
