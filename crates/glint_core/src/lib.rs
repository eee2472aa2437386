//! Glint Core - Scene description and loading for the glint ray tracer.
//!
//! This crate provides:
//!
//! - **Scene description types**: `SceneDescription`, `MaterialDescription`,
//!   `PrimitiveDescription` - a serializable, renderer-agnostic scene format
//! - **Loading**: JSON scene files with validation of geometric and material
//!   preconditions
//! - **Demo scene**: a built-in room scene for rendering without a scene file
//!
//! # Example
//!
//! ```ignore
//! use glint_core::load_scene;
//!
//! let description = load_scene("scene.json")?;
//! println!("Loaded {} materials, {} primitives",
//!     description.materials.len(),
//!     description.primitives.len());
//! ```

pub mod demo;
pub mod loader;
pub mod scene;

// Re-export commonly used types
pub use demo::demo_scene;
pub use loader::{load_scene, SceneError};
pub use scene::{
    CameraDescription, LightDescription, MaterialDescription, PrimitiveDescription,
    SceneDescription,
};
