//! Frame rendering and the color sink.
//!
//! One `trace_pixel` per pixel, single-threaded; pixels whose top-level
//! cast reports no hit receive the configured fallback color.

use std::path::Path;

use crate::{trace_pixel, Camera, Color, Scene};

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Color written for pixels whose primary ray hits nothing
    pub fallback: Color,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            fallback: Color::new(1.0, 0.0, 0.0),
        }
    }
}

/// Simple image buffer for storing render output.
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; (width * height) as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        self.pixels[(y * self.width + x) as usize] = color;
    }

    /// Convert to RGBA bytes (for display or saving).
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity((self.width * self.height * 4) as usize);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgba(*color));
        }
        bytes
    }

    /// Save the buffer as a PNG image.
    pub fn save_png(&self, path: impl AsRef<Path>) -> image::ImageResult<()> {
        image::save_buffer(
            path,
            &self.to_rgba(),
            self.width,
            self.height,
            image::ColorType::Rgba8,
        )
    }
}

/// Convert a color to 8-bit RGBA.
///
/// Channels are clamped to [0, 1]; colors are already display-referred, so
/// no gamma correction is applied.
pub fn color_to_rgba(color: Color) -> [u8; 4] {
    let r = (255.0 * color.x.clamp(0.0, 1.0)) as u8;
    let g = (255.0 * color.y.clamp(0.0, 1.0)) as u8;
    let b = (255.0 * color.z.clamp(0.0, 1.0)) as u8;
    [r, g, b, 255]
}

/// Render the entire scene to an image buffer.
pub fn render(camera: &Camera, scene: &Scene, config: &RenderConfig) -> ImageBuffer {
    log::debug!(
        "Rendering {}x{} pixels over {} primitives",
        camera.image_width,
        camera.image_height,
        scene.len()
    );

    let mut image = ImageBuffer::new(camera.image_width, camera.image_height);

    for y in 0..camera.image_height {
        for x in 0..camera.image_width {
            let ray = camera.primary_ray(x, y);
            let traced = trace_pixel(scene, &ray);
            let color = if traced.time > 0.0 {
                traced.color
            } else {
                config.fallback
            };
            image.set(x, y, color);
        }
    }

    image
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Material, PointLight, Sphere, Vec3};
    use std::sync::Arc;

    #[test]
    fn test_image_buffer_get_set() {
        let mut image = ImageBuffer::new(4, 3);
        image.set(2, 1, Color::new(0.5, 0.25, 1.0));

        assert_eq!(image.get(2, 1), Color::new(0.5, 0.25, 1.0));
        assert_eq!(image.get(0, 0), Color::ZERO);
        assert_eq!(image.pixels.len(), 12);
    }

    #[test]
    fn test_color_to_rgba_clamps() {
        assert_eq!(color_to_rgba(Color::new(0.0, 0.5, 1.0)), [0, 127, 255, 255]);
        assert_eq!(color_to_rgba(Color::new(-1.0, 2.0, 0.0)), [0, 255, 0, 255]);
    }

    #[test]
    fn test_render_uses_fallback_on_miss() {
        // Empty scene: every pixel misses
        let scene = Scene::new(PointLight {
            position: Vec3::new(0.0, 100.0, 0.0),
            intensity: Vec3::ONE,
        });
        let mut camera = Camera::new().with_resolution(4, 4);
        camera.initialize();
        let config = RenderConfig {
            fallback: Color::new(0.0, 1.0, 0.0),
        };

        let image = render(&camera, &scene, &config);
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(image.get(x, y), Color::new(0.0, 1.0, 0.0));
            }
        }
    }

    #[test]
    fn test_render_hits_are_not_fallback() {
        // A sphere dead ahead of the camera covers the center pixels
        let mut scene = Scene::new(PointLight {
            position: Vec3::new(0.0, 100.0, 0.0),
            intensity: Vec3::ONE,
        });
        scene.add(Box::new(Sphere::new(
            Vec3::new(0.0, 0.0, -10.0),
            4.0,
            Arc::new(Material {
                ambient: Vec3::splat(0.1),
                diffuse: Vec3::splat(0.6),
                specular: Vec3::ZERO,
                ..Material::default()
            }),
        )));

        let mut camera = Camera::new()
            .with_resolution(9, 9)
            .with_position(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), Vec3::Y)
            .with_lens(60.0, 0.1, 100.0);
        camera.initialize();

        let config = RenderConfig::default();
        let image = render(&camera, &scene, &config);

        // Center pixel hits the sphere, corner pixel misses
        assert_ne!(image.get(4, 4), config.fallback);
        assert_eq!(image.get(0, 0), config.fallback);
    }
}
