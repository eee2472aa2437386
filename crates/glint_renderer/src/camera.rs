//! Camera for primary ray generation.
//!
//! Rays are built by unprojecting each pixel center through the inverse of
//! the view-projection transform: the near-plane point is the ray origin
//! and the direction points at the far-plane point.

use glint_math::{Mat4, Ray, Vec3, Vec4};

/// Camera generating one primary ray per pixel.
#[derive(Clone)]
pub struct Camera {
    // Image settings
    pub image_width: u32,
    pub image_height: u32,

    // Camera positioning
    look_from: Vec3,
    look_at: Vec3,
    vup: Vec3,

    // Projection settings
    vfov: f32,   // Vertical field of view in degrees
    z_near: f32, // Near clip plane distance
    z_far: f32,  // Far clip plane distance

    // Cached inverse view-projection (set by initialize())
    inv_view_proj: Mat4,
}

impl Camera {
    /// Create a new camera with default settings.
    pub fn new() -> Self {
        Self {
            image_width: 640,
            image_height: 480,
            look_from: Vec3::new(-10.0, 10.0, 10.0),
            look_at: Vec3::ZERO,
            vup: Vec3::Y,
            vfov: 45.0,
            z_near: 1.0,
            z_far: 10000.0,
            inv_view_proj: Mat4::IDENTITY,
        }
    }

    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.image_width = width;
        self.image_height = height;
        self
    }

    /// Set camera position.
    pub fn with_position(mut self, look_from: Vec3, look_at: Vec3, vup: Vec3) -> Self {
        self.look_from = look_from;
        self.look_at = look_at;
        self.vup = vup;
        self
    }

    /// Set projection settings: vertical field of view in degrees and the
    /// clip plane distances.
    pub fn with_lens(mut self, vfov: f32, z_near: f32, z_far: f32) -> Self {
        self.vfov = vfov;
        self.z_near = z_near;
        self.z_far = z_far;
        self
    }

    /// Compute the cached inverse view-projection matrix.
    ///
    /// Must be called after the builder methods and before `primary_ray`.
    pub fn initialize(&mut self) {
        let view = Mat4::look_at_rh(self.look_from, self.look_at, self.vup);
        let aspect = self.image_width as f32 / self.image_height as f32;
        let proj =
            Mat4::perspective_rh_gl(self.vfov.to_radians(), aspect, self.z_near, self.z_far);
        self.inv_view_proj = (proj * view).inverse();
    }

    /// Build the primary ray through the center of pixel (x, y).
    pub fn primary_ray(&self, x: u32, y: u32) -> Ray {
        // Pixel center in normalized device coordinates; y grows downward
        // in image space, upward in NDC
        let ndc_x = 2.0 * ((x as f32 + 0.5) / self.image_width as f32) - 1.0;
        let ndc_y = -2.0 * ((y as f32 + 0.5) / self.image_height as f32) + 1.0;

        let near = self.unproject(ndc_x, ndc_y, -1.0);
        let far = self.unproject(ndc_x, ndc_y, 1.0);

        Ray::new(near, (far - near).normalize())
    }

    /// Transform an NDC point back to world space with perspective divide.
    fn unproject(&self, x: f32, y: f32, z: f32) -> Vec3 {
        let world = self.inv_view_proj * Vec4::new(x, y, z, 1.0);
        world.truncate() / world.w
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}
