//! Built-in demo scene.
//!
//! A closed room corner: ten spheres of varying finish resting near the
//! floor, one mirror triangle, and four walls. Used by the render binary
//! when no scene file is given, and by tests that need a full scene.

use glint_math::Vec3;

use crate::scene::{
    CameraDescription, LightDescription, MaterialDescription, PrimitiveDescription,
    SceneDescription,
};

fn material(
    name: &str,
    ambient: [f32; 3],
    diffuse: [f32; 3],
    specular: [f32; 3],
    glossiness: f32,
    reflection: f32,
    refraction: f32,
    refractive_index: f32,
) -> MaterialDescription {
    MaterialDescription {
        name: name.to_string(),
        ambient: Vec3::from(ambient),
        diffuse: Vec3::from(diffuse),
        specular: Vec3::from(specular),
        glossiness,
        reflection,
        refraction,
        refractive_index,
    }
}

fn sphere(center: [f32; 3], radius: f32, material: &str) -> PrimitiveDescription {
    PrimitiveDescription::Sphere {
        center: Vec3::from(center),
        radius,
        material: material.to_string(),
    }
}

fn plane(point: [f32; 3], normal: [f32; 3], material: &str) -> PrimitiveDescription {
    PrimitiveDescription::Plane {
        point: Vec3::from(point),
        normal: Vec3::from(normal),
        material: material.to_string(),
    }
}

/// Build the demo scene.
pub fn demo_scene() -> SceneDescription {
    let materials = vec![
        material("chrome", [0.01, 0.01, 0.01], [0.9, 0.9, 0.9], [0.8, 0.8, 1.0], 20.0, 0.0, 0.7, 1.4),
        material("gloss_green", [0.01, 0.05, 0.02], [0.4, 0.6, 0.3], [0.5, 0.5, 0.5], 30.0, 0.1, 0.0, 1.0),
        material("gloss_red", [0.05, 0.03, 0.03], [1.0, 0.3, 0.3], [0.7, 0.7, 0.7], 10.0, 0.2, 0.0, 1.0),
        material("mirror_pink", [0.05, 0.03, 0.03], [1.0, 0.5, 0.7], [0.7, 0.7, 0.7], 10.0, 0.4, 0.0, 1.0),
        material("shiny_blue", [0.01, 0.05, 0.02], [0.3, 0.3, 1.0], [0.2, 0.2, 0.2], 60.0, 0.3, 0.0, 1.0),
        material("white_wall", [0.3, 0.3, 0.3], [0.7, 0.7, 0.7], [0.7, 0.7, 0.7], 20.0, 0.5, 0.0, 1.0),
        material("coral", [0.03, 0.03, 0.03], [0.9, 0.6, 0.5], [0.3, 0.3, 0.3], 20.0, 0.4, 0.0, 1.0),
        material("rust", [0.03, 0.03, 0.03], [0.9, 0.4, 0.3], [0.3, 0.3, 0.3], 10.0, 0.1, 0.0, 1.0),
        material("sand", [0.03, 0.03, 0.03], [0.7, 0.7, 0.5], [0.3, 0.3, 0.3], 30.0, 0.0, 0.0, 1.0),
        material("lime", [0.03, 0.03, 0.03], [0.8, 0.9, 0.6], [0.3, 0.3, 0.3], 50.0, 0.5, 0.0, 1.0),
        material("moss", [0.03, 0.03, 0.03], [0.4, 0.6, 0.2], [0.3, 0.3, 0.3], 90.0, 0.5, 0.0, 1.0),
        material("amber", [0.03, 0.03, 0.03], [0.8, 0.5, 0.3], [0.3, 0.3, 0.3], 70.0, 0.3, 0.1, 1.0),
    ];

    let primitives = vec![
        sphere([150.0, -170.0, -150.0], 30.0, "chrome"),
        sphere([140.0, -180.0, -90.0], 20.0, "gloss_red"),
        sphere([190.0, -178.0, -110.0], 22.0, "gloss_green"),
        sphere([220.0, -181.0, -160.0], 19.0, "shiny_blue"),
        sphere([210.0, -182.0, -220.0], 18.0, "coral"),
        sphere([170.0, -182.0, -200.0], 18.0, "rust"),
        sphere([140.0, -181.0, -230.0], 19.0, "sand"),
        sphere([100.0, -178.0, -200.0], 22.0, "lime"),
        sphere([50.0, -181.0, -150.0], 19.0, "moss"),
        sphere([90.0, -181.0, -100.0], 19.0, "amber"),
        PrimitiveDescription::Triangle {
            points: [
                Vec3::new(80.0, -200.0, -180.0),
                Vec3::new(120.0, -200.0, -120.0),
                Vec3::new(110.0, -140.0, -150.0),
            ],
            material: "mirror_pink".to_string(),
        },
        plane([0.0, 0.0, -250.0], [0.0, 0.0, 1.0], "white_wall"),
        plane([250.0, 0.0, 0.0], [-1.0, 0.0, 0.0], "white_wall"),
        plane([0.0, -200.0, 0.0], [0.0, 1.0, 0.0], "white_wall"),
        plane([0.0, 500.0, 0.0], [0.0, -1.0, 0.0], "white_wall"),
    ];

    SceneDescription {
        camera: CameraDescription {
            look_from: Vec3::new(-10.0, 10.0, 10.0),
            look_at: Vec3::ZERO,
            up: Vec3::Y,
            vfov: 45.0,
            width: 640,
            height: 480,
        },
        light: LightDescription {
            position: Vec3::new(-150.0, 300.0, 10.0),
            intensity: Vec3::ONE,
        },
        materials,
        primitives,
    }
}
