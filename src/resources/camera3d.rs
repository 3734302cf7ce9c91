//! Shared 3D camera resource.
//!
//! Wraps raylib's [`Camera3D`] so the camera rig and the renderer agree on a
//! single view. The camera rig system rewrites it every frame from the
//! player's follow camera.

use bevy_ecs::prelude::Resource;
use raylib::prelude::{Camera3D, Vector3};

use crate::components::camerarig::DEFAULT_FOVY;

/// ECS resource that holds the camera the scene is rendered through.
#[derive(Resource, Clone, Copy)]
pub struct ActiveCamera(pub Camera3D);

impl Default for ActiveCamera {
    fn default() -> Self {
        ActiveCamera(Camera3D::perspective(
            Vector3::new(-300.0, 300.0, 0.0),
            Vector3::zero(),
            Vector3::new(0.0, 1.0, 0.0),
            DEFAULT_FOVY,
        ))
    }
}
