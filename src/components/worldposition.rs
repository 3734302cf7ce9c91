use bevy_ecs::prelude::Component;
use raylib::prelude::Vector3;

/// World-space position of an entity's root (the capsule centre for pawns).
#[derive(Component, Clone, Copy, Debug)]
pub struct WorldPosition {
    pub pos: Vector3,
}

impl WorldPosition {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            pos: Vector3::new(x, y, z),
        }
    }
}
