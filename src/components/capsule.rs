use bevy_ecs::prelude::Component;

pub const DEFAULT_CAPSULE_RADIUS: f32 = 42.0;
pub const DEFAULT_CAPSULE_HALF_HEIGHT: f32 = 96.0;

/// Upright collision capsule centred on the pawn's position.
#[derive(Component, Clone, Copy, Debug)]
pub struct CapsuleCollider {
    pub radius: f32,
    /// Half of the total height, hemispheres included.
    pub half_height: f32,
}

impl Default for CapsuleCollider {
    fn default() -> Self {
        Self::new(DEFAULT_CAPSULE_RADIUS, DEFAULT_CAPSULE_HALF_HEIGHT)
    }
}

impl CapsuleCollider {
    /// Half height is raised to at least `radius` so the capsule stays well formed.
    pub fn new(radius: f32, half_height: f32) -> Self {
        let radius = radius.max(0.0);
        Self {
            radius,
            half_height: half_height.max(radius),
        }
    }

    /// Height of the straight section between the two hemispheres.
    pub fn cylinder_height(&self) -> f32 {
        (self.half_height - self.radius) * 2.0
    }
}
