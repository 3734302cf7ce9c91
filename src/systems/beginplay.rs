//! First-frame setup for freshly spawned pawns.
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::charactermovement::{CharacterMovement, MovementBaseline};

/// Record the movement limits of every pawn that has no baseline yet.
///
/// Runs every frame but only touches a pawn once: the inserted
/// [`MovementBaseline`] excludes it from later runs.
pub fn capture_movement_baseline(
    query: Query<(Entity, &CharacterMovement), Without<MovementBaseline>>,
    mut commands: Commands,
) {
    for (entity, movement) in query.iter() {
        let baseline = MovementBaseline::capture(movement);
        debug!(
            "Captured movement baseline for {:?}: speed {:.1}, acceleration {:.1}",
            entity, baseline.max_walk_speed, baseline.max_acceleration
        );
        commands.entity(entity).insert(baseline);
    }
}
