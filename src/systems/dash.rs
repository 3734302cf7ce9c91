//! Stamina-gated dash regulator.
//!
//! Once per frame every pawn's [`Dash`] is ticked with the frame delta. The
//! returned multiplier is applied to the captured [`MovementBaseline`] and
//! written over the movement limits, so the limits are always either the
//! baseline or the boosted baseline, never compounded.
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::charactermovement::{CharacterMovement, MovementBaseline};
use crate::components::dash::Dash;
use crate::resources::worldtime::WorldTime;

pub fn dash_regulator(
    mut query: Query<(Entity, &mut Dash, &mut CharacterMovement, &MovementBaseline)>,
    time: Res<WorldTime>,
) {
    for (entity, mut dash, mut movement, baseline) in query.iter_mut() {
        let was_boosting = dash.is_boosting();
        let multiplier = dash.tick(time.delta);
        if was_boosting && !dash.is_boosting() && dash.is_dashing() {
            debug!("Pawn {:?} ran out of stamina", entity);
        }
        movement.apply_speed_multiplier(baseline, multiplier);
    }
}
