//! Input dispatch observers.
//!
//! Each observer looks up the handlers bound to the incoming event in
//! [`InputBindings`] and runs them, in binding order, on every player pawn.
//! Handlers receive a [`PawnContext`] borrowed from the pawn's components and
//! the current frame delta from [`WorldTime`].
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;

use crate::character::PawnContext;
use crate::components::charactermovement::CharacterMovement;
use crate::components::controller::Controller;
use crate::components::dash::Dash;
use crate::components::inputcontrolled::PlayerCharacter;
use crate::events::input::{ActionEvent, AxisEvent, TouchEvent};
use crate::resources::inputbindings::InputBindings;
use crate::resources::worldtime::WorldTime;

/// Components a handler may touch.
pub type PawnQueryData = (
    &'static mut Dash,
    &'static mut CharacterMovement,
    Option<&'static mut Controller>,
    &'static PlayerCharacter,
);

fn for_each_pawn(
    pawns: &mut Query<PawnQueryData, With<PlayerCharacter>>,
    delta: f32,
    mut f: impl FnMut(&mut PawnContext),
) {
    for (mut dash, mut movement, controller, character) in pawns.iter_mut() {
        let mut ctx = PawnContext {
            dash: &mut *dash,
            movement: &mut *movement,
            controller: controller.map(|c| c.into_inner()),
            character,
            delta,
        };
        f(&mut ctx);
    }
}

/// Run the handlers bound to an action edge.
pub fn action_dispatch_observer(
    trigger: On<ActionEvent>,
    bindings: Res<InputBindings>,
    time: Res<WorldTime>,
    mut pawns: Query<PawnQueryData, With<PlayerCharacter>>,
) {
    let event = trigger.event();
    let handlers = bindings.action_handlers(&event.action, event.edge);
    if handlers.is_empty() {
        return;
    }
    for_each_pawn(&mut pawns, time.delta, |ctx| {
        for handler in handlers.iter() {
            handler(ctx);
        }
    });
}

/// Run the handlers bound to an axis with this frame's value.
pub fn axis_dispatch_observer(
    trigger: On<AxisEvent>,
    bindings: Res<InputBindings>,
    time: Res<WorldTime>,
    mut pawns: Query<PawnQueryData, With<PlayerCharacter>>,
) {
    let event = trigger.event();
    let handlers = bindings.axis_handlers(&event.axis);
    if handlers.is_empty() {
        return;
    }
    let value = event.value;
    for_each_pawn(&mut pawns, time.delta, |ctx| {
        for handler in handlers.iter() {
            handler(ctx, value);
        }
    });
}

/// Run the handlers bound to a touch edge.
pub fn touch_dispatch_observer(
    trigger: On<TouchEvent>,
    bindings: Res<InputBindings>,
    time: Res<WorldTime>,
    mut pawns: Query<PawnQueryData, With<PlayerCharacter>>,
) {
    let event = *trigger.event();
    let handlers = bindings.touch_handlers(event.edge);
    if handlers.is_empty() {
        return;
    }
    for_each_pawn(&mut pawns, time.delta, |ctx| {
        for handler in handlers.iter() {
            handler(ctx, event.finger, event.location);
        }
    });
}
