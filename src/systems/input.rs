//! Input systems.
//!
//! - [`update_input_state`] reads hardware input from Raylib each frame and
//!   writes the results into [`InputState`].
//! - [`emit_input_events`] turns that state into events: an [`ActionEvent`]
//!   for every press/release edge of a named action, one [`AxisEvent`] per
//!   named axis per frame and a [`TouchEvent`] for every touch edge. The
//!   debug toggle action also fires a [`SwitchDebugEvent`].
//!
//! The two are split so tests can fill `InputState` by hand and run only the
//! emitting half.
use bevy_ecs::prelude::*;

use crate::events::input::{
    ACTION_TOGGLE_DEBUG, ActionEvent, AxisEvent, InputEdge, TouchEvent,
};
use crate::events::switchdebug::SwitchDebugEvent;
use crate::resources::input::{InputSource, InputState};

/// Poll Raylib for keyboard, mouse, gamepad and touch input and update the
/// `InputState` resource.
pub fn update_input_state(mut input: ResMut<InputState>, rl: NonSend<raylib::RaylibHandle>) {
    let gamepad = input.gamepad;
    let has_gamepad = rl.is_gamepad_available(gamepad);

    for source in input.button_sources() {
        let down = match source {
            InputSource::Key(key) => rl.is_key_down(key),
            InputSource::GamepadButton(button) => {
                has_gamepad && rl.is_gamepad_button_down(gamepad, button)
            }
            InputSource::MouseButton(button) => rl.is_mouse_button_down(button),
        };
        input.set_button_down(source, down);
    }

    for axis in input.gamepad_axes() {
        let value = if has_gamepad {
            rl.get_gamepad_axis_movement(gamepad, axis)
        } else {
            0.0
        };
        input.set_gamepad_axis(axis, value);
    }

    input.set_mouse_delta(rl.get_mouse_delta());

    let touching = rl.get_touch_point_count() > 0;
    let location = if touching {
        rl.get_touch_position(0)
    } else {
        input.touch.location
    };
    input.set_touch(touching, location);
}

/// Trigger input events from the current `InputState`.
pub fn emit_input_events(input: Res<InputState>, mut commands: Commands) {
    for (action, edge) in input.action_edges() {
        if action == ACTION_TOGGLE_DEBUG && edge == InputEdge::Pressed {
            commands.trigger(SwitchDebugEvent {});
        }
        commands.trigger(ActionEvent { action, edge });
    }

    for axis in input.axis_names() {
        commands.trigger(AxisEvent::new(axis, input.axis_value(axis)));
    }

    let touch = input.touch;
    if touch.state.just_pressed {
        commands.trigger(TouchEvent {
            finger: 0,
            location: touch.location,
            edge: InputEdge::Pressed,
        });
    }
    if touch.state.just_released {
        commands.trigger(TouchEvent {
            finger: 0,
            location: touch.location,
            edge: InputEdge::Released,
        });
    }
}
