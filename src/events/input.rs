//! Input events.
//!
//! Hardware input is translated into three kinds of events:
//! - [`ActionEvent`] – a named action was pressed or released
//! - [`AxisEvent`] – the current value of a named axis, sent every frame
//! - [`TouchEvent`] – a finger touched or left the screen
//!
//! Observers in [`crate::systems::dispatch`] route them to the handlers bound
//! in [`InputBindings`](crate::resources::inputbindings::InputBindings).

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

pub const ACTION_DASH: &str = "Dash";
pub const ACTION_RESET_VIEW: &str = "ResetView";
pub const ACTION_TOGGLE_DEBUG: &str = "ToggleDebug";
pub const ACTION_QUIT: &str = "Quit";

pub const AXIS_MOVE_FORWARD: &str = "MoveForward";
pub const AXIS_MOVE_RIGHT: &str = "MoveRight";
pub const AXIS_TURN: &str = "Turn";
pub const AXIS_TURN_RATE: &str = "TurnRate";
pub const AXIS_LOOK_UP: &str = "LookUp";
pub const AXIS_LOOK_UP_RATE: &str = "LookUpRate";

/// Edge of a discrete input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEdge {
    Pressed,
    Released,
}

impl InputEdge {
    pub fn from_pressed(pressed: bool) -> Self {
        if pressed {
            InputEdge::Pressed
        } else {
            InputEdge::Released
        }
    }
}

/// A named action changed state.
#[derive(Event, Debug, Clone)]
pub struct ActionEvent {
    pub action: String,
    pub edge: InputEdge,
}

impl ActionEvent {
    pub fn pressed(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            edge: InputEdge::Pressed,
        }
    }

    pub fn released(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            edge: InputEdge::Released,
        }
    }
}

/// Value of a named axis for this frame. Zero values are sent too.
#[derive(Event, Debug, Clone)]
pub struct AxisEvent {
    pub axis: String,
    pub value: f32,
}

impl AxisEvent {
    pub fn new(axis: impl Into<String>, value: f32) -> Self {
        Self {
            axis: axis.into(),
            value,
        }
    }
}

/// A touch began or ended.
#[derive(Event, Debug, Clone, Copy)]
pub struct TouchEvent {
    /// Index of the finger.
    pub finger: u32,
    /// Screen position in pixels.
    pub location: Vector2,
    pub edge: InputEdge,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_from_pressed() {
        assert_eq!(InputEdge::from_pressed(true), InputEdge::Pressed);
        assert_eq!(InputEdge::from_pressed(false), InputEdge::Released);
    }

    #[test]
    fn test_action_event_constructors() {
        let e = ActionEvent::released(ACTION_DASH);
        assert_eq!(e.action, "Dash");
        assert_eq!(e.edge, InputEdge::Released);
    }
}
