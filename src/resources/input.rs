//! Per-frame input state and the mappings from hardware to named inputs.
//!
//! [`InputState`] keeps two tables, like an engine's input settings:
//! - action mappings: a button (key, gamepad button, mouse button) drives a
//!   named action such as `Dash`
//! - axis mappings: a button or an analog source contributes a scaled value
//!   to a named axis such as `MoveForward`
//!
//! The raylib poll system writes raw hardware state through
//! [`InputState::set_button_down`], [`InputState::set_gamepad_axis`],
//! [`InputState::set_mouse_delta`] and [`InputState::set_touch`]. Nothing
//! here talks to the window, so tests can drive the same paths by hand.
//!
//! Defaults: WASD moves, left shift dashes, arrows turn at rate, the mouse
//! looks around, R resets the view, F11 toggles debug, Escape quits. A
//! gamepad gets the usual two-stick layout with the bottom face button as
//! dash.
use bevy_ecs::prelude::*;
use raylib::prelude::*;
use smallvec::SmallVec;

use crate::events::input::{
    ACTION_DASH, ACTION_QUIT, ACTION_RESET_VIEW, ACTION_TOGGLE_DEBUG, AXIS_LOOK_UP,
    AXIS_LOOK_UP_RATE, AXIS_MOVE_FORWARD, AXIS_MOVE_RIGHT, AXIS_TURN, AXIS_TURN_RATE, InputEdge,
};

/// Analog values below this magnitude read as zero.
pub const GAMEPAD_DEAD_ZONE: f32 = 0.15;

/// A digital input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputSource {
    Key(KeyboardKey),
    GamepadButton(GamepadButton),
    MouseButton(MouseButton),
}

/// Something that feeds an axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AxisSource {
    /// Contributes `1.0 * scale` while held.
    Button(InputSource),
    /// Stick or trigger, dead-zoned.
    Gamepad(GamepadAxis),
    /// Horizontal mouse movement this frame, in pixels.
    MouseX,
    /// Vertical mouse movement this frame, in pixels (down is positive).
    MouseY,
}

/// Boolean key state.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BoolState {
    /// Whether the input is currently held.
    pub active: bool,
    /// Whether the input went down this frame.
    pub just_pressed: bool,
    /// Whether the input went up this frame.
    pub just_released: bool,
}

impl BoolState {
    /// Feed this frame's raw state; edges are derived from the previous one.
    pub fn update(&mut self, down: bool) {
        self.just_pressed = down && !self.active;
        self.just_released = !down && self.active;
        self.active = down;
    }
}

#[derive(Debug, Clone)]
pub struct ActionMapping {
    pub action: String,
    pub source: InputSource,
    pub state: BoolState,
}

#[derive(Debug, Clone)]
pub struct AxisMapping {
    pub axis: String,
    pub source: AxisSource,
    pub scale: f32,
    /// Raw reading for this frame, before `scale`.
    pub raw: f32,
}

/// Touch (or left mouse button) state for the first finger.
#[derive(Debug, Clone, Copy)]
pub struct TouchState {
    pub state: BoolState,
    pub location: Vector2,
}

impl Default for TouchState {
    fn default() -> Self {
        Self {
            state: BoolState::default(),
            location: Vector2::zero(),
        }
    }
}

/// Resource capturing the per-frame input relevant to gameplay.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub actions: Vec<ActionMapping>,
    pub axes: Vec<AxisMapping>,
    pub touch: TouchState,
    /// Gamepad index polled for buttons and axes.
    pub gamepad: i32,
}

impl Default for InputState {
    fn default() -> Self {
        let mut input = Self::empty();

        input.bind_action(ACTION_DASH, InputSource::Key(KeyboardKey::KEY_LEFT_SHIFT));
        input.bind_action(
            ACTION_DASH,
            InputSource::GamepadButton(GamepadButton::GAMEPAD_BUTTON_RIGHT_FACE_DOWN),
        );
        input.bind_action(ACTION_RESET_VIEW, InputSource::Key(KeyboardKey::KEY_R));
        input.bind_action(ACTION_TOGGLE_DEBUG, InputSource::Key(KeyboardKey::KEY_F11));
        input.bind_action(ACTION_QUIT, InputSource::Key(KeyboardKey::KEY_ESCAPE));

        input.bind_key_axis(AXIS_MOVE_FORWARD, KeyboardKey::KEY_W, 1.0);
        input.bind_key_axis(AXIS_MOVE_FORWARD, KeyboardKey::KEY_S, -1.0);
        input.bind_axis(
            AXIS_MOVE_FORWARD,
            AxisSource::Gamepad(GamepadAxis::GAMEPAD_AXIS_LEFT_Y),
            -1.0,
        );
        input.bind_key_axis(AXIS_MOVE_RIGHT, KeyboardKey::KEY_D, 1.0);
        input.bind_key_axis(AXIS_MOVE_RIGHT, KeyboardKey::KEY_A, -1.0);
        input.bind_axis(
            AXIS_MOVE_RIGHT,
            AxisSource::Gamepad(GamepadAxis::GAMEPAD_AXIS_LEFT_X),
            1.0,
        );

        input.bind_axis(AXIS_TURN, AxisSource::MouseX, 1.0);
        input.bind_key_axis(AXIS_TURN_RATE, KeyboardKey::KEY_RIGHT, 1.0);
        input.bind_key_axis(AXIS_TURN_RATE, KeyboardKey::KEY_LEFT, -1.0);
        input.bind_axis(
            AXIS_TURN_RATE,
            AxisSource::Gamepad(GamepadAxis::GAMEPAD_AXIS_RIGHT_X),
            1.0,
        );
        input.bind_axis(AXIS_LOOK_UP, AxisSource::MouseY, -1.0);
        input.bind_key_axis(AXIS_LOOK_UP_RATE, KeyboardKey::KEY_UP, 1.0);
        input.bind_key_axis(AXIS_LOOK_UP_RATE, KeyboardKey::KEY_DOWN, -1.0);
        input.bind_axis(
            AXIS_LOOK_UP_RATE,
            AxisSource::Gamepad(GamepadAxis::GAMEPAD_AXIS_RIGHT_Y),
            -1.0,
        );

        input
    }
}

impl InputState {
    /// No mappings at all.
    pub fn empty() -> Self {
        Self {
            actions: Vec::new(),
            axes: Vec::new(),
            touch: TouchState::default(),
            gamepad: 0,
        }
    }

    pub fn bind_action(&mut self, action: &str, source: InputSource) {
        self.actions.push(ActionMapping {
            action: action.to_string(),
            source,
            state: BoolState::default(),
        });
    }

    pub fn bind_axis(&mut self, axis: &str, source: AxisSource, scale: f32) {
        self.axes.push(AxisMapping {
            axis: axis.to_string(),
            source,
            scale,
            raw: 0.0,
        });
    }

    pub fn bind_key_axis(&mut self, axis: &str, key: KeyboardKey, scale: f32) {
        self.bind_axis(axis, AxisSource::Button(InputSource::Key(key)), scale);
    }

    /// Every distinct digital source referenced by any mapping.
    pub fn button_sources(&self) -> Vec<InputSource> {
        let mut sources: Vec<InputSource> = Vec::new();
        let from_actions = self.actions.iter().map(|m| m.source);
        let from_axes = self.axes.iter().filter_map(|m| match m.source {
            AxisSource::Button(source) => Some(source),
            _ => None,
        });
        for source in from_actions.chain(from_axes) {
            if !sources.contains(&source) {
                sources.push(source);
            }
        }
        sources
    }

    /// Every distinct gamepad axis referenced by an axis mapping.
    pub fn gamepad_axes(&self) -> SmallVec<[GamepadAxis; 4]> {
        let mut axes: SmallVec<[GamepadAxis; 4]> = SmallVec::new();
        for mapping in self.axes.iter() {
            if let AxisSource::Gamepad(axis) = mapping.source {
                if !axes.contains(&axis) {
                    axes.push(axis);
                }
            }
        }
        axes
    }

    /// Feed this frame's state of a digital source.
    ///
    /// Call once per source per frame, also when nothing changed, so that
    /// the press/release edges clear.
    pub fn set_button_down(&mut self, source: InputSource, down: bool) {
        for mapping in self.actions.iter_mut().filter(|m| m.source == source) {
            mapping.state.update(down);
        }
        for mapping in self
            .axes
            .iter_mut()
            .filter(|m| m.source == AxisSource::Button(source))
        {
            mapping.raw = if down { 1.0 } else { 0.0 };
        }
    }

    /// Feed this frame's reading of a gamepad axis.
    pub fn set_gamepad_axis(&mut self, axis: GamepadAxis, value: f32) {
        let value = if value.abs() < GAMEPAD_DEAD_ZONE {
            0.0
        } else {
            value.clamp(-1.0, 1.0)
        };
        for mapping in self
            .axes
            .iter_mut()
            .filter(|m| m.source == AxisSource::Gamepad(axis))
        {
            mapping.raw = value;
        }
    }

    /// Feed this frame's mouse movement.
    pub fn set_mouse_delta(&mut self, delta: Vector2) {
        for mapping in self.axes.iter_mut() {
            match mapping.source {
                AxisSource::MouseX => mapping.raw = delta.x,
                AxisSource::MouseY => mapping.raw = delta.y,
                _ => {}
            }
        }
    }

    /// Feed this frame's touch state.
    pub fn set_touch(&mut self, down: bool, location: Vector2) {
        self.touch.state.update(down);
        self.touch.location = location;
    }

    /// Sum of every mapping feeding `axis`, scaled.
    pub fn axis_value(&self, axis: &str) -> f32 {
        self.axes
            .iter()
            .filter(|m| m.axis == axis)
            .map(|m| m.raw * m.scale)
            .sum()
    }

    /// Distinct axis names in mapping order.
    pub fn axis_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for mapping in self.axes.iter() {
            if !names.contains(&mapping.axis.as_str()) {
                names.push(mapping.axis.as_str());
            }
        }
        names
    }

    /// True while any source mapped to `action` is held.
    pub fn is_action_active(&self, action: &str) -> bool {
        self.actions
            .iter()
            .any(|m| m.action == action && m.state.active)
    }

    /// Press/release edges of this frame, per action.
    ///
    /// When several sources map to one action, a press is only reported when
    /// the first of them goes down and a release when the last goes up.
    pub fn action_edges(&self) -> Vec<(String, InputEdge)> {
        let mut edges: Vec<(String, InputEdge)> = Vec::new();
        for mapping in self.actions.iter() {
            let name = mapping.action.as_str();
            if edges.iter().any(|(n, _)| n == name) {
                continue;
            }
            let mut held_before = false;
            let mut held_now = false;
            for m in self.actions.iter().filter(|m| m.action == name) {
                let s = m.state;
                held_now |= s.active;
                held_before |= (s.active && !s.just_pressed) || s.just_released;
            }
            if held_now != held_before {
                edges.push((name.to_string(), InputEdge::from_pressed(held_now)));
            }
        }
        edges
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHIFT: InputSource = InputSource::Key(KeyboardKey::KEY_LEFT_SHIFT);
    const PAD_A: InputSource =
        InputSource::GamepadButton(GamepadButton::GAMEPAD_BUTTON_RIGHT_FACE_DOWN);

    #[test]
    fn test_boolstate_default() {
        let bs = BoolState::default();
        assert!(!bs.active);
        assert!(!bs.just_pressed);
        assert!(!bs.just_released);
    }

    #[test]
    fn test_boolstate_edges() {
        let mut bs = BoolState::default();
        bs.update(true);
        assert!(bs.active && bs.just_pressed && !bs.just_released);
        bs.update(true);
        assert!(bs.active && !bs.just_pressed);
        bs.update(false);
        assert!(!bs.active && bs.just_released);
        bs.update(false);
        assert!(!bs.just_released);
    }

    #[test]
    fn test_inputstate_default_all_inactive() {
        let input = InputState::default();
        assert!(!input.is_action_active(ACTION_DASH));
        assert!(input.action_edges().is_empty());
        for name in input.axis_names() {
            assert_eq!(input.axis_value(name), 0.0);
        }
    }

    #[test]
    fn test_default_axis_names() {
        let input = InputState::default();
        assert_eq!(
            input.axis_names(),
            vec![
                AXIS_MOVE_FORWARD,
                AXIS_MOVE_RIGHT,
                AXIS_TURN,
                AXIS_TURN_RATE,
                AXIS_LOOK_UP,
                AXIS_LOOK_UP_RATE
            ]
        );
    }

    #[test]
    fn test_key_axis_sums_scales() {
        let mut input = InputState::default();
        input.set_button_down(InputSource::Key(KeyboardKey::KEY_W), true);
        assert_eq!(input.axis_value(AXIS_MOVE_FORWARD), 1.0);
        input.set_button_down(InputSource::Key(KeyboardKey::KEY_S), true);
        assert_eq!(input.axis_value(AXIS_MOVE_FORWARD), 0.0);
        input.set_button_down(InputSource::Key(KeyboardKey::KEY_W), false);
        assert_eq!(input.axis_value(AXIS_MOVE_FORWARD), -1.0);
    }

    #[test]
    fn test_gamepad_axis_dead_zone_and_scale() {
        let mut input = InputState::default();
        input.set_gamepad_axis(GamepadAxis::GAMEPAD_AXIS_LEFT_Y, 0.1);
        assert_eq!(input.axis_value(AXIS_MOVE_FORWARD), 0.0);
        input.set_gamepad_axis(GamepadAxis::GAMEPAD_AXIS_LEFT_Y, -0.5);
        assert_eq!(input.axis_value(AXIS_MOVE_FORWARD), 0.5);
    }

    #[test]
    fn test_mouse_delta_feeds_look_axes() {
        let mut input = InputState::default();
        input.set_mouse_delta(Vector2 { x: 4.0, y: -2.0 });
        assert_eq!(input.axis_value(AXIS_TURN), 4.0);
        assert_eq!(input.axis_value(AXIS_LOOK_UP), 2.0);
    }

    #[test]
    fn test_action_edges_single_source() {
        let mut input = InputState::default();
        input.set_button_down(SHIFT, true);
        assert_eq!(
            input.action_edges(),
            vec![(ACTION_DASH.to_string(), InputEdge::Pressed)]
        );
        input.set_button_down(SHIFT, true);
        assert!(input.action_edges().is_empty());
        input.set_button_down(SHIFT, false);
        assert_eq!(
            input.action_edges(),
            vec![(ACTION_DASH.to_string(), InputEdge::Released)]
        );
    }

    #[test]
    fn test_action_edges_merge_sources() {
        let mut input = InputState::default();
        input.set_button_down(SHIFT, true);
        input.set_button_down(PAD_A, false);
        assert_eq!(input.action_edges().len(), 1);

        // second source joins: no new press
        input.set_button_down(SHIFT, true);
        input.set_button_down(PAD_A, true);
        assert!(input.action_edges().is_empty());

        // first source lets go while the second holds: no release
        input.set_button_down(SHIFT, false);
        input.set_button_down(PAD_A, true);
        assert!(input.action_edges().is_empty());
        assert!(input.is_action_active(ACTION_DASH));

        input.set_button_down(SHIFT, false);
        input.set_button_down(PAD_A, false);
        assert_eq!(
            input.action_edges(),
            vec![(ACTION_DASH.to_string(), InputEdge::Released)]
        );
    }

    #[test]
    fn test_button_sources_are_distinct() {
        let input = InputState::default();
        let sources = input.button_sources();
        let shift_count = sources.iter().filter(|s| **s == SHIFT).count();
        assert_eq!(shift_count, 1);
        assert!(sources.contains(&InputSource::Key(KeyboardKey::KEY_W)));
        assert!(sources.contains(&PAD_A));
    }

    #[test]
    fn test_touch_edges() {
        let mut input = InputState::empty();
        input.set_touch(true, Vector2 { x: 10.0, y: 20.0 });
        assert!(input.touch.state.just_pressed);
        assert_eq!(input.touch.location.x, 10.0);
        input.set_touch(false, Vector2 { x: 10.0, y: 20.0 });
        assert!(input.touch.state.just_released);
    }
}
