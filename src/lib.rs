//! Dashpawn library.
//!
//! A third-person pawn with a stamina-gated dash, a spring-arm camera and
//! locomotion input, built on `bevy_ecs` with raylib for windowing, input and
//! rendering. This module exposes the components, resources, systems and
//! events for use in integration tests and by the binary.

pub mod character;
pub mod components;
pub mod events;
pub mod resources;
pub mod systems;
