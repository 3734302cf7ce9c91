//! Game systems.
//!
//! Submodules overview, in frame order
//! - [`time`] – advance simulation time and delta
//! - [`input`] – read hardware input into [`crate::resources::input::InputState`] and emit input events
//! - [`beginplay`] – capture the movement baseline of freshly spawned pawns
//! - [`dispatch`] – observers running bound handlers for input events
//! - [`dash`] – stamina regulator scaling movement limits
//! - [`movement`] – kinematic ground movement and orientation
//! - [`facing`] – copy followed control-rotation axes onto the pawn
//! - [`camerarig`] – place the follow camera at the end of the spring arm
//! - [`gameconfig`] – apply configuration changes to pawns and the window
//! - [`render`] – draw the scene, stamina bar and debug overlay using Raylib

pub mod beginplay;
pub mod camerarig;
pub mod dash;
pub mod dispatch;
pub mod facing;
pub mod gameconfig;
pub mod input;
pub mod movement;
pub mod render;
pub mod time;
