//! ECS resources made available to systems.
//!
//! Overview
//! - `camera3d` – the camera the scene is rendered through
//! - `debugmode` – presence toggles the debug overlay
//! - `gameconfig` – INI-backed settings for window, dash, character and camera
//! - `input` – per-frame input state and hardware-to-name mappings
//! - `inputbindings` – named inputs to handler functions
//! - `worldtime` – simulation time and delta
pub mod camera3d;
pub mod debugmode;
pub mod gameconfig;
pub mod input;
pub mod inputbindings;
pub mod worldtime;
