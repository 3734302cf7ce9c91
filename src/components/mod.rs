//! ECS components for the pawn.
//!
//! Submodules overview:
//! - [`camerarig`] – spring arm and follow camera attached to the pawn
//! - [`capsule`] – upright collision capsule
//! - [`charactermovement`] – movement limits, velocity, pending input and the captured baseline
//! - [`controller`] – control rotation owned by the possessing controller
//! - [`dash`] – stamina reservoir and dash multiplier
//! - [`inputcontrolled`] – player character marker with look rates
//! - [`rotation`] – pitch/yaw/roll rotator and the pawn's orientation
//! - [`worldposition`] – world-space position of the pawn

pub mod camerarig;
pub mod capsule;
pub mod charactermovement;
pub mod controller;
pub mod dash;
pub mod inputcontrolled;
pub mod rotation;
pub mod worldposition;
