//! Event types and observers used by the game.
//!
//! Events decouple hardware polling from the pawn logic: the input systems
//! only trigger events, and observers decide what they mean.
//!
//! Submodules:
//! - [`input`] – named action, axis and touch events
//! - [`switchdebug`] – toggle the debug overlay on/off
pub mod input;
pub mod switchdebug;
