//! Debug toggle resource.
//!
//! The mere presence of this resource enables the debug overlay: pawn
//! diagnostics, capsule wireframes and the control-rotation readout. Remove
//! it to disable debug behavior.

use bevy_ecs::prelude::Resource;

/// Marker resource: when present, the render system draws the debug overlay.
#[derive(Resource, Clone, Copy, Debug)]
pub struct DebugMode {}
