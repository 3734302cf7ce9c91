//! Input subscription table.
//!
//! [`InputBindings`] maps named actions, named axes and touch edges to plain
//! handler functions. The table is built once at startup (see
//! [`setup_player_input_component`](crate::character::setup_player_input_component))
//! and read by the dispatch observers whenever an input event fires.
//!
//! Several handlers may subscribe to the same input; they run in binding
//! order.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Vector2;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::character::PawnContext;
use crate::events::input::InputEdge;

/// Handler for a discrete action edge.
pub type ActionHandler = fn(&mut PawnContext);
/// Handler for an axis value.
pub type AxisHandler = fn(&mut PawnContext, f32);
/// Handler for a touch edge: finger index and screen location.
pub type TouchHandler = fn(&mut PawnContext, u32, Vector2);

#[derive(Resource, Default, Clone)]
pub struct InputBindings {
    actions: FxHashMap<String, SmallVec<[(InputEdge, ActionHandler); 2]>>,
    axes: FxHashMap<String, SmallVec<[AxisHandler; 1]>>,
    touch: SmallVec<[(InputEdge, TouchHandler); 2]>,
}

impl InputBindings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind_action(&mut self, action: &str, edge: InputEdge, handler: ActionHandler) {
        self.actions
            .entry(action.to_string())
            .or_default()
            .push((edge, handler));
    }

    pub fn bind_axis(&mut self, axis: &str, handler: AxisHandler) {
        self.axes.entry(axis.to_string()).or_default().push(handler);
    }

    pub fn bind_touch(&mut self, edge: InputEdge, handler: TouchHandler) {
        self.touch.push((edge, handler));
    }

    /// Handlers subscribed to `edge` of `action`, in binding order.
    pub fn action_handlers(&self, action: &str, edge: InputEdge) -> SmallVec<[ActionHandler; 2]> {
        self.actions
            .get(action)
            .map(|handlers| {
                handlers
                    .iter()
                    .filter(|(e, _)| *e == edge)
                    .map(|(_, h)| *h)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Handlers subscribed to `axis`, in binding order.
    pub fn axis_handlers(&self, axis: &str) -> SmallVec<[AxisHandler; 1]> {
        self.axes.get(axis).cloned().unwrap_or_default()
    }

    /// Touch handlers subscribed to `edge`, in binding order.
    pub fn touch_handlers(&self, edge: InputEdge) -> SmallVec<[TouchHandler; 2]> {
        self.touch
            .iter()
            .filter(|(e, _)| *e == edge)
            .map(|(_, h)| *h)
            .collect()
    }

    pub fn is_action_bound(&self, action: &str) -> bool {
        self.actions.contains_key(action)
    }

    pub fn is_axis_bound(&self, axis: &str) -> bool {
        self.axes.contains_key(axis)
    }
}
