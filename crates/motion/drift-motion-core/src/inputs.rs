//! Input contracts for the core engine.
//!
//! The host batches platform events per rendered frame and passes them into
//! `Engine::update()`: intersection transitions from its observer
//! registrations, at most one coalesced scroll sample, pointer events,
//! discrete activations (filter controls, anchor links), and completions of
//! host-native card animations.

use serde::{Deserialize, Serialize};

use crate::ids::{NodeId, ObserverId};

#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Inputs {
    /// Intersection transitions, in delivery order.
    #[serde(default)]
    pub intersections: Vec<Intersection>,
    /// Latest scroll position this frame, if any scroll event fired.
    /// Coalescing to one sample per frame is the host's job.
    #[serde(default)]
    pub scroll_y: Option<f32>,
    /// Pointer activity over tilt targets.
    #[serde(default)]
    pub pointer_events: Vec<PointerEvent>,
    /// Discrete click activations.
    #[serde(default)]
    pub activations: Vec<Activation>,
    /// Host-native animation completions, tagged with the generation the
    /// animation was started under.
    #[serde(default)]
    pub completions: Vec<AnimationFinished>,
}

impl Inputs {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.intersections.is_empty()
            && self.scroll_y.is_none()
            && self.pointer_events.is_empty()
            && self.activations.is_empty()
            && self.completions.is_empty()
    }
}

/// One observed target crossing its registration's threshold, in either
/// direction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Intersection {
    pub observer: ObserverId,
    pub target: NodeId,
    pub entering: bool,
}

/// A discrete user activation the engine reacts to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Activation {
    /// A filter control was activated.
    Filter { control: NodeId },
    /// A same-page fragment link was clicked. The host calls `update`
    /// synchronously from the click handler and prevents default navigation
    /// only when the returned ops include a scroll request for it.
    Anchor { link: NodeId },
}

/// Host pointer-device classification.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum PointerKind {
    Mouse,
    Touch,
    Pen,
}

/// The observed element's bounding box in viewport coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub target: NodeId,
    pub kind: PointerKind,
    pub phase: PointerPhase,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum PointerPhase {
    Enter,
    /// Pointer position in viewport coordinates plus the target's current
    /// bounding rect, so the core can normalize without touching layout.
    Move { x: f32, y: f32, rect: Rect },
    Leave,
}

/// A host-native animation finished naturally (not cancelled).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnimationFinished {
    pub target: NodeId,
    pub generation: u32,
}
