//! Output contracts from the core engine.
//!
//! Outputs carry the visual ops for this tick, in emission order, plus a
//! separate list of semantic events. The host applies ops to the document
//! (class toggles, inline style writes, text content, native animations,
//! scroll/history requests, observer wiring) and may transport events to
//! diagnostics. The engine never creates or deletes elements.

use serde::{Deserialize, Serialize};

use crate::ids::{NodeId, ObserverId};

/// A typed inline transform; `Neutral` clears any inline transform.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Transform {
    Neutral,
    TranslateY { px: f32 },
    Tilt {
        rotate_x_deg: f32,
        rotate_y_deg: f32,
        lift_px: f32,
    },
}

/// Timing curves the host maps onto its animation primitives.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Easing {
    Linear,
    Ease,
    /// cubic-bezier control points in `tuning::EXPO_OUT_BEZIER`.
    ExpoOut,
}

/// Host-native card animations started by the filter controller.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum CardAnimation {
    /// opacity 0 -> 1, scale `tuning::CARD_ENTER_SCALE_FROM` -> 1.
    Enter,
    /// opacity 1 -> 0; the host reports completion so the display state can
    /// be removed afterwards.
    Exit,
}

/// Scroll behavior for anchor navigation.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum ScrollBehavior {
    Smooth,
    Instant,
}

/// Offset applied to one edge of an observation box, rootMargin-style:
/// negative values shrink the box.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Margin {
    Px(f32),
    /// Fraction of the viewport dimension along that axis.
    Fraction(f32),
}

/// One observer registration the host should create.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ObserverSpec {
    pub threshold: f32,
    pub top: Margin,
    pub bottom: Margin,
    pub targets: Vec<NodeId>,
}

/// One document mutation or host request for this tick.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum VisualOp {
    SetClass {
        target: NodeId,
        class: String,
        on: bool,
    },
    SetOpacity {
        target: NodeId,
        value: f32,
    },
    SetTransform {
        target: NodeId,
        transform: Transform,
    },
    /// Inline transition applied while tilt tracks or settles.
    SetTransition {
        target: NodeId,
        duration_ms: f32,
        easing: Easing,
    },
    /// `visible: false` removes the element from layout.
    SetDisplay {
        target: NodeId,
        visible: bool,
    },
    SetText {
        target: NodeId,
        text: String,
    },
    /// Start a host-native animation; its completion comes back through
    /// `Inputs::completions` carrying the same generation.
    Animate {
        target: NodeId,
        animation: CardAnimation,
        duration_ms: f32,
        easing: Easing,
        generation: u32,
    },
    /// Scroll so the target's top aligns with the viewport top. Emitted only
    /// when the fragment resolved; its presence authorizes the host to
    /// prevent default navigation.
    ScrollToTarget {
        target: NodeId,
        behavior: ScrollBehavior,
    },
    /// Push the fragment onto session history without reloading.
    PushFragment {
        fragment: String,
    },
    /// Create an observer registration over the given targets.
    Observe {
        observer: ObserverId,
        spec: ObserverSpec,
    },
    /// Release one target from a registration (one-shot behaviors fire once).
    Unobserve {
        observer: ObserverId,
        target: NodeId,
    },
}

/// Discrete semantic signals emitted during stepping.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum MotionEvent {
    SectionActivated { section: NodeId, anchor: String },
    FilterChanged { key: String },
    CounterFinished { target: NodeId, value: i64 },
}

/// Outputs returned by `Engine::start()` and `Engine::update()`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Outputs {
    #[serde(default)]
    pub ops: Vec<VisualOp>,
    #[serde(default)]
    pub events: Vec<MotionEvent>,
}

impl Outputs {
    #[inline]
    pub fn clear(&mut self) {
        self.ops.clear();
        self.events.clear();
    }

    #[inline]
    pub fn push_op(&mut self, op: VisualOp) {
        self.ops.push(op);
    }

    #[inline]
    pub fn push_event(&mut self, event: MotionEvent) {
        self.events.push(event);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty() && self.events.is_empty()
    }
}
