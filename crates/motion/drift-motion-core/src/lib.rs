//! Drift Motion Core (host-agnostic)
//!
//! The interaction/motion engine behind the Drift site: scroll-triggered
//! reveals, staggered entrances, animated counters, scrollspy navigation
//! highlighting, bounded hero parallax, smooth in-page anchor scrolling,
//! card filtering with enter/exit transitions, and pointer-driven 3D tilt.
//!
//! The core never touches a real document. A host scans the page once into
//! a `PageView` (see `snapshot`), constructs an `Engine`, calls `start()`,
//! then forwards batched platform events through `update(dt, Inputs)` once
//! per rendered frame and applies the returned `Outputs` ops.

pub mod controllers;
pub mod easing;
pub mod engine;
pub mod error;
pub mod ids;
pub mod inputs;
pub mod outputs;
pub mod page;
pub mod snapshot;
pub mod tuning;

// Re-exports for consumers (adapters)
pub use engine::Engine;
pub use error::SnapshotError;
pub use ids::{NodeId, ObserverId};
pub use inputs::{
    Activation, AnimationFinished, Inputs, Intersection, PointerEvent, PointerKind, PointerPhase,
    Rect,
};
pub use outputs::{
    CardAnimation, Easing, Margin, MotionEvent, ObserverSpec, Outputs, ScrollBehavior, Transform,
    VisualOp,
};
pub use page::{
    AnchorLink, Card, CounterTarget, FilterControl, Fragment, NavLink, PageView, Section,
};
pub use snapshot::parse_page_snapshot_json;
