//! Engine: composition root owning the eight behavior controllers.
//!
//! Methods:
//! - new (wire controllers from a PageView), start (every controller's init
//!   in a fixed sequence), update (dispatch host events, then frame work).
//!
//! Controllers never call each other; coordination is temporal (all start
//! together) and through host-applied document state. All animations are
//! non-blocking: the host calls `update` once per rendered frame and applies
//! the returned ops.

use crate::controllers::{
    AnchorController, CounterController, FilterController, ParallaxController, RevealController,
    ScrollspyController, StaggerController, TiltController,
};
use crate::ids::IdAllocator;
use crate::inputs::{Activation, Inputs};
use crate::outputs::Outputs;
use crate::page::PageView;

#[derive(Debug)]
pub struct Engine {
    reduced_motion: bool,

    // Behavior controllers, in their init sequence.
    reveal: RevealController,
    stagger: StaggerController,
    counters: CounterController,
    scrollspy: ScrollspyController,
    parallax: ParallaxController,
    anchors: AnchorController,
    filters: FilterController,
    tilt: TiltController,

    // Per-tick outputs.
    outputs: Outputs,
}

impl Engine {
    /// Wire all controllers against the given page view. Nothing is emitted
    /// until `start()`.
    pub fn new(page: PageView) -> Self {
        let mut ids = IdAllocator::new();
        Self {
            reduced_motion: page.reduced_motion,
            reveal: RevealController::new(&page.reveals, &mut ids),
            stagger: StaggerController::new(&page.stagger_groups, &mut ids),
            counters: CounterController::new(&page.counters, &mut ids),
            scrollspy: ScrollspyController::new(&page.sections, &page.nav_links, &mut ids),
            parallax: ParallaxController::new(page.parallax),
            anchors: AnchorController::new(&page.anchors, &page.fragments),
            filters: FilterController::new(&page.filter_controls, &page.cards),
            tilt: TiltController::new(&page.tilt_targets),
            outputs: Outputs::default(),
        }
    }

    /// Run every controller's init once at page-ready. Returns the initial
    /// op batch: observer registrations, plus immediate end states when the
    /// reduced-motion preference is set. Invoked exactly once per page load;
    /// re-invocation is not a supported contract.
    pub fn start(&mut self) -> &Outputs {
        self.outputs.clear();
        self.reveal.start(self.reduced_motion, &mut self.outputs);
        self.stagger.start(self.reduced_motion, &mut self.outputs);
        self.counters.start(self.reduced_motion, &mut self.outputs);
        self.scrollspy.start(&mut self.outputs);
        self.parallax.start(self.reduced_motion);
        self.anchors.start(self.reduced_motion);
        self.filters.start(self.reduced_motion);
        self.tilt.start(self.reduced_motion);
        &self.outputs
    }

    /// Step by dt seconds with this frame's batched host events, producing
    /// the ops to apply. Event dispatch runs before frame work so a trigger
    /// and its first animation frame can share a tick.
    pub fn update(&mut self, dt: f32, inputs: Inputs) -> &Outputs {
        self.outputs.clear();

        for ev in &inputs.intersections {
            self.reveal.on_intersection(ev, &mut self.outputs);
            self.stagger.on_intersection(ev, &mut self.outputs);
            self.counters.on_intersection(ev, &mut self.outputs);
            self.scrollspy.on_intersection(ev, &mut self.outputs);
        }

        for act in &inputs.activations {
            match act {
                Activation::Filter { control } => {
                    self.filters.on_activation(*control, &mut self.outputs);
                }
                Activation::Anchor { link } => {
                    self.anchors.on_activation(*link, &mut self.outputs);
                }
            }
        }

        for ev in &inputs.pointer_events {
            self.tilt.on_pointer(ev, &mut self.outputs);
        }

        // After activations: a completion superseded this same frame is
        // already stale by the time it is checked.
        for fin in &inputs.completions {
            self.filters.on_completion(fin, &mut self.outputs);
        }

        self.counters.on_frame(dt, &mut self.outputs);
        self.parallax.on_frame(inputs.scroll_y, &mut self.outputs);

        &self.outputs
    }

    /// Currently active filter key (useful for tests and tooling).
    pub fn active_filter_key(&self) -> &str {
        self.filters.active_key()
    }
}
