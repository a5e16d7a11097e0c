//! One-shot viewport reveals: individual elements and stagger containers.
//!
//! Both controllers share the same machine: observe a target set, add the
//! persistent visible class on first intersection, release the target. A
//! stagger container's class is what authorizes its children's CSS-declared
//! entrance delays; the controller itself never staggers anything.

use crate::ids::{IdAllocator, NodeId, ObserverId};
use crate::inputs::Intersection;
use crate::outputs::{Margin, ObserverSpec, Outputs, Transform, VisualOp};
use crate::tuning;

/// Shared one-shot trigger over a target set.
#[derive(Debug)]
struct OneShotReveal {
    observer: ObserverId,
    remaining: Vec<NodeId>,
    threshold: f32,
    bottom_margin_px: f32,
    /// Reveal targets also get explicit end-state styles under reduced
    /// motion (the CSS initial state hides them via opacity/transform).
    end_state_styles: bool,
}

impl OneShotReveal {
    fn new(
        targets: &[NodeId],
        threshold: f32,
        bottom_margin_px: f32,
        end_state_styles: bool,
        ids: &mut IdAllocator,
    ) -> Self {
        Self {
            observer: ids.alloc_observer(),
            remaining: targets.to_vec(),
            threshold,
            bottom_margin_px,
            end_state_styles,
        }
    }

    fn start(&mut self, reduced_motion: bool, out: &mut Outputs) {
        if self.remaining.is_empty() {
            return;
        }
        if reduced_motion {
            for node in self.remaining.drain(..) {
                if self.end_state_styles {
                    out.push_op(VisualOp::SetOpacity {
                        target: node,
                        value: 1.0,
                    });
                    out.push_op(VisualOp::SetTransform {
                        target: node,
                        transform: Transform::Neutral,
                    });
                }
                out.push_op(VisualOp::SetClass {
                    target: node,
                    class: tuning::CLASS_VISIBLE.to_string(),
                    on: true,
                });
            }
            return;
        }
        out.push_op(VisualOp::Observe {
            observer: self.observer,
            spec: ObserverSpec {
                threshold: self.threshold,
                top: Margin::Px(0.0),
                bottom: Margin::Px(self.bottom_margin_px),
                targets: self.remaining.clone(),
            },
        });
    }

    fn on_intersection(&mut self, ev: &Intersection, out: &mut Outputs) {
        if ev.observer != self.observer || !ev.entering {
            return;
        }
        // Already triggered targets stay triggered; late events are ignored.
        let Some(idx) = self.remaining.iter().position(|n| *n == ev.target) else {
            return;
        };
        self.remaining.swap_remove(idx);
        out.push_op(VisualOp::SetClass {
            target: ev.target,
            class: tuning::CLASS_VISIBLE.to_string(),
            on: true,
        });
        out.push_op(VisualOp::Unobserve {
            observer: self.observer,
            target: ev.target,
        });
    }
}

/// Fade/translate-in of individual elements on first intersection.
#[derive(Debug)]
pub struct RevealController {
    inner: OneShotReveal,
}

impl RevealController {
    pub fn new(targets: &[NodeId], ids: &mut IdAllocator) -> Self {
        Self {
            inner: OneShotReveal::new(
                targets,
                tuning::REVEAL_THRESHOLD,
                tuning::REVEAL_BOTTOM_MARGIN_PX,
                true,
                ids,
            ),
        }
    }

    pub fn start(&mut self, reduced_motion: bool, out: &mut Outputs) {
        if self.inner.remaining.is_empty() {
            log::debug!("reveal: no targets, skipping");
        }
        self.inner.start(reduced_motion, out);
    }

    pub fn on_intersection(&mut self, ev: &Intersection, out: &mut Outputs) {
        self.inner.on_intersection(ev, out);
    }
}

/// Group-level reveal trigger for child-staggered CSS animations.
#[derive(Debug)]
pub struct StaggerController {
    inner: OneShotReveal,
}

impl StaggerController {
    pub fn new(groups: &[NodeId], ids: &mut IdAllocator) -> Self {
        Self {
            inner: OneShotReveal::new(
                groups,
                tuning::STAGGER_THRESHOLD,
                tuning::STAGGER_BOTTOM_MARGIN_PX,
                false,
                ids,
            ),
        }
    }

    pub fn start(&mut self, reduced_motion: bool, out: &mut Outputs) {
        if self.inner.remaining.is_empty() {
            log::debug!("stagger: no groups, skipping");
        }
        self.inner.start(reduced_motion, out);
    }

    pub fn on_intersection(&mut self, ev: &Intersection, out: &mut Outputs) {
        self.inner.on_intersection(ev, out);
    }
}
