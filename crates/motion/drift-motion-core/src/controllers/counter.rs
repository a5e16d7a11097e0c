//! Numeric count-up animation triggered on visibility.

use crate::easing::{expo_out, progress};
use crate::ids::{IdAllocator, ObserverId};
use crate::inputs::Intersection;
use crate::outputs::{Margin, MotionEvent, ObserverSpec, Outputs, VisualOp};
use crate::page::CounterTarget;
use crate::tuning;

#[derive(Debug, PartialEq)]
enum Phase {
    Waiting,
    Running { elapsed: f32 },
    Done,
}

#[derive(Debug)]
struct CounterState {
    target: CounterTarget,
    phase: Phase,
    last_shown: Option<i64>,
}

/// Runs each counter's 1200ms ease-out count-up, stepped once per frame
/// from `Engine::update`. Each counter triggers at most once.
#[derive(Debug)]
pub struct CounterController {
    observer: ObserverId,
    counters: Vec<CounterState>,
}

impl CounterController {
    pub fn new(targets: &[CounterTarget], ids: &mut IdAllocator) -> Self {
        Self {
            observer: ids.alloc_observer(),
            counters: targets
                .iter()
                .map(|t| CounterState {
                    target: t.clone(),
                    phase: Phase::Waiting,
                    last_shown: None,
                })
                .collect(),
        }
    }

    pub fn start(&mut self, reduced_motion: bool, out: &mut Outputs) {
        if self.counters.is_empty() {
            log::debug!("counter: no targets, skipping");
            return;
        }
        if reduced_motion {
            for c in &mut self.counters {
                c.phase = Phase::Done;
                c.last_shown = Some(c.target.value);
                out.push_op(VisualOp::SetText {
                    target: c.target.node,
                    text: c.target.value.to_string(),
                });
            }
            return;
        }
        out.push_op(VisualOp::Observe {
            observer: self.observer,
            spec: ObserverSpec {
                threshold: tuning::COUNTER_THRESHOLD,
                top: Margin::Px(0.0),
                bottom: Margin::Px(0.0),
                targets: self.counters.iter().map(|c| c.target.node).collect(),
            },
        });
    }

    pub fn on_intersection(&mut self, ev: &Intersection, out: &mut Outputs) {
        if ev.observer != self.observer || !ev.entering {
            return;
        }
        let Some(c) = self
            .counters
            .iter_mut()
            .find(|c| c.target.node == ev.target && c.phase == Phase::Waiting)
        else {
            return;
        };
        c.phase = Phase::Running { elapsed: 0.0 };
        out.push_op(VisualOp::Unobserve {
            observer: self.observer,
            target: ev.target,
        });
    }

    /// Advance running counters by dt seconds, emitting at most one text
    /// write per counter per frame.
    pub fn on_frame(&mut self, dt: f32, out: &mut Outputs) {
        for c in &mut self.counters {
            let Phase::Running { elapsed } = &mut c.phase else {
                continue;
            };
            *elapsed += dt;
            let p = progress(*elapsed, tuning::COUNTER_DURATION);
            // The exact target at p == 1; rounding eased * target can land a
            // hair off for large values.
            let shown = if p >= 1.0 {
                c.target.value
            } else {
                (f64::from(expo_out(p)) * c.target.value as f64).round() as i64
            };
            if c.last_shown != Some(shown) {
                c.last_shown = Some(shown);
                out.push_op(VisualOp::SetText {
                    target: c.target.node,
                    text: shown.to_string(),
                });
            }
            if p >= 1.0 {
                c.phase = Phase::Done;
                out.push_event(MotionEvent::CounterFinished {
                    target: c.target.node,
                    value: c.target.value,
                });
            }
        }
    }
}
