//! Category/tag/status filtering of a card collection with enter/exit
//! transitions.
//!
//! State machine over the declared filter keys, initial state "all".
//! Exits are host-native fades whose completion gates the display removal;
//! every visibility transition bumps the card's generation counter so a
//! completion from a superseded fade can never hide a card that a newer
//! transition re-marked visible.

use crate::ids::NodeId;
use crate::inputs::AnimationFinished;
use crate::outputs::{CardAnimation, Easing, MotionEvent, Outputs, VisualOp};
use crate::page::{Card, FilterControl};
use crate::tuning;

#[derive(Debug)]
struct CardState {
    card: Card,
    visible: bool,
    generation: u32,
}

#[derive(Debug)]
pub struct FilterController {
    controls: Vec<FilterControl>,
    cards: Vec<CardState>,
    active_key: String,
    reduced_motion: bool,
}

impl FilterController {
    pub fn new(controls: &[FilterControl], cards: &[Card]) -> Self {
        Self {
            controls: controls.to_vec(),
            cards: cards
                .iter()
                .map(|c| CardState {
                    card: c.clone(),
                    // "all" matches everything, so every card starts visible.
                    visible: true,
                    generation: 0,
                })
                .collect(),
            active_key: tuning::FILTER_ALL.to_string(),
            reduced_motion: false,
        }
    }

    pub fn start(&mut self, reduced_motion: bool) {
        self.reduced_motion = reduced_motion;
        if self.controls.is_empty() {
            log::debug!("filter: no controls, skipping");
        }
    }

    pub fn active_key(&self) -> &str {
        &self.active_key
    }

    pub fn on_activation(&mut self, control: NodeId, out: &mut Outputs) {
        if self.controls.is_empty() {
            return;
        }
        let Some(ctl) = self.controls.iter().find(|c| c.node == control) else {
            return;
        };
        let key = ctl.key.clone();
        // Self-transition: the visible set and the control marking are
        // already correct.
        if key == self.active_key {
            return;
        }
        self.active_key = key.clone();

        for c in &self.controls {
            out.push_op(VisualOp::SetClass {
                target: c.node,
                class: tuning::CLASS_ACTIVE.to_string(),
                on: c.node == control,
            });
        }

        for state in &mut self.cards {
            let want = state.card.matches(&key);
            if want == state.visible {
                continue;
            }
            state.visible = want;
            // Invalidates any in-flight exit fade for this card.
            state.generation = state.generation.wrapping_add(1);

            if self.reduced_motion {
                out.push_op(VisualOp::SetDisplay {
                    target: state.card.node,
                    visible: want,
                });
            } else if want {
                // Clear the display state first, then play the entrance.
                out.push_op(VisualOp::SetDisplay {
                    target: state.card.node,
                    visible: true,
                });
                out.push_op(VisualOp::Animate {
                    target: state.card.node,
                    animation: CardAnimation::Enter,
                    duration_ms: tuning::CARD_ENTER_MS,
                    easing: Easing::ExpoOut,
                    generation: state.generation,
                });
            } else {
                // Display removal waits for this fade's completion.
                out.push_op(VisualOp::Animate {
                    target: state.card.node,
                    animation: CardAnimation::Exit,
                    duration_ms: tuning::CARD_EXIT_MS,
                    easing: Easing::Linear,
                    generation: state.generation,
                });
            }
        }

        out.push_event(MotionEvent::FilterChanged { key });
    }

    /// Apply the deferred hide for a finished exit fade, unless a newer
    /// transition superseded it.
    pub fn on_completion(&mut self, fin: &AnimationFinished, out: &mut Outputs) {
        let Some(state) = self.cards.iter().find(|s| s.card.node == fin.target) else {
            return;
        };
        if fin.generation != state.generation || state.visible {
            return;
        }
        out.push_op(VisualOp::SetDisplay {
            target: state.card.node,
            visible: false,
        });
    }
}
