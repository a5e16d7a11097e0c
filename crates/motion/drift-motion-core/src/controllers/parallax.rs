//! Bounded vertical parallax on one designated hero element.

use crate::ids::NodeId;
use crate::outputs::{Outputs, Transform, VisualOp};
use crate::tuning;

/// Applies `min(scroll_y * 0.05, 8)` px of translate-y, at most one style
/// write per frame (the host coalesces scroll events into the frame's
/// single sample; unchanged shifts emit nothing).
#[derive(Debug)]
pub struct ParallaxController {
    hero: Option<NodeId>,
    last_shift: Option<f32>,
}

impl ParallaxController {
    pub fn new(hero: Option<NodeId>) -> Self {
        Self {
            hero,
            last_shift: None,
        }
    }

    pub fn start(&mut self, reduced_motion: bool) {
        if self.hero.is_none() {
            log::debug!("parallax: no hero element, skipping");
        }
        if reduced_motion {
            // Disabled entirely: the hero never moves.
            self.hero = None;
        }
    }

    pub fn on_frame(&mut self, scroll_y: Option<f32>, out: &mut Outputs) {
        let (Some(hero), Some(y)) = (self.hero, scroll_y) else {
            return;
        };
        let shift = (y * tuning::PARALLAX_FACTOR).min(tuning::PARALLAX_MAX_PX);
        if self.last_shift == Some(shift) {
            return;
        }
        self.last_shift = Some(shift);
        out.push_op(VisualOp::SetTransform {
            target: hero,
            transform: Transform::TranslateY { px: shift },
        });
    }
}
