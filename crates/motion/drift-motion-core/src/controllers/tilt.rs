//! Pointer-relative 3D rotation on hoverable cards. Mouse pointers only;
//! touch and pen events are discarded.

use crate::ids::NodeId;
use crate::inputs::{PointerEvent, PointerKind, PointerPhase};
use crate::outputs::{Easing, Outputs, Transform, VisualOp};
use crate::tuning;

#[derive(Debug)]
pub struct TiltController {
    targets: Vec<NodeId>,
    enabled: bool,
}

impl TiltController {
    pub fn new(targets: &[NodeId]) -> Self {
        Self {
            targets: targets.to_vec(),
            enabled: false,
        }
    }

    pub fn start(&mut self, reduced_motion: bool) {
        self.enabled = !reduced_motion && !self.targets.is_empty();
        if !self.enabled {
            log::debug!("tilt: disabled (reduced motion or no targets)");
        }
    }

    pub fn on_pointer(&self, ev: &PointerEvent, out: &mut Outputs) {
        if !self.enabled || !self.targets.contains(&ev.target) {
            return;
        }
        match &ev.phase {
            PointerPhase::Enter => {
                if ev.kind != PointerKind::Mouse {
                    return;
                }
                out.push_op(VisualOp::SetTransition {
                    target: ev.target,
                    duration_ms: tuning::TILT_FOLLOW_MS,
                    easing: Easing::Linear,
                });
            }
            PointerPhase::Move { x, y, rect } => {
                if ev.kind != PointerKind::Mouse {
                    return;
                }
                if rect.width <= 0.0 || rect.height <= 0.0 {
                    return;
                }
                let nx = ((x - rect.left) / rect.width - 0.5).clamp(-0.5, 0.5);
                let ny = ((y - rect.top) / rect.height - 0.5).clamp(-0.5, 0.5);
                out.push_op(VisualOp::SetTransform {
                    target: ev.target,
                    transform: Transform::Tilt {
                        rotate_x_deg: -ny * tuning::TILT_STRENGTH_DEG,
                        rotate_y_deg: nx * tuning::TILT_STRENGTH_DEG * 2.0,
                        lift_px: tuning::TILT_LIFT_PX,
                    },
                });
                out.push_op(VisualOp::SetTransition {
                    target: ev.target,
                    duration_ms: tuning::TILT_FOLLOW_MS,
                    easing: Easing::Linear,
                });
            }
            PointerPhase::Leave => {
                // The card settles rather than snapping.
                out.push_op(VisualOp::SetTransition {
                    target: ev.target,
                    duration_ms: tuning::TILT_SETTLE_MS,
                    easing: Easing::ExpoOut,
                });
                out.push_op(VisualOp::SetTransform {
                    target: ev.target,
                    transform: Transform::Neutral,
                });
            }
        }
    }
}
