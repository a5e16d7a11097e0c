//! Intercepts same-page fragment navigation for eased scrolling plus a
//! history update.

use hashbrown::HashMap;

use crate::ids::NodeId;
use crate::outputs::{Outputs, ScrollBehavior, VisualOp};
use crate::page::{AnchorLink, Fragment};

/// Resolves clicked fragment links through an owned fragment index. A link
/// whose fragment resolves to nothing emits no ops, which leaves native
/// navigation untouched; repeated clicks on a resolved link re-emit the
/// scroll every time.
#[derive(Debug)]
pub struct AnchorController {
    links: Vec<AnchorLink>,
    fragments: HashMap<String, NodeId>,
    behavior: ScrollBehavior,
}

impl AnchorController {
    pub fn new(links: &[AnchorLink], fragments: &[Fragment]) -> Self {
        Self {
            links: links.to_vec(),
            fragments: fragments
                .iter()
                .map(|f| (f.name.clone(), f.node))
                .collect(),
            behavior: ScrollBehavior::Smooth,
        }
    }

    pub fn start(&mut self, reduced_motion: bool) {
        if self.links.is_empty() {
            log::debug!("anchor: no fragment links, skipping");
        }
        // Immediate equivalent end state: jump instead of easing.
        if reduced_motion {
            self.behavior = ScrollBehavior::Instant;
        }
    }

    pub fn on_activation(&self, link: NodeId, out: &mut Outputs) {
        let Some(l) = self.links.iter().find(|l| l.node == link) else {
            return;
        };
        if l.fragment.is_empty() {
            return;
        }
        let Some(target) = self.fragments.get(&l.fragment) else {
            return;
        };
        out.push_op(VisualOp::ScrollToTarget {
            target: *target,
            behavior: self.behavior,
        });
        out.push_op(VisualOp::PushFragment {
            fragment: l.fragment.clone(),
        });
    }
}
