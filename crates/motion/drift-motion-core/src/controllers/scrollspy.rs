//! Highlights the navigation link matching the section currently inside the
//! activation band. Continuous: the registration lives for the page
//! lifetime and is never released.

use hashbrown::HashSet;

use crate::ids::{IdAllocator, NodeId, ObserverId};
use crate::inputs::Intersection;
use crate::outputs::{Margin, MotionEvent, ObserverSpec, Outputs, VisualOp};
use crate::page::{NavLink, Section};
use crate::tuning;

/// Tracks which sections currently intersect the band and keeps exactly one
/// nav link highlighted. When several sections intersect at once, the one
/// earliest in document order wins; when the band empties, the last
/// highlight is retained.
#[derive(Debug)]
pub struct ScrollspyController {
    observer: ObserverId,
    sections: Vec<Section>,
    links: Vec<NavLink>,
    intersecting: HashSet<NodeId>,
    active: Option<NodeId>,
}

impl ScrollspyController {
    pub fn new(sections: &[Section], links: &[NavLink], ids: &mut IdAllocator) -> Self {
        Self {
            observer: ids.alloc_observer(),
            sections: sections.to_vec(),
            links: links.to_vec(),
            intersecting: HashSet::new(),
            active: None,
        }
    }

    /// Highlighting is not motion, so scrollspy runs under reduced motion.
    pub fn start(&mut self, out: &mut Outputs) {
        if self.sections.is_empty() || self.links.is_empty() {
            log::debug!("scrollspy: no sections or no links, skipping");
            return;
        }
        out.push_op(VisualOp::Observe {
            observer: self.observer,
            spec: ObserverSpec {
                threshold: 0.0,
                top: Margin::Px(tuning::SPY_TOP_MARGIN_PX),
                bottom: Margin::Fraction(tuning::SPY_BOTTOM_MARGIN_FRACTION),
                targets: self.sections.iter().map(|s| s.node).collect(),
            },
        });
    }

    pub fn on_intersection(&mut self, ev: &Intersection, out: &mut Outputs) {
        if ev.observer != self.observer {
            return;
        }
        if ev.entering {
            self.intersecting.insert(ev.target);
        } else {
            self.intersecting.remove(&ev.target);
        }
        let Some(current) = self
            .sections
            .iter()
            .find(|s| self.intersecting.contains(&s.node))
        else {
            return;
        };
        if self.active == Some(current.node) {
            return;
        }
        self.active = Some(current.node);
        let anchor = current.anchor.clone();
        for link in &self.links {
            let on = link.fragment == anchor;
            out.push_op(VisualOp::SetClass {
                target: link.node,
                class: tuning::CLASS_ACTIVE.to_string(),
                on,
            });
            if let Some(dot) = link.indicator {
                out.push_op(VisualOp::SetClass {
                    target: dot,
                    class: tuning::CLASS_ACTIVE.to_string(),
                    on,
                });
            }
        }
        out.push_event(MotionEvent::SectionActivated {
            section: current.node,
            anchor,
        });
    }
}
