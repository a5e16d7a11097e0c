//! Canonical page model: the host-scanned view of every marker-carrying
//! element, identified by dense NodeIds. Built once at page-ready (usually
//! via `parse_page_snapshot_json`) and consumed by `Engine::new`.

use serde::{Deserialize, Serialize};

use crate::error::SnapshotError;
use crate::ids::NodeId;

/// A numeric count-up target with its declared integer end value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CounterTarget {
    pub node: NodeId,
    pub value: i64,
}

/// A section that participates in scrollspy, keyed by its anchor name.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub node: NodeId,
    pub anchor: String,
}

/// A navigation link referencing a section anchor, with an optional
/// indicator sub-element that mirrors the link's active state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NavLink {
    pub node: NodeId,
    pub fragment: String,
    #[serde(default)]
    pub indicator: Option<NodeId>,
}

/// An in-page anchor link with a fragment href.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnchorLink {
    pub node: NodeId,
    pub fragment: String,
}

/// A filter control carrying its filter key.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FilterControl {
    pub node: NodeId,
    pub key: String,
}

/// A filterable card with its declared type, tag set, and status.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub node: NodeId,
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl Card {
    /// Membership predicate: visible iff the key is "all", matches the type,
    /// is contained in the tag set, or matches the status.
    pub fn matches(&self, key: &str) -> bool {
        key == crate::tuning::FILTER_ALL
            || self.kind.as_deref() == Some(key)
            || self.tags.iter().any(|t| t == key)
            || self.status.as_deref() == Some(key)
    }
}

/// An element addressable by fragment identifier.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Fragment {
    pub node: NodeId,
    pub name: String,
}

/// Everything the engine knows about the document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PageView {
    /// Host-sampled reduced-motion preference; read by each controller at
    /// its own start.
    #[serde(default)]
    pub reduced_motion: bool,
    #[serde(default)]
    pub reveals: Vec<NodeId>,
    #[serde(default)]
    pub stagger_groups: Vec<NodeId>,
    #[serde(default)]
    pub counters: Vec<CounterTarget>,
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default)]
    pub nav_links: Vec<NavLink>,
    #[serde(default)]
    pub parallax: Option<NodeId>,
    #[serde(default)]
    pub anchors: Vec<AnchorLink>,
    #[serde(default)]
    pub filter_controls: Vec<FilterControl>,
    #[serde(default)]
    pub cards: Vec<Card>,
    #[serde(default)]
    pub tilt_targets: Vec<NodeId>,
    #[serde(default)]
    pub fragments: Vec<Fragment>,
}

impl PageView {
    /// Resolve a fragment name to its element, if one exists.
    pub fn fragment_target(&self, name: &str) -> Option<NodeId> {
        self.fragments
            .iter()
            .find_map(|f| if f.name == name { Some(f.node) } else { None })
    }

    /// Basic validation: fragment names unique, no target listed twice.
    pub fn validate_basic(&self) -> Result<(), SnapshotError> {
        for (i, f) in self.fragments.iter().enumerate() {
            if self.fragments[..i].iter().any(|o| o.name == f.name) {
                return Err(SnapshotError::DuplicateFragment {
                    name: f.name.clone(),
                });
            }
        }
        check_unique(self.reveals.iter().copied(), "reveals")?;
        check_unique(self.stagger_groups.iter().copied(), "stagger_groups")?;
        check_unique(self.counters.iter().map(|c| c.node), "counters")?;
        check_unique(self.sections.iter().map(|s| s.node), "sections")?;
        check_unique(self.nav_links.iter().map(|l| l.node), "nav_links")?;
        check_unique(self.filter_controls.iter().map(|c| c.node), "filter_controls")?;
        check_unique(self.cards.iter().map(|c| c.node), "cards")?;
        check_unique(self.tilt_targets.iter().copied(), "tilt_targets")?;
        Ok(())
    }
}

fn check_unique(
    nodes: impl Iterator<Item = NodeId>,
    list: &'static str,
) -> Result<(), SnapshotError> {
    let mut seen: Vec<NodeId> = Vec::new();
    for node in nodes {
        if seen.contains(&node) {
            return Err(SnapshotError::DuplicateTarget { node: node.0, list });
        }
        seen.push(node);
    }
    Ok(())
}
