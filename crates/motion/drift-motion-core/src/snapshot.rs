//! Page snapshot loader.
//!
//! The host scans the document once at page-ready and serializes what it
//! found; this module parses that JSON into the canonical `PageView`.
//!
//! Notes:
//! - Counter values arrive as the raw marker attribute: a number or a
//!   string. Anything that does not parse as an integer degrades to 0
//!   rather than failing the load.
//! - Fragment hrefs are given without the leading `#`.
//! - Basic validation (unique fragments, no duplicate targets) runs at the
//!   end; absence of any target list is not an error.

use serde::Deserialize;

use crate::error::SnapshotError;
use crate::ids::NodeId;
use crate::page::{
    AnchorLink, Card, CounterTarget, FilterControl, Fragment, NavLink, PageView, Section,
};

/// Parse a page snapshot JSON document into a validated `PageView`.
pub fn parse_page_snapshot_json(s: &str) -> Result<PageView, SnapshotError> {
    let raw: RawSnapshot = serde_json::from_str(s).map_err(|e| SnapshotError::Parse {
        reason: e.to_string(),
    })?;

    let counters = raw
        .counters
        .into_iter()
        .map(|c| CounterTarget {
            node: c.node,
            value: parse_counter_value(c.value.as_ref()),
        })
        .collect();

    let page = PageView {
        reduced_motion: raw.reduced_motion,
        reveals: raw.reveals,
        stagger_groups: raw.stagger_groups,
        counters,
        sections: raw.sections,
        nav_links: raw.nav_links,
        parallax: raw.parallax,
        anchors: raw.anchors,
        filter_controls: raw.filter_controls,
        cards: raw.cards,
        tilt_targets: raw.tilt_targets,
        fragments: raw.fragments,
    };
    page.validate_basic()?;
    Ok(page)
}

fn parse_counter_value(v: Option<&RawCounterValue>) -> i64 {
    match v {
        Some(RawCounterValue::Integer(n)) => *n,
        Some(RawCounterValue::Number(f)) => f.trunc() as i64,
        Some(RawCounterValue::Text(s)) => match s.trim().parse::<i64>() {
            Ok(n) => n,
            Err(_) => {
                log::warn!("counter value {s:?} is not an integer, defaulting to 0");
                0
            }
        },
        None => 0,
    }
}

#[derive(Debug, Deserialize)]
struct RawSnapshot {
    #[serde(default)]
    reduced_motion: bool,
    #[serde(default)]
    reveals: Vec<NodeId>,
    #[serde(default)]
    stagger_groups: Vec<NodeId>,
    #[serde(default)]
    counters: Vec<RawCounter>,
    #[serde(default)]
    sections: Vec<Section>,
    #[serde(default)]
    nav_links: Vec<NavLink>,
    #[serde(default)]
    parallax: Option<NodeId>,
    #[serde(default)]
    anchors: Vec<AnchorLink>,
    #[serde(default)]
    filter_controls: Vec<FilterControl>,
    #[serde(default)]
    cards: Vec<Card>,
    #[serde(default)]
    tilt_targets: Vec<NodeId>,
    #[serde(default)]
    fragments: Vec<Fragment>,
}

#[derive(Debug, Deserialize)]
struct RawCounter {
    node: NodeId,
    #[serde(default)]
    value: Option<RawCounterValue>,
}

/// Counter markers carry whatever the markup declared; both `42` and `"42"`
/// are accepted.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawCounterValue {
    Integer(i64),
    Number(f64),
    Text(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_values_default_to_zero() {
        assert_eq!(parse_counter_value(None), 0);
        assert_eq!(
            parse_counter_value(Some(&RawCounterValue::Text("oops".into()))),
            0
        );
        assert_eq!(
            parse_counter_value(Some(&RawCounterValue::Text(" 42 ".into()))),
            42
        );
        assert_eq!(parse_counter_value(Some(&RawCounterValue::Integer(7))), 7);
        assert_eq!(parse_counter_value(Some(&RawCounterValue::Number(7.9))), 7);
    }
}
