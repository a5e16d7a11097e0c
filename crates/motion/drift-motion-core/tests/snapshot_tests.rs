use drift_motion_core::{parse_page_snapshot_json, NodeId, SnapshotError};

fn n(id: u32) -> NodeId {
    NodeId(id)
}

/// it should parse the showcase fixture into the expected page view
#[test]
fn showcase_fixture_parses() {
    let raw = drift_test_fixtures::page_snapshot_json("showcase").expect("fixture");
    let page = parse_page_snapshot_json(&raw).expect("valid snapshot");

    assert!(!page.reduced_motion);
    assert_eq!(page.reveals, vec![n(0), n(1), n(2)]);
    assert_eq!(page.stagger_groups, vec![n(3)]);
    assert_eq!(page.sections.len(), 3);
    assert_eq!(page.nav_links.len(), 3);
    assert_eq!(page.nav_links[0].indicator, Some(n(11)));
    assert_eq!(page.parallax, Some(n(14)));
    assert_eq!(page.tilt_targets, vec![n(17), n(18)]);
    assert_eq!(page.fragment_target("about"), Some(n(8)));
    assert_eq!(page.fragment_target("archive"), None);

    // String and numeric counter markers both parse; a missing value is 0.
    assert_eq!(page.counters[0].value, 42);
    assert_eq!(page.counters[1].value, 128);
    assert_eq!(page.counters[2].value, 0);
}

/// it should parse the lineup fixture with its full card metadata
#[test]
fn lineup_fixture_parses() {
    let raw = drift_test_fixtures::page_snapshot_json("lineup").expect("fixture");
    let page = parse_page_snapshot_json(&raw).expect("valid snapshot");

    assert_eq!(page.filter_controls.len(), 5);
    assert_eq!(page.cards.len(), 10);
    // A card may omit type and status entirely.
    let bare = page.cards.iter().find(|c| c.node == n(19)).expect("card");
    assert_eq!(bare.kind, None);
    assert_eq!(bare.status, None);
    assert_eq!(bare.tags, vec!["misc".to_string()]);
}

/// it should default malformed counter values to zero instead of failing
#[test]
fn malformed_counter_defaults_to_zero() {
    let raw = r#"{ "counters": [ { "node": 1, "value": "soon" } ] }"#;
    let page = parse_page_snapshot_json(raw).expect("valid snapshot");
    assert_eq!(page.counters[0].value, 0);
}

/// it should treat every list as optional
#[test]
fn minimal_snapshot_parses() {
    let page = parse_page_snapshot_json("{}").expect("valid snapshot");
    assert!(page.reveals.is_empty());
    assert!(page.cards.is_empty());
    assert_eq!(page.parallax, None);
}

/// it should reject snapshots with duplicate fragment names
#[test]
fn duplicate_fragment_rejected() {
    let raw = r#"{ "fragments": [ { "node": 1, "name": "work" }, { "node": 2, "name": "work" } ] }"#;
    let err = parse_page_snapshot_json(raw).unwrap_err();
    assert_eq!(
        err,
        SnapshotError::DuplicateFragment {
            name: "work".into()
        }
    );
}

/// it should reject a target listed twice in one list
#[test]
fn duplicate_target_rejected() {
    let raw = r#"{ "reveals": [3, 3] }"#;
    let err = parse_page_snapshot_json(raw).unwrap_err();
    assert!(matches!(
        err,
        SnapshotError::DuplicateTarget { node: 3, list: "reveals" }
    ));
}

/// it should report malformed JSON as a parse error
#[test]
fn malformed_json_is_a_parse_error() {
    let err = parse_page_snapshot_json("{ not json").unwrap_err();
    assert!(matches!(err, SnapshotError::Parse { .. }));
}
