use drift_motion_core::{
    Activation, AnimationFinished, Card, CardAnimation, Easing, Engine, FilterControl, Inputs,
    MotionEvent, NodeId, Outputs, PageView, VisualOp,
};

fn n(id: u32) -> NodeId {
    NodeId(id)
}

fn card(id: u32, kind: &str, tags: &[&str], status: &str) -> Card {
    Card {
        node: n(id),
        kind: Some(kind.into()),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        status: Some(status.into()),
    }
}

/// Controls all(0)/media(1)/infra(2)/retired(3); cards:
/// 10 media, 11 media, 12 infra (tagged media), 13 infra retired.
fn lineup_page() -> PageView {
    PageView {
        filter_controls: vec![
            FilterControl {
                node: n(0),
                key: "all".into(),
            },
            FilterControl {
                node: n(1),
                key: "media".into(),
            },
            FilterControl {
                node: n(2),
                key: "infra".into(),
            },
            FilterControl {
                node: n(3),
                key: "retired".into(),
            },
        ],
        cards: vec![
            card(10, "media", &["living-room"], "active"),
            card(11, "media", &["audio"], "active"),
            card(12, "infra", &["media"], "active"),
            card(13, "infra", &["storage"], "retired"),
        ],
        ..Default::default()
    }
}

fn select(control: NodeId) -> Inputs {
    Inputs {
        activations: vec![Activation::Filter { control }],
        ..Default::default()
    }
}

fn finished(target: NodeId, generation: u32) -> Inputs {
    Inputs {
        completions: vec![AnimationFinished { target, generation }],
        ..Default::default()
    }
}

fn active_controls(out: &Outputs) -> Vec<NodeId> {
    out.ops
        .iter()
        .filter_map(|op| match op {
            VisualOp::SetClass { target, class, on }
                if class == "is-active" && *on => Some(*target),
            _ => None,
        })
        .collect()
}

fn animations(out: &Outputs, which: CardAnimation) -> Vec<(NodeId, u32)> {
    out.ops
        .iter()
        .filter_map(|op| match op {
            VisualOp::Animate {
                target,
                animation,
                generation,
                ..
            } if *animation == which => Some((*target, *generation)),
            _ => None,
        })
        .collect()
}

fn display_ops(out: &Outputs) -> Vec<(NodeId, bool)> {
    out.ops
        .iter()
        .filter_map(|op| match op {
            VisualOp::SetDisplay { target, visible } => Some((*target, *visible)),
            _ => None,
        })
        .collect()
}

/// it should mark exactly one control active and animate exactly the
/// predicate mismatches out
#[test]
fn media_transition_marks_and_animates() {
    let mut eng = Engine::new(lineup_page());
    let _ = eng.start();

    let out = eng.update(0.0, select(n(1))).clone();
    assert_eq!(active_controls(&out), vec![n(1)]);
    assert_eq!(eng.active_filter_key(), "media");

    // 10 and 11 match by type, 12 by tag; all were already visible, so no
    // entrances play. Only 13 leaves.
    assert!(animations(&out, CardAnimation::Enter).is_empty());
    assert_eq!(animations(&out, CardAnimation::Exit), vec![(n(13), 1)]);
    // Display removal waits for the fade completion.
    assert!(display_ops(&out).is_empty());
    assert!(out
        .events
        .iter()
        .any(|e| matches!(e, MotionEvent::FilterChanged { key } if key == "media")));
}

/// it should hide a faded card only when its completion arrives
#[test]
fn exit_completion_gates_display_removal() {
    let mut eng = Engine::new(lineup_page());
    let _ = eng.start();
    let _ = eng.update(0.0, select(n(1)));

    let out = eng.update(0.0, finished(n(13), 1)).clone();
    assert_eq!(display_ops(&out), vec![(n(13), false)]);
}

/// it should use the fixed animation durations and curves
#[test]
fn animation_parameters() {
    let mut eng = Engine::new(lineup_page());
    let _ = eng.start();
    let _ = eng.update(0.0, select(n(1)));
    // Back to "all": 13 re-enters.
    let out = eng.update(0.0, select(n(0))).clone();
    let enter = out
        .ops
        .iter()
        .find_map(|op| match op {
            VisualOp::Animate {
                target,
                animation: CardAnimation::Enter,
                duration_ms,
                easing,
                ..
            } if *target == n(13) => Some((*duration_ms, *easing)),
            _ => None,
        })
        .expect("entrance for the re-shown card");
    assert_eq!(enter, (220.0, Easing::ExpoOut));

    let _ = eng.update(0.0, select(n(1)));
    let exit = eng.update(0.0, Inputs::default()).clone();
    assert!(exit.is_empty());
}

/// it should discard a stale fade completion after a rapid re-filter
#[test]
fn stale_completion_never_hides_a_reshown_card() {
    let mut eng = Engine::new(lineup_page());
    let _ = eng.start();

    // media: card 13 starts fading under generation 1.
    let _ = eng.update(0.0, select(n(1)));
    // all: 13 is re-shown under generation 2 before the fade finishes.
    let out = eng.update(0.0, select(n(0))).clone();
    assert!(display_ops(&out).contains(&(n(13), true)));
    assert_eq!(animations(&out, CardAnimation::Enter), vec![(n(13), 2)]);

    // The superseded fade's completion must not hide the card.
    let stale = eng.update(0.0, finished(n(13), 1)).clone();
    assert!(display_ops(&stale).is_empty());

    // A current-generation completion of the entrance is ignored too: the
    // card is desired-visible.
    let cur = eng.update(0.0, finished(n(13), 2)).clone();
    assert!(display_ops(&cur).is_empty());
}

/// it should treat a completion superseded within the same frame as stale
#[test]
fn same_frame_supersede_wins() {
    let mut eng = Engine::new(lineup_page());
    let _ = eng.start();
    let _ = eng.update(0.0, select(n(1)));

    // The fade finishes in the same frame the user flips back to "all".
    let inputs = Inputs {
        activations: vec![Activation::Filter { control: n(0) }],
        completions: vec![AnimationFinished {
            target: n(13),
            generation: 1,
        }],
        ..Default::default()
    };
    let out = eng.update(0.0, inputs).clone();
    assert!(display_ops(&out).contains(&(n(13), true)));
    assert!(!display_ops(&out).contains(&(n(13), false)));
}

/// it should ignore activations of the already-active key
#[test]
fn same_key_activation_is_silent() {
    let mut eng = Engine::new(lineup_page());
    let _ = eng.start();
    let out = eng.update(0.0, select(n(0))).clone();
    assert!(out.is_empty());

    let _ = eng.update(0.0, select(n(2)));
    let repeat = eng.update(0.0, select(n(2))).clone();
    assert!(repeat.is_empty());
}

/// it should match cards by status as well as type and tags
#[test]
fn status_filter_matches() {
    let mut eng = Engine::new(lineup_page());
    let _ = eng.start();

    let out = eng.update(0.0, select(n(3))).clone();
    // Only 13 has status "retired"; 10, 11, 12 fade out.
    let exits: Vec<NodeId> = animations(&out, CardAnimation::Exit)
        .into_iter()
        .map(|(t, _)| t)
        .collect();
    assert_eq!(exits, vec![n(10), n(11), n(12)]);
}

/// it should switch displays immediately under reduced motion
#[test]
fn reduced_motion_switches_immediately() {
    let page = PageView {
        reduced_motion: true,
        ..lineup_page()
    };
    let mut eng = Engine::new(page);
    let _ = eng.start();

    let out = eng.update(0.0, select(n(1))).clone();
    assert_eq!(display_ops(&out), vec![(n(13), false)]);
    assert!(animations(&out, CardAnimation::Enter).is_empty());
    assert!(animations(&out, CardAnimation::Exit).is_empty());

    let back = eng.update(0.0, select(n(0))).clone();
    assert_eq!(display_ops(&back), vec![(n(13), true)]);
}

/// it should ignore activations from nodes that are not filter controls
#[test]
fn unknown_control_is_ignored() {
    let mut eng = Engine::new(lineup_page());
    let _ = eng.start();
    let out = eng.update(0.0, select(n(99))).clone();
    assert!(out.is_empty());
}
