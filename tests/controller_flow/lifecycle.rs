use gw_info::{AppIntent, InfoPanel, MapEffect, ShownResult, ToolPhase};

use super::support::{configured_options, feature_result, Harness};

/// Zustände, aus denen das Werkzeug geschlossen werden kann.
fn harness_in(phase: ToolPhase) -> Harness {
    let mut h = Harness::active();
    match phase {
        ToolPhase::AwaitingClick => {}
        ToolPhase::Pending => {
            h.click(1.0, 1.0);
        }
        ToolPhase::Shown(ShownResult::Empty) => {
            h.click(1.0, 1.0);
            h.respond(0, Ok(super::support::empty_response()));
        }
        ToolPhase::Shown(ShownResult::NonEmpty) => {
            h.show_result(feature_result("9", "v_node", "POINT (3 4)"));
        }
        ToolPhase::Inactive => unreachable!("kein aktiver Ausgangszustand"),
    }
    assert_eq!(h.state.phase(), phase);
    h
}

fn closable_phases() -> [ToolPhase; 4] {
    [
        ToolPhase::AwaitingClick,
        ToolPhase::Pending,
        ToolPhase::Shown(ShownResult::Empty),
        ToolPhase::Shown(ShownResult::NonEmpty),
    ]
}

#[test]
fn activation_waits_for_click() {
    let mut h = Harness::inactive_with(configured_options());
    assert_eq!(h.state.phase(), ToolPhase::Inactive);

    h.host.current_task = Some("GwInfo".to_string());
    h.push_host();

    assert!(h.state.tool.active);
    assert_eq!(h.state.phase(), ToolPhase::AwaitingClick);
    assert_eq!(h.controller.build_info_panel(&h.state), InfoPanel::Hidden);
}

#[test]
fn close_always_clears_marker_highlight_and_results() {
    for phase in closable_phases() {
        let mut h = harness_in(phase);
        h.state.map.drain_effects();

        h.intent(AppIntent::ToolCloseRequested);

        assert_eq!(h.state.phase(), ToolPhase::Inactive, "aus {phase:?}");
        assert!(h.state.map.markers.is_empty(), "aus {phase:?}");
        assert!(h.state.map.layers.is_empty(), "aus {phase:?}");
        assert!(h.state.results.current().is_none(), "aus {phase:?}");
        assert!(h.state.results.previous().is_none(), "aus {phase:?}");
        assert!(!h.state.results.is_pending(), "aus {phase:?}");
        assert_eq!(
            h.state.map.drain_effects(),
            vec![
                MapEffect::RemoveMarker {
                    id: "identify".to_string()
                },
                MapEffect::RemoveLayer {
                    id: "identifyselection".to_string()
                },
                MapEffect::ResetSelectionGeometryType,
            ],
            "aus {phase:?}"
        );
    }
}

#[test]
fn hiding_the_task_closes_the_tool() {
    let mut h = Harness::inactive_with(configured_options());
    h.host.current_task = Some("GwInfo".to_string());
    h.push_host();
    h.click(1.0, 1.0);
    h.state.map.drain_effects();

    h.host.current_task = None;
    h.push_host();

    assert_eq!(h.state.phase(), ToolPhase::Inactive);
    assert!(h
        .state
        .map
        .drain_effects()
        .contains(&MapEffect::ResetSelectionGeometryType));
}

#[test]
fn switching_identify_tool_deactivates_without_filter_reset() {
    let mut h = harness_in(ToolPhase::Shown(ShownResult::NonEmpty));
    h.state.map.drain_effects();

    h.host.current_identify_tool = Some("Identify".to_string());
    h.push_host();

    assert_eq!(h.state.phase(), ToolPhase::Inactive);
    assert!(h.state.map.markers.is_empty());
    assert!(h.state.map.layers.is_empty());
    let effects = h.state.map.drain_effects();
    assert!(!effects.contains(&MapEffect::ResetSelectionGeometryType));
    assert_eq!(effects.len(), 2);
}

#[test]
fn late_response_after_close_is_discarded() {
    let mut h = harness_in(ToolPhase::Pending);

    h.intent(AppIntent::ToolCloseRequested);
    h.respond(0, Ok(feature_result("9", "v_node", "POINT (3 4)")));

    assert!(h.state.results.current().is_none());
    assert!(h.state.map.markers.is_empty());
    assert_eq!(h.controller.build_info_panel(&h.state), InfoPanel::Hidden);
}

#[test]
fn closing_result_window_keeps_tool_active() {
    let mut h = harness_in(ToolPhase::Shown(ShownResult::NonEmpty));
    h.state.map.drain_effects();

    h.intent(AppIntent::ResultWindowClosed);

    assert_eq!(h.state.phase(), ToolPhase::AwaitingClick);
    assert_eq!(h.controller.build_info_panel(&h.state), InfoPanel::Hidden);
    assert!(h.state.map.markers.is_empty());
    assert!(!h
        .state
        .map
        .drain_effects()
        .contains(&MapEffect::ResetSelectionGeometryType));

    h.click(5.0, 5.0);
    assert_eq!(h.state.phase(), ToolPhase::Pending);
}
