use approx::assert_abs_diff_eq;
use gw_info::{
    AppCommand, AppIntent, FormAction, Geometry, InfoPanel, MapEffect, ShownResult, ToolPhase,
};

use super::support::{feature_result, Harness, SERVICE_URL};

const SQUARE: &str = "POLYGON ((0 0, 4 0, 4 4, 0 4, 0 0))";

fn shown_result() -> Harness {
    let mut h = Harness::active();
    h.show_result(feature_result("3", "v_arc", "LINESTRING (0 0, 10 0)"));
    h.state.map.drain_effects();
    h
}

fn follow_link(h: &mut Harness, id: &str, table_name: &str) {
    h.intent(AppIntent::FormActionDispatched {
        action: FormAction::feature_link(id, table_name),
    });
}

#[test]
fn feature_link_queries_by_id_and_keeps_prior_result() {
    let mut h = shown_result();
    let prior = h.state.results.current().cloned();

    follow_link(&mut h, "42", "v_node");

    let urls = h.submitted_urls();
    assert_eq!(
        urls.last().map(String::as_str),
        Some(format!("{SERVICE_URL}fromid?id=42&tableName=v_node").as_str())
    );
    assert_eq!(h.state.phase(), ToolPhase::Pending);
    assert_eq!(h.state.results.previous().cloned(), prior);
    assert_eq!(
        h.state.map.drain_effects(),
        vec![MapEffect::RemoveLayer {
            id: "searchselection".to_string()
        }]
    );

    h.respond(urls.len() - 1, Ok(feature_result("42", "v_node", SQUARE)));

    assert_eq!(h.state.phase(), ToolPhase::Shown(ShownResult::NonEmpty));
    let highlight = &h.state.map.layers["identifyselection"];
    assert_eq!(highlight.features[0].id, "42");
    assert!(matches!(highlight.features[0].geometry, Geometry::Polygon(_)));

    let marker = h.state.map.markers["identify"].position;
    assert_abs_diff_eq!(marker.x, 2.0, epsilon = 1e-9);
    assert_abs_diff_eq!(marker.y, 2.0, epsilon = 1e-9);
    assert_eq!(h.state.map.center, Some(marker));
    assert!(matches!(
        h.controller.build_info_panel(&h.state),
        InfoPanel::Result {
            back_available: true,
            ..
        }
    ));
}

#[test]
fn back_restores_pre_link_result_once() {
    let mut h = shown_result();
    let prior = h.state.results.current().cloned();
    follow_link(&mut h, "42", "v_node");
    let index = h.submitted().len() - 1;
    h.respond(index, Ok(feature_result("42", "v_node", SQUARE)));
    h.state.map.drain_effects();

    h.intent(AppIntent::BackRequested);

    assert_eq!(h.state.results.current().cloned(), prior);
    assert!(h.state.results.previous().is_none());
    assert!(!h.state.results.can_go_back());
    let marker = h.state.map.markers["identify"].position;
    assert_abs_diff_eq!(marker.x, 5.0, epsilon = 1e-9);
    assert_abs_diff_eq!(marker.y, 0.0, epsilon = 1e-9);
    let effects = h.state.map.drain_effects();
    assert!(matches!(
        &effects[0],
        MapEffect::AddLayerFeatures(layer) if layer.features[0].id == "3"
    ));

    let logged = h.state.command_log.len();
    h.intent(AppIntent::BackRequested);

    assert_eq!(h.state.command_log.len(), logged);
    assert_eq!(h.state.results.current().cloned(), prior);
    assert!(h.state.map.drain_effects().is_empty());
}

#[test]
fn back_while_link_is_pending_discards_the_late_response() {
    let mut h = shown_result();
    let prior = h.state.results.current().cloned();
    follow_link(&mut h, "42", "v_node");
    let index = h.submitted().len() - 1;

    h.intent(AppIntent::BackRequested);

    assert!(!h.state.results.is_pending());
    assert_eq!(h.state.results.current().cloned(), prior);

    h.respond(index, Ok(feature_result("42", "v_node", SQUARE)));

    assert_eq!(h.state.results.current().cloned(), prior);
}

#[test]
fn numeric_feature_link_id_is_sent_as_text() {
    let mut h = shown_result();
    let action: FormAction = serde_json::from_value(serde_json::json!({
        "name": "featureLink",
        "params": {"id": 42, "tableName": "v_node"}
    }))
    .expect("Aktion sollte lesbar sein");

    h.intent(AppIntent::FormActionDispatched { action });

    assert!(h
        .submitted_urls()
        .last()
        .is_some_and(|url| url.ends_with("fromid?id=42&tableName=v_node")));
}

#[test]
fn unrecognized_action_changes_nothing() {
    let mut h = shown_result();
    let before = h.state.results.clone();
    let logged = h.state.command_log.len();
    let requests = h.submitted().len();

    h.intent(AppIntent::FormActionDispatched {
        action: FormAction {
            name: "deleteFeature".to_string(),
            params: serde_json::json!({"id": "42"}),
        },
    });

    assert_eq!(h.state.results, before);
    assert_eq!(h.state.command_log.len(), logged);
    assert_eq!(h.submitted().len(), requests);
    assert!(h.state.map.drain_effects().is_empty());
}

#[test]
fn feature_link_without_shown_form_is_ignored() {
    let mut h = Harness::active();
    h.click(1.0, 1.0);
    h.respond(0, Ok(super::support::empty_response()));
    let logged = h.state.command_log.len();

    follow_link(&mut h, "42", "v_node");

    assert_eq!(h.submitted().len(), 1);
    assert_eq!(h.state.command_log.len(), logged);
    assert_eq!(h.state.phase(), ToolPhase::Shown(ShownResult::Empty));
    assert!(!h
        .state
        .command_log
        .entries()
        .iter()
        .any(|c| matches!(c, AppCommand::LookupFeature { .. })));
}

#[test]
fn form_callback_after_close_leaves_map_untouched() {
    let mut h = shown_result();
    h.intent(AppIntent::ToolCloseRequested);
    h.state.map.drain_effects();

    follow_link(&mut h, "42", "v_node");
    h.intent(AppIntent::BackRequested);

    assert_eq!(h.submitted().len(), 1);
    assert_eq!(h.state.phase(), ToolPhase::Inactive);
    assert!(!h.state.results.is_pending());
    assert!(h.state.map.markers.is_empty());
    assert!(h.state.map.layers.is_empty());
    assert!(h.state.map.drain_effects().is_empty());
}
