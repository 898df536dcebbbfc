use std::sync::Arc;

use approx::assert_abs_diff_eq;
use glam::DVec2;
use gw_info::core::click::{SEARCH_MARKER, STARTUP_POSITION_MARKER};
use gw_info::core::HitFeature;
use gw_info::lookup::LookupRequest;
use gw_info::{
    AppCommand, ClickEvent, Geometry, InfoOptions, InfoPanel, LookupError, MapEffect,
    ShownResult, StaleResponsePolicy, ToolPhase,
};

use super::support::{
    configured_options, empty_response, feature_result, giswater_layer, Harness, SERVICE_URL,
};

#[test]
fn click_with_empty_response_shows_no_results_and_keeps_marker() {
    let mut h = Harness::active();

    h.click(100.0, 200.0);

    assert_eq!(
        h.submitted_urls(),
        vec![format!(
            "{SERVICE_URL}fromcoordinates?epsg=25831&xcoord=100&ycoord=200&zoomRatio=500&layers=layer_a"
        )]
    );
    assert_eq!(h.state.phase(), ToolPhase::Pending);
    assert_eq!(h.controller.build_info_panel(&h.state), InfoPanel::Querying);

    h.respond(0, Ok(empty_response()));

    assert_eq!(h.state.phase(), ToolPhase::Shown(ShownResult::Empty));
    assert_eq!(h.controller.build_info_panel(&h.state), InfoPanel::NoResults);
    let marker = h
        .state
        .map
        .markers
        .get(&h.state.options.marker_id)
        .expect("Identify-Marker sollte gesetzt sein");
    assert_eq!(marker.position, DVec2::new(100.0, 200.0));
    assert_eq!(marker.crs.as_str(), "EPSG:25831");
    assert!(!h
        .state
        .map
        .layers
        .contains_key(&h.state.options.highlight_layer_id));
    assert_eq!(h.state.map.center, None);
}

#[test]
fn click_drops_selection_layers_before_placing_marker() {
    let mut h = Harness::active();

    h.click(5.0, 6.0);

    let effects = h.state.map.drain_effects();
    assert_eq!(
        effects,
        vec![
            MapEffect::RemoveLayer {
                id: "searchselection".to_string()
            },
            MapEffect::RemoveLayer {
                id: "identifyselection".to_string()
            },
            MapEffect::AddMarker(
                h.state.map.markers["identify"].clone()
            ),
        ]
    );
}

#[test]
fn non_empty_response_highlights_marks_and_pans_to_centroid() {
    let mut h = Harness::active();
    h.click(100.0, 200.0);
    h.state.map.drain_effects();

    h.respond(
        0,
        Ok(feature_result("7", "v_arc", "LINESTRING (0 0, 2 0, 2 8)")),
    );

    assert_eq!(h.state.phase(), ToolPhase::Shown(ShownResult::NonEmpty));
    let effects = h.state.map.drain_effects();
    assert_eq!(effects.len(), 3);
    match &effects[0] {
        MapEffect::AddLayerFeatures(layer) => {
            assert_eq!(layer.id, "identifyselection");
            assert_eq!(layer.features.len(), 1);
            assert_eq!(layer.features[0].id, "7");
            assert!(matches!(layer.features[0].geometry, Geometry::LineString(_)));
        }
        other => panic!("Hervorhebung erwartet, erhalten: {other:?}"),
    }
    let marker = &h.state.map.markers["identify"];
    assert_abs_diff_eq!(marker.position.x, 2.0, epsilon = 1e-9);
    assert_abs_diff_eq!(marker.position.y, 3.0, epsilon = 1e-9);
    assert!(matches!(effects[1], MapEffect::AddMarker(_)));
    assert!(matches!(
        effects[2],
        MapEffect::PanTo { center, .. } if center == marker.position
    ));
    assert!(matches!(
        h.controller.build_info_panel(&h.state),
        InfoPanel::Result {
            back_available: false,
            ..
        }
    ));
}

#[test]
fn failed_lookup_ends_as_no_results() {
    let mut h = Harness::active();
    h.click(1.0, 2.0);

    h.respond(0, Err(LookupError::Status(500)));

    assert!(!h.state.results.is_pending());
    assert_eq!(h.controller.build_info_panel(&h.state), InfoPanel::NoResults);
    assert!(h.state.map.markers.contains_key("identify"));
}

#[test]
fn missing_service_url_keeps_tool_inert() {
    let mut h = Harness::active_with(InfoOptions::default());

    h.click(1.0, 2.0);

    assert!(h.submitted().is_empty());
    assert!(!h.state.results.is_pending());
    assert_eq!(h.controller.build_info_panel(&h.state), InfoPanel::NoResults);
    assert!(h.state.map.markers.contains_key("identify"));
}

#[test]
fn missing_giswater_layer_issues_no_request() {
    let mut h = Harness::active();
    h.host.layers = vec![giswater_layer("osm", "http://tiles.example/wms", &["streets"])];

    h.click(1.0, 2.0);

    assert!(h.submitted().is_empty());
    assert_eq!(h.controller.build_info_panel(&h.state), InfoPanel::NoResults);
}

#[test]
fn ambiguous_layers_use_the_first_match() {
    let mut h = Harness::active();
    let endpoint = h.state.options.query_service_url.clone();
    h.host.layers = vec![
        giswater_layer("ws", &endpoint, &["layer_a", "layer_b"]),
        giswater_layer("ud", &endpoint, &["layer_c"]),
    ];

    h.click(1.0, 2.0);

    let submitted = h.submitted();
    assert_eq!(submitted.len(), 1);
    match &submitted[0].request {
        LookupRequest::ByCoordinate { layers, .. } => {
            assert_eq!(layers, &vec!["layer_a".to_string(), "layer_b".to_string()]);
        }
        other => panic!("Koordinaten-Abfrage erwartet, erhalten: {other:?}"),
    }
    assert!(submitted[0].url.as_str().ends_with("layers=layer_a,layer_b"));
}

#[test]
fn same_click_delivered_twice_queries_once() {
    let mut h = Harness::active();
    h.click(1.0, 2.0);

    h.push_host();
    h.push_host();

    assert_eq!(h.submitted().len(), 1);
    let queries = h
        .state
        .command_log
        .entries()
        .iter()
        .filter(|c| matches!(c, AppCommand::QueryCoordinate { .. }))
        .count();
    assert_eq!(queries, 1);
}

#[test]
fn ignored_clicks_issue_no_request() {
    let mut h = Harness::active();

    h.click_with(ClickEvent {
        button: 2,
        ..ClickEvent::primary(DVec2::new(1.0, 1.0))
    });
    h.click_with(ClickEvent {
        features: vec![HitFeature {
            feature: STARTUP_POSITION_MARKER.to_string(),
            layer: None,
        }],
        ..ClickEvent::primary(DVec2::new(1.0, 1.0))
    });
    h.click_with(ClickEvent {
        feature: Some(SEARCH_MARKER.to_string()),
        geometry_type: Some("Point".to_string()),
        geometry: Some(DVec2::new(1.0, 1.0)),
        ..ClickEvent::primary(DVec2::new(1.0, 1.0))
    });

    assert!(h.submitted().is_empty());
    assert_eq!(h.state.phase(), ToolPhase::AwaitingClick);
}

#[test]
fn click_while_inactive_issues_no_request() {
    let mut h = Harness::inactive_with(configured_options());

    h.click(1.0, 2.0);

    assert!(h.submitted().is_empty());
    assert_eq!(h.state.phase(), ToolPhase::Inactive);
}

#[test]
fn click_while_pending_starts_a_new_query() {
    let mut h = Harness::active();
    h.click(1.0, 1.0);

    h.click(2.0, 2.0);

    let submitted = h.submitted();
    assert_eq!(submitted.len(), 2);
    assert!(submitted[1].ticket.generation > submitted[0].ticket.generation);
    assert_eq!(h.state.map.markers["identify"].position, DVec2::new(2.0, 2.0));
}

#[test]
fn stale_response_is_discarded_by_default() {
    let mut h = Harness::active();
    h.click(1.0, 1.0);
    h.click(2.0, 2.0);

    h.respond(0, Ok(feature_result("old", "v_node", "POINT (1 1)")));

    assert!(h.state.results.is_pending());
    assert_eq!(h.controller.build_info_panel(&h.state), InfoPanel::Querying);

    h.respond(1, Ok(feature_result("new", "v_node", "POINT (2 2)")));

    let current = h.state.results.current().expect("Ergebnis erwartet");
    assert_eq!(current.feature.as_ref().map(|f| f.id.as_str()), Some("new"));
}

#[test]
fn last_wins_policy_applies_late_responses() {
    let options = InfoOptions {
        stale_responses: StaleResponsePolicy::LastWins,
        ..configured_options()
    };
    let mut h = Harness::active_with(options);
    h.click(1.0, 1.0);
    h.click(2.0, 2.0);

    h.respond(1, Ok(feature_result("new", "v_node", "POINT (2 2)")));
    h.respond(0, Ok(feature_result("old", "v_node", "POINT (1 1)")));

    let current = h.state.results.current().expect("Ergebnis erwartet");
    assert_eq!(current.feature.as_ref().map(|f| f.id.as_str()), Some("old"));
    assert_eq!(h.state.map.markers["identify"].position, DVec2::new(1.0, 1.0));
}

#[test]
fn repeated_click_equal_but_new_instance_is_queried_again() {
    let mut h = Harness::active();
    let first = h.click(1.0, 2.0);
    let second = h.click(1.0, 2.0);

    assert!(!Arc::ptr_eq(&first, &second));
    assert_eq!(h.submitted().len(), 2);
}
