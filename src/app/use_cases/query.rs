//! Use-Cases zum Starten von Identify-Abfragen.

use glam::DVec2;

use crate::app::state::HostSnapshot;
use crate::app::AppState;
use crate::core::{query_layers_for_service, MapMarker};
use crate::lookup::{LookupClient, LookupKind, LookupTicket};
use crate::shared::InfoOptions;

/// Parameter einer `fromcoordinates`-Abfrage, aufgelöst aus Host-Zustand und Optionen.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateQuery {
    pub base_url: String,
    pub epsg: u32,
    pub zoom_ratio: f64,
    /// Sublayer des ersten passenden Layers, in Host-Reihenfolge
    pub layers: Vec<String>,
}

/// Löst die Abfrageparameter auf; `None`, wenn die Konfiguration dafür fehlt.
///
/// Gibt es mehrere passende Layer, wird der erste verwendet und gewarnt.
pub fn coordinate_query(host: &HostSnapshot, options: &InfoOptions) -> Option<CoordinateQuery> {
    let Some(base_url) = options.service_url() else {
        log::debug!("Keine Service-URL konfiguriert, keine Abfrage");
        return None;
    };

    let candidates = query_layers_for_service(&host.layers, &options.query_service_url);
    let Some(layer) = candidates.first() else {
        log::debug!(
            "Kein abfragbarer Layer für {} aktiv, keine Abfrage",
            options.query_service_url
        );
        return None;
    };
    if candidates.len() > 1 {
        log::warn!(
            "Mehrere abfragbare Giswater-Layer gefunden ({}), verwende '{}'",
            candidates.len(),
            layer.id
        );
    }

    let Some(epsg) = host.projection.code() else {
        log::warn!("Projektion '{}' hat keinen EPSG-Code", host.projection);
        return None;
    };
    let Some(zoom_ratio) = host.zoom_ratio() else {
        log::warn!("Keine Maßstabsliste für Zoom {} vorhanden", host.zoom);
        return None;
    };

    Some(CoordinateQuery {
        base_url: base_url.to_string(),
        epsg,
        zoom_ratio,
        layers: layer.query_layers.clone(),
    })
}

/// Startet eine Abfrage am Klickpunkt.
///
/// Entfernt Such- und Hervorhebungs-Layer, setzt den Identify-Marker sofort
/// auf den Klickpunkt und versetzt den Ergebniszustand in "wird abgefragt".
/// Ohne vollständige Konfiguration endet die Abfrage direkt als "kein Treffer".
pub fn query_coordinate(state: &mut AppState, lookup: &mut dyn LookupClient, coordinate: DVec2) {
    state.map.remove_layer(&state.options.search_layer_id);
    state.map.remove_layer(&state.options.highlight_layer_id);
    state.map.add_marker(MapMarker::new(
        state.options.marker_id.clone(),
        coordinate,
        "",
        state.host.projection.clone(),
    ));

    let generation = state.results.begin_query();
    let Some(query) = coordinate_query(&state.host, &state.options) else {
        state.results.resolve_empty();
        return;
    };

    let ticket = LookupTicket {
        generation,
        kind: LookupKind::ByCoordinate,
    };
    log::info!(
        "Abfrage bei ({}, {}) in EPSG:{} (Maßstab {})",
        coordinate.x,
        coordinate.y,
        query.epsg,
        query.zoom_ratio
    );
    if let Err(e) = lookup.by_coordinate(
        ticket,
        &query.base_url,
        coordinate,
        query.epsg,
        query.zoom_ratio,
        query.layers,
    ) {
        log::error!("Koordinaten-Abfrage nicht gestartet: {}", e);
        state.results.resolve_empty();
    }
}

/// Startet eine Feature-Link-Abfrage; das aktuelle Ergebnis wird zum vorherigen.
pub fn lookup_feature(
    state: &mut AppState,
    lookup: &mut dyn LookupClient,
    id: &str,
    table_name: &str,
) {
    state.map.remove_layer(&state.options.search_layer_id);

    let generation = state.results.begin_feature_lookup();
    let Some(base_url) = state.options.service_url().map(str::to_string) else {
        log::debug!("Keine Service-URL konfiguriert, Feature-Link ignoriert");
        state.results.resolve_empty();
        return;
    };

    let ticket = LookupTicket {
        generation,
        kind: LookupKind::ById,
    };
    log::info!("Feature-Abfrage {} aus {}", id, table_name);
    if let Err(e) = lookup.by_id(ticket, &base_url, id, table_name) {
        log::error!("Feature-Abfrage nicht gestartet: {}", e);
        state.results.resolve_empty();
    }
}
