//! Karten-Effekte eines Identify-Ergebnisses: Hervorhebung, Marker, Pan.

use glam::DVec2;

use crate::app::state::MapState;
use crate::core::{
    center_of, parse_wkt, Geometry, IdentifyResult, LayerRole, MapMarker, MapProjection,
    VectorFeature, VectorLayer,
};
use crate::shared::InfoOptions;

/// Wendet die Karten-Effekte eines Ergebnisses an.
///
/// Reihenfolge: Hervorhebung → Marker → Pan. Jeder Schritt ist unabhängig;
/// fehlt ein repräsentativer Punkt, wird trotzdem hervorgehoben.
/// Bei leerem Ergebnis wird nur die Hervorhebung entfernt.
pub fn dispatch(
    map: &mut MapState,
    options: &InfoOptions,
    crs: &MapProjection,
    result: &IdentifyResult,
) {
    let geometry = result_geometry(result);

    highlight(map, options, crs, result, geometry.as_ref());

    let Some(center) = geometry.as_ref().and_then(center_of) else {
        if !result.is_empty() {
            log::debug!("Kein Mittelpunkt für Ergebnis-Geometrie, Marker und Pan entfallen");
        }
        return;
    };
    place_marker(map, options, crs, center);
    map.pan_to(center, crs.clone());
}

/// Ersetzt den Hervorhebungs-Layer durch die Ergebnis-Geometrie oder entfernt ihn.
fn highlight(
    map: &mut MapState,
    options: &InfoOptions,
    crs: &MapProjection,
    result: &IdentifyResult,
    geometry: Option<&Geometry>,
) {
    match (&result.feature, geometry) {
        (Some(feature), Some(geometry)) => map.replace_layer(VectorLayer {
            id: options.highlight_layer_id.clone(),
            role: LayerRole::Selection,
            crs: crs.clone(),
            features: vec![VectorFeature {
                id: feature.id.clone(),
                geometry: geometry.clone(),
            }],
        }),
        _ => map.remove_layer(&options.highlight_layer_id),
    }
}

fn place_marker(map: &mut MapState, options: &InfoOptions, crs: &MapProjection, at: DVec2) {
    map.add_marker(MapMarker::new(
        options.marker_id.clone(),
        at,
        "",
        crs.clone(),
    ));
}

/// Liest die WKT-Geometrie des Treffers; `None` bei leerem Ergebnis oder ungültigem WKT.
fn result_geometry(result: &IdentifyResult) -> Option<Geometry> {
    let feature = result.feature.as_ref()?;
    match parse_wkt(&feature.geometry) {
        Ok(geometry) => Some(geometry),
        Err(e) => {
            log::warn!(
                "Geometrie von Feature {} ({}) nicht lesbar: {}",
                feature.id,
                feature.table_name,
                e
            );
            None
        }
    }
}
