//! Use-Cases für Aktivierung, Deaktivierung und Schließen des Werkzeugs.

use crate::app::AppState;

/// Aktiviert das Werkzeug; es wartet danach auf einen Klick.
pub fn activate(state: &mut AppState) {
    state.tool.active = true;
    log::info!("Werkzeug {} aktiviert", state.options.tool_id);
}

/// Entfernt Marker, Hervorhebung und Ergebniszustand. Das Werkzeug bleibt aktiv.
pub fn clear_results(state: &mut AppState) {
    state.map.remove_marker(&state.options.marker_id);
    state.map.remove_layer(&state.options.highlight_layer_id);
    state.results.clear();
}

/// Werkzeug verlassen (anderes Identify-Werkzeug gewählt).
pub fn deactivate(state: &mut AppState) {
    clear_results(state);
    state.tool.active = false;
    log::info!("Werkzeug {} deaktiviert", state.options.tool_id);
}

/// Werkzeug schließen; setzt zusätzlich den Geometrieart-Filter der Selektion zurück.
pub fn close(state: &mut AppState) {
    clear_results(state);
    state.map.reset_selection_geometry_type();
    state.tool.active = false;
    log::info!("Werkzeug {} geschlossen", state.options.tool_id);
}
