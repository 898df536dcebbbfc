//! View-Model des Ergebnisfensters.

use serde::Serialize;

use crate::app::AppState;

/// Inhalt des Ergebnisfensters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "panel", rename_all = "snake_case")]
pub enum InfoPanel {
    /// Kein Fenster (nichts abgefragt oder geschlossen)
    Hidden,
    /// "Wird abgefragt …"
    Querying,
    /// "Keine Ergebnisse"
    NoResults,
    /// Formular des Treffers; `back_available` zeigt den Zurück-Button
    Result {
        form_xml: String,
        back_available: bool,
    },
}

/// Baut das View-Model aus dem AppState.
pub fn build(state: &AppState) -> InfoPanel {
    let results = &state.results;
    match results.current() {
        None if !results.is_pending() => InfoPanel::Hidden,
        Some(result) if !result.is_empty() => InfoPanel::Result {
            form_xml: result.form_xml.clone().unwrap_or_default(),
            back_available: results.can_go_back(),
        },
        _ if results.is_pending() => InfoPanel::Querying,
        _ => InfoPanel::NoResults,
    }
}
