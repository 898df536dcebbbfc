//! Handler für Aktivierung, Deaktivierung und Schließen.

use crate::app::use_cases;
use crate::app::AppState;

/// Aktiviert das Werkzeug.
pub fn activate(state: &mut AppState) {
    use_cases::lifecycle::activate(state);
}

/// Deaktiviert das Werkzeug und räumt die Karte auf.
pub fn deactivate(state: &mut AppState) {
    use_cases::lifecycle::deactivate(state);
}

/// Schließt das Werkzeug.
pub fn close(state: &mut AppState) {
    use_cases::lifecycle::close(state);
}

/// Schließt das Ergebnisfenster.
pub fn clear_results(state: &mut AppState) {
    use_cases::lifecycle::clear_results(state);
    log::debug!("Ergebnisfenster geschlossen");
}
