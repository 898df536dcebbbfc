//! Handler für Abfragen, Ergebnisse und Zurück-Navigation.

use glam::DVec2;

use crate::app::use_cases;
use crate::app::AppState;
use crate::lookup::{LookupClient, LookupCompletion};

/// Startet eine Abfrage am Klickpunkt.
pub fn query_coordinate(state: &mut AppState, lookup: &mut dyn LookupClient, coordinate: DVec2) {
    use_cases::query::query_coordinate(state, lookup, coordinate);
}

/// Startet eine Feature-Link-Abfrage.
pub fn lookup_feature(
    state: &mut AppState,
    lookup: &mut dyn LookupClient,
    id: &str,
    table_name: &str,
) {
    use_cases::query::lookup_feature(state, lookup, id, table_name);
}

/// Übernimmt eine abgeschlossene Anfrage.
pub fn apply_completion(state: &mut AppState, completion: LookupCompletion) {
    use_cases::results::apply_completion(state, completion);
}

/// Zeigt das vorherige Ergebnis wieder an.
pub fn restore_previous(state: &mut AppState) {
    use_cases::results::restore_previous(state);
}
