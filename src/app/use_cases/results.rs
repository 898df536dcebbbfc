//! Use-Cases für Ergebnisübernahme und Zurück-Navigation.

use crate::app::AppState;
use crate::lookup::LookupCompletion;
use crate::shared::StaleResponsePolicy;

use super::effects;

/// Wendet eine abgeschlossene Anfrage an.
///
/// Antworten einer überholten Generation werden je nach
/// [`StaleResponsePolicy`] verworfen oder wie aktuelle übernommen.
/// Fehler enden als "kein Treffer".
pub fn apply_completion(state: &mut AppState, completion: LookupCompletion) {
    let LookupCompletion { ticket, outcome } = completion;

    if ticket.generation != state.results.generation() {
        match state.options.stale_responses {
            StaleResponsePolicy::Discard => {
                log::debug!(
                    "Veraltete Antwort verworfen ({:?}, Generation {} statt {})",
                    ticket.kind,
                    ticket.generation,
                    state.results.generation()
                );
                return;
            }
            StaleResponsePolicy::LastWins => {
                log::debug!(
                    "Veraltete Antwort übernommen ({:?}, Generation {})",
                    ticket.kind,
                    ticket.generation
                );
            }
        }
    }

    match outcome {
        Ok(result) => {
            log::info!(
                "Ergebnis erhalten ({:?}): {}",
                ticket.kind,
                if result.is_empty() { "kein Treffer" } else { "Treffer" }
            );
            state.results.resolve(result);
            redispatch_current(state);
        }
        Err(e) => {
            log::error!("Abfrage fehlgeschlagen ({:?}): {}", ticket.kind, e);
            state.results.resolve_empty();
        }
    }
}

/// Stellt das vorherige Ergebnis wieder her und wendet seine Karten-Effekte erneut an.
pub fn restore_previous(state: &mut AppState) {
    if state.results.restore_previous().is_none() {
        log::warn!("Kein vorheriges Ergebnis vorhanden");
        return;
    }
    redispatch_current(state);
}

fn redispatch_current(state: &mut AppState) {
    if let Some(result) = state.results.current() {
        effects::dispatch(&mut state.map, &state.options, &state.host.projection, result);
    }
}
