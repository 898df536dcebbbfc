//! Mapping von Host-/Formular-Intents auf mutierende App-Commands.

use super::state::HostSnapshot;
use super::use_cases::click_gate;
use super::{AppCommand, AppIntent, AppState};
use crate::core::FormAction;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::HostUpdated { snapshot } => map_host_update(state, snapshot),
        AppIntent::FormActionDispatched { action } => map_form_action(state, &action),
        AppIntent::BackRequested => {
            if !state.tool.active {
                log::warn!("Zurück angefordert, aber das Werkzeug ist nicht aktiv");
                vec![]
            } else if state.results.can_go_back() {
                vec![AppCommand::RestorePreviousResult]
            } else {
                log::warn!("Zurück angefordert, aber kein vorheriges Ergebnis vorhanden");
                vec![]
            }
        }
        AppIntent::ResultWindowClosed => vec![AppCommand::ClearResults],
        AppIntent::ToolCloseRequested => vec![AppCommand::CloseTool],
        AppIntent::LookupCompleted { completion } => {
            vec![AppCommand::ApplyLookupCompletion { completion }]
        }
    }
}

/// Vergleicht den neuen Host-Zustand mit dem bisherigen.
///
/// Reihenfolge: Schnappschuss übernehmen → Schließen/Deaktivieren →
/// (Re-)Aktivieren → Abfrage am Klickpunkt.
fn map_host_update(state: &AppState, snapshot: HostSnapshot) -> Vec<AppCommand> {
    let tool_id = state.options.tool_id.as_str();
    let previous = &state.host;

    let mut commands = Vec::new();
    let mut active = state.tool.active;

    if previous.task_is(tool_id) && !snapshot.task_is(tool_id) {
        commands.push(AppCommand::CloseTool);
        active = false;
    } else if previous.identify_tool_is(tool_id) && !snapshot.identify_tool_is(tool_id) {
        commands.push(AppCommand::DeactivateTool);
        active = false;
    } else if active && !snapshot.activates(tool_id) {
        commands.push(AppCommand::DeactivateTool);
        active = false;
    }

    let query_point = if snapshot.activates(tool_id) {
        if !active {
            commands.push(AppCommand::ActivateTool);
        }
        click_gate::evaluate(snapshot.click.as_ref(), previous.click.as_ref())
    } else {
        None
    };

    commands.insert(0, AppCommand::StoreHostSnapshot { snapshot });
    if let Some(coordinate) = query_point {
        commands.push(AppCommand::QueryCoordinate { coordinate });
    }
    commands
}

/// Formular-Aktionen gelten nur für das angezeigte, nicht-leere Ergebnis
/// eines aktiven Werkzeugs.
fn map_form_action(state: &AppState, action: &FormAction) -> Vec<AppCommand> {
    let form_shown = state.tool.active
        && !state.results.is_pending()
        && state.results.current().is_some_and(|r| !r.is_empty());
    if !form_shown {
        log::warn!("Aktion `{}` verworfen: kein Formular angezeigt", action.name);
        return vec![];
    }

    match action.feature_link_target() {
        Some(target) => vec![AppCommand::LookupFeature {
            id: target.id,
            table_name: target.table_name,
        }],
        None => {
            log::warn!("Aktion `{}` kann nicht verarbeitet werden", action.name);
            vec![]
        }
    }
}
