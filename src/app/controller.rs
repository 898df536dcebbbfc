//! Application Controller für zentrale Event-Verarbeitung.

use super::info_panel::{self, InfoPanel};
use super::{AppCommand, AppIntent, AppState};
use crate::lookup::LookupClient;

/// Orchestriert Host-Events, Formular-Aktionen und Service-Antworten auf den AppState.
pub struct AppController {
    lookup: Box<dyn LookupClient>,
}

impl AppController {
    /// Erstellt einen Controller mit dem gegebenen Transport für Service-Anfragen.
    pub fn new(lookup: Box<dyn LookupClient>) -> Self {
        Self { lookup }
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    ///
    /// Danach liegen Kartenänderungen in `state.map`; der Host holt sie mit
    /// `drain_effects` ab.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Host ===
            AppCommand::StoreHostSnapshot { snapshot } => {
                handlers::host::store_snapshot(state, snapshot)
            }

            // === Lebenszyklus ===
            AppCommand::ActivateTool => handlers::lifecycle::activate(state),
            AppCommand::DeactivateTool => handlers::lifecycle::deactivate(state),
            AppCommand::CloseTool => handlers::lifecycle::close(state),
            AppCommand::ClearResults => handlers::lifecycle::clear_results(state),

            // === Abfragen ===
            AppCommand::QueryCoordinate { coordinate } => {
                handlers::identify::query_coordinate(state, self.lookup.as_mut(), coordinate)
            }
            AppCommand::LookupFeature { id, table_name } => {
                handlers::identify::lookup_feature(state, self.lookup.as_mut(), &id, &table_name)
            }
            AppCommand::ApplyLookupCompletion { completion } => {
                handlers::identify::apply_completion(state, completion)
            }
            AppCommand::RestorePreviousResult => handlers::identify::restore_previous(state),
        }

        Ok(())
    }

    /// Holt abgeschlossene Anfragen ab und wendet sie an.
    /// Gibt die Anzahl verarbeiteter Antworten zurück.
    pub fn poll_lookups(&mut self, state: &mut AppState) -> anyhow::Result<usize> {
        let completions = self.lookup.poll_completed();
        let count = completions.len();
        for completion in completions {
            self.handle_intent(state, AppIntent::LookupCompleted { completion })?;
        }
        Ok(count)
    }

    /// Baut das View-Model des Ergebnisfensters aus dem aktuellen AppState.
    pub fn build_info_panel(&self, state: &AppState) -> InfoPanel {
        info_panel::build(state)
    }
}
