//! Begrenztes Log ausgeführter Commands für Diagnose und Tests.
//!
//! Neben der vollständigen Folge merkt sich das Log die zuletzt gestartete
//! Service-Abfrage, damit Zeitüberschreitungen und Fehlermeldungen sie
//! benennen können, auch wenn ältere Einträge schon verworfen wurden.

use super::AppCommand;

/// Speichert ausgeführte Commands in Reihenfolge.
#[derive(Default)]
pub struct CommandLog {
    entries: Vec<AppCommand>,
    last_lookup: Option<AppCommand>,
}

impl CommandLog {
    const MAX_ENTRIES: usize = 1000;

    /// Erstellt ein leeres Command-Log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fügt einen ausgeführten Command hinzu; ältere Hälfte fällt bei MAX_ENTRIES weg.
    pub fn record(&mut self, command: &AppCommand) {
        if self.entries.len() >= Self::MAX_ENTRIES {
            self.entries.drain(..Self::MAX_ENTRIES / 2);
        }
        if matches!(
            command,
            AppCommand::QueryCoordinate { .. } | AppCommand::LookupFeature { .. }
        ) {
            self.last_lookup = Some(command.clone());
        }
        self.entries.push(command.clone());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[AppCommand] {
        &self.entries
    }

    /// Zuletzt gestartete Abfrage (`QueryCoordinate` oder `LookupFeature`).
    pub fn last_lookup(&self) -> Option<&AppCommand> {
        self.last_lookup.as_ref()
    }

    /// Kurzbeschreibung der letzten Abfrage für Log- und Fehlermeldungen.
    pub fn describe_last_lookup(&self) -> String {
        match &self.last_lookup {
            Some(AppCommand::QueryCoordinate { coordinate }) => {
                format!("Koordinate ({}, {})", coordinate.x, coordinate.y)
            }
            Some(AppCommand::LookupFeature { id, table_name }) => {
                format!("Feature {} aus {}", id, table_name)
            }
            _ => "keine Abfrage".to_string(),
        }
    }
}
