use crate::app::CommandLog;
use crate::shared::InfoOptions;

use super::{HostSnapshot, InfoToolState, MapState, ResultStore, ShownResult, ToolPhase};

/// Hauptzustand des Werkzeugs
pub struct AppState {
    /// Zuletzt gelieferter Host-Schnappschuss
    pub host: HostSnapshot,
    /// Ergebniszustand (aktuell, vorherig, pending)
    pub results: ResultStore,
    /// Marker, Hervorhebung und Kartenmitte
    pub map: MapState,
    /// Aktivierungszustand
    pub tool: InfoToolState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Service-URL, IDs, Verhalten)
    pub options: InfoOptions,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        Self::with_options(InfoOptions::default())
    }

    /// Erstellt einen leeren App-State mit gegebenen Optionen.
    pub fn with_options(options: InfoOptions) -> Self {
        Self {
            host: HostSnapshot::default(),
            results: ResultStore::new(),
            map: MapState::new(),
            tool: InfoToolState::new(),
            command_log: CommandLog::new(),
            options,
        }
    }

    /// Aktuelle Phase, abgeleitet aus Aktivierung und Ergebniszustand.
    pub fn phase(&self) -> ToolPhase {
        if !self.tool.active {
            return ToolPhase::Inactive;
        }
        if self.results.is_pending() {
            return ToolPhase::Pending;
        }
        match self.results.current() {
            None => ToolPhase::AwaitingClick,
            Some(result) if result.is_empty() => ToolPhase::Shown(ShownResult::Empty),
            Some(_) => ToolPhase::Shown(ShownResult::NonEmpty),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
