/// Anzeigezustand eines vorliegenden Ergebnisses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShownResult {
    /// Abgefragt, kein Treffer
    Empty,
    NonEmpty,
}

/// Phase des Info-Werkzeugs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolPhase {
    Inactive,
    AwaitingClick,
    Pending,
    Shown(ShownResult),
}

/// Aktivierungszustand des Werkzeugs.
#[derive(Debug, Clone, Default)]
pub struct InfoToolState {
    /// Werkzeug ist im Host aktiv (Task oder Identify-Werkzeug)
    pub active: bool,
}

impl InfoToolState {
    /// Erstellt den inaktiven Werkzeugzustand.
    pub fn new() -> Self {
        Self { active: false }
    }
}
