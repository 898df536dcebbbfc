use crate::app::state::HostSnapshot;
use crate::core::FormAction;
use crate::lookup::LookupCompletion;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus Host/Formular/Transport ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Host hat einen neuen Zustand geliefert (Klick, Task, Layer, Zoom)
    HostUpdated { snapshot: HostSnapshot },
    /// Formular-Button ausgelöst (z.B. `featureLink`)
    FormActionDispatched { action: FormAction },
    /// "Zurück" im Ergebnisfenster
    BackRequested,
    /// Ergebnisfenster geschlossen
    ResultWindowClosed,
    /// Task-Leiste des Werkzeugs geschlossen
    ToolCloseRequested,
    /// Service-Anfrage abgeschlossen
    LookupCompleted { completion: LookupCompletion },
}
