use crate::core::IdentifyResult;

/// Ergebniszustand des Werkzeugs: aktuelles, vorheriges Ergebnis und Pending-Flag.
///
/// Während einer Abfrage ist `current` der leere Platzhalter; "wird
/// abgefragt" und "kein Treffer" unterscheiden sich nur über `pending`.
/// `previous` hält höchstens ein Ergebnis für genau einen Zurück-Schritt.
///
/// Jede Operation, die eine Abfrage startet, ein Ergebnis wiederherstellt
/// oder den Zustand leert, erhöht die Generation. Antworten tragen die
/// Generation ihres Absendezeitpunkts und sind danach als veraltet erkennbar.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultStore {
    current: Option<IdentifyResult>,
    previous: Option<IdentifyResult>,
    pending: bool,
    generation: u64,
}

impl ResultStore {
    /// Erstellt einen leeren Ergebniszustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Startet eine Koordinaten-Abfrage (ohne Zurück-Navigation).
    /// Gibt die Generation der neuen Abfrage zurück.
    pub fn begin_query(&mut self) -> u64 {
        self.current = Some(IdentifyResult::empty());
        self.previous = None;
        self.pending = true;
        self.bump()
    }

    /// Startet eine Feature-Link-Abfrage; das aktuelle Ergebnis wird zum vorherigen.
    /// Gibt die Generation der neuen Abfrage zurück.
    pub fn begin_feature_lookup(&mut self) -> u64 {
        self.previous = self.current.take();
        self.current = Some(IdentifyResult::empty());
        self.pending = true;
        self.bump()
    }

    /// Übernimmt das Ergebnis einer Abfrage. `previous` bleibt unverändert.
    pub fn resolve(&mut self, result: IdentifyResult) {
        self.current = Some(result);
        self.pending = false;
    }

    /// Beendet eine fehlgeschlagene Abfrage; `current` bleibt (meist der leere Platzhalter).
    pub fn resolve_empty(&mut self) {
        self.pending = false;
    }

    /// Stellt das vorherige Ergebnis wieder her und leert `previous`.
    ///
    /// Eine noch laufende Abfrage wird damit überholt (Pending endet).
    /// Ohne vorheriges Ergebnis passiert nichts und `None` wird geliefert.
    pub fn restore_previous(&mut self) -> Option<&IdentifyResult> {
        let previous = self.previous.take()?;
        self.current = Some(previous);
        self.pending = false;
        self.bump();
        self.current.as_ref()
    }

    /// Setzt alle Felder auf den Anfangszustand zurück.
    pub fn clear(&mut self) {
        self.current = None;
        self.previous = None;
        self.pending = false;
        self.bump();
    }

    /// Aktuelles Ergebnis (`None` = nichts abgefragt).
    pub fn current(&self) -> Option<&IdentifyResult> {
        self.current.as_ref()
    }

    /// Vorheriges Ergebnis für den Zurück-Schritt.
    pub fn previous(&self) -> Option<&IdentifyResult> {
        self.previous.as_ref()
    }

    /// Gibt `true` zurück, solange eine Abfrage aussteht.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Gibt `true` zurück, wenn ein nicht-leeres vorheriges Ergebnis existiert.
    pub fn can_go_back(&self) -> bool {
        self.previous.as_ref().is_some_and(|r| !r.is_empty())
    }

    /// Aktuelle Generation.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn bump(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }
}
