use glam::DVec2;

use crate::app::state::HostSnapshot;
use crate::lookup::LookupCompletion;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Host-Schnappschuss übernehmen
    StoreHostSnapshot { snapshot: HostSnapshot },
    /// Werkzeug aktivieren (wartet auf Klick)
    ActivateTool,
    /// Werkzeug verlassen: Marker, Hervorhebung und Ergebnisse entfernen
    DeactivateTool,
    /// Werkzeug schließen: wie Deaktivieren, zusätzlich Selektionsfilter zurücksetzen
    CloseTool,
    /// Ergebnisse und Karten-Effekte entfernen, Werkzeug bleibt aktiv
    ClearResults,
    /// Abfrage am Klickpunkt starten
    QueryCoordinate { coordinate: DVec2 },
    /// Feature über ID und Tabelle abfragen
    LookupFeature { id: String, table_name: String },
    /// Abgeschlossene Anfrage auf den Ergebniszustand anwenden
    ApplyLookupCompletion { completion: LookupCompletion },
    /// Vorheriges Ergebnis wiederherstellen
    RestorePreviousResult,
}
