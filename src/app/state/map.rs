use crate::core::{MapMarker, MapProjection, VectorLayer};
use glam::DVec2;
use indexmap::IndexMap;
use serde::Serialize;

/// Nachricht an den Host, wie er seine Karte anpassen soll.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum MapEffect {
    /// Marker setzen oder gleichnamigen ersetzen
    AddMarker(MapMarker),
    RemoveMarker { id: String },
    /// Layer setzen oder gleichnamigen ersetzen
    AddLayerFeatures(VectorLayer),
    RemoveLayer { id: String },
    /// Kartenmitte verschieben, Zoom bleibt
    PanTo { center: DVec2, crs: MapProjection },
    /// Geometrieart-Filter der Host-Selektion zurücksetzen
    ResetSelectionGeometryType,
}

/// Vom Werkzeug verwaltete Kartenobjekte und ausstehende Host-Nachrichten.
///
/// Spiegelt den angewendeten Zustand (Marker, Layer, Kartenmitte) und
/// sammelt jede Änderung zusätzlich als [`MapEffect`] in der Outbox, die
/// der Host mit [`MapState::drain_effects`] abholt. Alle Operationen sind
/// idempotent.
///
/// Die Outbox ist unbegrenzt: Der Host muss sie nach jedem
/// `AppController::handle_intent` bzw. `poll_lookups` leeren, sonst wächst
/// sie um jede Kartenänderung. Nachrichten werden nie verworfen.
#[derive(Debug, Clone, Default)]
pub struct MapState {
    /// Gesetzte Marker nach ID
    pub markers: IndexMap<String, MapMarker>,
    /// Gesetzte Vektor-Layer nach ID
    pub layers: IndexMap<String, VectorLayer>,
    /// Zuletzt angeforderte Kartenmitte
    pub center: Option<DVec2>,
    /// Geometrieart-Filter der Host-Selektion (z.B. `Point`)
    pub selection_geometry_type: Option<String>,
    outbox: Vec<MapEffect>,
}

impl MapState {
    /// Erstellt einen leeren Kartenzustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Setzt einen Marker (ersetzt einen gleichnamigen).
    pub fn add_marker(&mut self, marker: MapMarker) {
        self.markers.insert(marker.id.clone(), marker.clone());
        self.outbox.push(MapEffect::AddMarker(marker));
    }

    /// Entfernt einen Marker.
    pub fn remove_marker(&mut self, id: &str) {
        self.markers.shift_remove(id);
        self.outbox.push(MapEffect::RemoveMarker { id: id.to_string() });
    }

    /// Setzt einen Vektor-Layer (ersetzt einen gleichnamigen).
    pub fn replace_layer(&mut self, layer: VectorLayer) {
        self.layers.insert(layer.id.clone(), layer.clone());
        self.outbox.push(MapEffect::AddLayerFeatures(layer));
    }

    /// Entfernt einen Layer.
    pub fn remove_layer(&mut self, id: &str) {
        self.layers.shift_remove(id);
        self.outbox.push(MapEffect::RemoveLayer { id: id.to_string() });
    }

    /// Verschiebt die Kartenmitte.
    pub fn pan_to(&mut self, center: DVec2, crs: MapProjection) {
        self.center = Some(center);
        self.outbox.push(MapEffect::PanTo { center, crs });
    }

    /// Setzt den Geometrieart-Filter der Selektion zurück.
    pub fn reset_selection_geometry_type(&mut self) {
        self.selection_geometry_type = None;
        self.outbox.push(MapEffect::ResetSelectionGeometryType);
    }

    /// Noch nicht abgeholte Host-Nachrichten.
    pub fn pending_effects(&self) -> &[MapEffect] {
        &self.outbox
    }

    /// Holt alle ausstehenden Host-Nachrichten ab.
    pub fn drain_effects(&mut self) -> Vec<MapEffect> {
        std::mem::take(&mut self.outbox)
    }
}
