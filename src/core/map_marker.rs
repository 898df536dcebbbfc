use serde::Serialize;

/// Benannter Marker auf der Karte (z.B. der `identify`-Marker).
/// Ein Marker mit gleicher ID ersetzt den bestehenden.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
    /// Marker-ID
    pub id: String,
    /// Position in Kartenkoordinaten
    pub position: glam::DVec2,
    /// Beschriftung (leer = keine)
    pub label: String,
    /// Projektion der Position
    pub crs: super::MapProjection,
}

impl MapMarker {
    /// Erstellt einen neuen Map-Marker
    pub fn new(
        id: impl Into<String>,
        position: glam::DVec2,
        label: impl Into<String>,
        crs: super::MapProjection,
    ) -> Self {
        Self {
            id: id.into(),
            position,
            label: label.into(),
            crs,
        }
    }
}
