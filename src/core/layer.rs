//! Karten-Layer: Layer des Host-Viewers und vom Werkzeug erzeugte Vektor-Layer.

use serde::Serialize;

use super::geometry::Geometry;
use super::projection::MapProjection;

/// Rolle eines Layers im Host-Viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerRole {
    Background,
    #[default]
    Theme,
    User,
    /// Auswahl-/Hervorhebungs-Layer (oberhalb aller Themen gezeichnet)
    Selection,
    Marker,
}

/// Aktiver Layer des Host-Viewers.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MapLayer {
    /// Layer-ID im Host
    pub id: String,
    /// Service-URL des Layers (z.B. QGIS-Server-Endpunkt)
    pub url: String,
    pub role: LayerRole,
    pub visible: bool,
    /// Namen der abfragbaren, sichtbaren Sublayer
    pub query_layers: Vec<String>,
}

impl MapLayer {
    /// Gibt `true` zurück, wenn der Layer für Identify-Abfragen in Frage kommt.
    pub fn is_queryable(&self) -> bool {
        self.visible && self.role == LayerRole::Theme && !self.query_layers.is_empty()
    }
}

/// Feature eines Vektor-Layers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VectorFeature {
    pub id: String,
    pub geometry: Geometry,
}

/// Vom Werkzeug erzeugter Vektor-Layer (z.B. Hervorhebung des Treffers).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VectorLayer {
    pub id: String,
    pub role: LayerRole,
    /// Projektion, in der die Feature-Geometrien vorliegen
    pub crs: MapProjection,
    pub features: Vec<VectorFeature>,
}

/// Liefert alle abfragbaren Layer, deren Service-URL exakt `service_url` entspricht.
pub fn query_layers_for_service<'a>(layers: &'a [MapLayer], service_url: &str) -> Vec<&'a MapLayer> {
    layers
        .iter()
        .filter(|layer| layer.is_queryable() && layer.url == service_url)
        .collect()
}
