//! Klick-Ereignisse des Host-Viewers.

use glam::DVec2;

/// Primäre Maustaste (einziger Button, der eine Abfrage auslöst).
pub const PRIMARY_BUTTON: u8 = 0;

/// Feature-Tag des Startpositions-Markers.
pub const STARTUP_POSITION_MARKER: &str = "startupposmarker";
/// Feature-Tag des Suchergebnis-Markers.
pub const SEARCH_MARKER: &str = "searchmarker";

/// Vom Klick getroffenes Feature.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HitFeature {
    /// Feature-Tag (z.B. `startupposmarker`)
    pub feature: String,
    /// Layer, zu dem das Feature gehört
    pub layer: Option<String>,
}

/// Gedrückte Modifier-Tasten beim Klick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClickModifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

/// Klick auf die Karte, wie ihn der Host liefert.
///
/// Der Host teilt Klicks als `Arc<ClickEvent>`; ein erneut gelieferter
/// Klick ist dasselbe `Arc` und wird über `Arc::ptr_eq` erkannt.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClickEvent {
    /// Maustaste (0 = primär)
    pub button: u8,
    /// Klickpunkt in Kartenkoordinaten
    pub coordinate: DVec2,
    /// Tag des direkt angeklickten Features (z.B. `searchmarker`)
    pub feature: Option<String>,
    /// Geometrieart des angeklickten Features (z.B. `Point`)
    pub geometry_type: Option<String>,
    /// Geometrie des angeklickten Features (Kartenkoordinaten)
    pub geometry: Option<DVec2>,
    /// Alle vom Klick getroffenen Features
    pub features: Vec<HitFeature>,
    pub modifiers: ClickModifiers,
}

impl ClickEvent {
    /// Primärklick ohne getroffene Features.
    pub fn primary(coordinate: DVec2) -> Self {
        Self {
            button: PRIMARY_BUTTON,
            coordinate,
            ..Self::default()
        }
    }

    /// Gibt `true` zurück, wenn ein getroffenes Feature das Tag trägt.
    pub fn hits_feature(&self, tag: &str) -> bool {
        self.features.iter().any(|f| f.feature == tag)
    }
}
