use crate::core::{ClickEvent, MapLayer, MapProjection};
use std::sync::Arc;

/// Unveränderlicher Schnappschuss des Host-Zustands.
///
/// Der Host liefert bei jeder Änderung einen neuen Schnappschuss; der
/// vorherige bleibt im `AppState` erhalten, um Übergänge (Werkzeugwechsel,
/// neuer Klick) zu erkennen.
#[derive(Debug, Clone, Default)]
pub struct HostSnapshot {
    /// Letzter Kartenklick (gleiches `Arc` = derselbe Klick)
    pub click: Option<Arc<ClickEvent>>,
    /// Aktiver Task des Hosts
    pub current_task: Option<String>,
    /// Aktives Identify-Werkzeug des Hosts
    pub current_identify_tool: Option<String>,
    /// Aktive Kartenprojektion
    pub projection: MapProjection,
    /// Maßstabszahlen je Zoomstufe
    pub scales: Vec<f64>,
    /// Aktuelle (ggf. gebrochene) Zoomstufe
    pub zoom: f64,
    /// Aktive Layer in Host-Reihenfolge
    pub layers: Vec<MapLayer>,
}

impl HostSnapshot {
    /// Gibt `true` zurück, wenn Task oder Identify-Werkzeug auf `tool_id` stehen.
    pub fn activates(&self, tool_id: &str) -> bool {
        self.task_is(tool_id) || self.identify_tool_is(tool_id)
    }

    /// Gibt `true` zurück, wenn der aktive Task `tool_id` ist.
    pub fn task_is(&self, tool_id: &str) -> bool {
        self.current_task.as_deref() == Some(tool_id)
    }

    /// Gibt `true` zurück, wenn das aktive Identify-Werkzeug `tool_id` ist.
    pub fn identify_tool_is(&self, tool_id: &str) -> bool {
        self.current_identify_tool.as_deref() == Some(tool_id)
    }

    /// Maßstabszahl der aktuellen Zoomstufe.
    pub fn zoom_ratio(&self) -> Option<f64> {
        compute_for_zoom(&self.scales, self.zoom)
    }
}

/// Interpoliert linear in einer Werteliste je Zoomstufe.
///
/// Zoomstufen unterhalb 0 liefern den ersten, oberhalb der Liste den
/// letzten Wert. `None` bei leerer Liste oder ungültigem Zoom.
pub fn compute_for_zoom(list: &[f64], zoom: f64) -> Option<f64> {
    let (&first, &last) = (list.first()?, list.last()?);
    if !zoom.is_finite() {
        return None;
    }
    if zoom <= 0.0 {
        return Some(first);
    }

    let index = zoom.floor() as usize;
    if index >= list.len() - 1 {
        return Some(last);
    }
    let frac = zoom - zoom.floor();
    Some(list[index] + (list[index + 1] - list[index]) * frac)
}
