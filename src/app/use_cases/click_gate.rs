//! Entscheidet, ob ein Kartenklick eine Identify-Abfrage auslöst.

use std::sync::Arc;

use glam::DVec2;

use crate::core::click::{PRIMARY_BUTTON, SEARCH_MARKER, STARTUP_POSITION_MARKER};
use crate::core::{ClickEvent, GeometryKind};

/// Abfragepunkt eines Klicks oder `None`, wenn der Klick keine Abfrage auslöst.
///
/// Regeln in dieser Reihenfolge:
/// 1. nur die primäre Maustaste
/// 2. nicht derselbe Klick wie zuvor (gleiches `Arc`)
/// 3. kein Treffer auf den Startpositions-Marker
/// 4. kein Klick auf einen Such-Marker mit Punkt-Geometrie
///
/// Wird bei jedem Host-Update neu ausgewertet, nie zwischengespeichert.
pub fn evaluate(
    click: Option<&Arc<ClickEvent>>,
    previous: Option<&Arc<ClickEvent>>,
) -> Option<DVec2> {
    let click = click?;
    if click.button != PRIMARY_BUTTON {
        return None;
    }
    if previous.is_some_and(|prev| Arc::ptr_eq(click, prev)) {
        return None;
    }
    if click.hits_feature(STARTUP_POSITION_MARKER) {
        return None;
    }
    if is_search_marker_pin(click) {
        return None;
    }
    Some(click.coordinate)
}

fn is_search_marker_pin(click: &ClickEvent) -> bool {
    click.feature.as_deref() == Some(SEARCH_MARKER)
        && click.geometry.is_some()
        && click.geometry_type.as_deref() == Some(GeometryKind::Point.name())
}
