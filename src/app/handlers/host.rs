//! Handler für Host-Zustandsänderungen.

use crate::app::state::HostSnapshot;
use crate::app::AppState;

/// Übernimmt einen neuen Host-Schnappschuss.
pub fn store_snapshot(state: &mut AppState, snapshot: HostSnapshot) {
    log::trace!(
        "Host-Update: Task {:?}, Identify-Werkzeug {:?}, {} Layer",
        snapshot.current_task,
        snapshot.current_identify_tool,
        snapshot.layers.len()
    );
    state.host = snapshot;
}
