//! Application State: zentrale Datenhaltung des Werkzeugs.

mod app_state;
mod host;
mod map;
mod result_store;
mod tool;

pub use app_state::AppState;
pub use host::{compute_for_zoom, HostSnapshot};
pub use map::{MapEffect, MapState};
pub use result_store::ResultStore;
pub use tool::{InfoToolState, ShownResult, ToolPhase};
