//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Werkzeug-Konfiguration, die von `app` und `lookup`
//! gleichermaßen gelesen wird.

pub mod options;

pub use options::{InfoOptions, StaleResponsePolicy};
pub use options::{HIGHLIGHT_LAYER_ID, MARKER_ID, QUERY_SERVICE_URL, SEARCH_LAYER_ID, TOOL_ID};
