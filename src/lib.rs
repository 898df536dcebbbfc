//! Giswater Info Library.
//! Identify-Werkzeug als Library exportiert für Host-Integration, Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod lookup;
pub mod shared;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, HostSnapshot, InfoPanel, MapEffect,
    ShownResult, ToolPhase,
};
pub use core::{
    center_of, parse_wkt, ClickEvent, FormAction, Geometry, GeometryKind, IdentifiedFeature,
    IdentifyResult, MapLayer, MapMarker, MapProjection, VectorLayer,
};
pub use lookup::{HttpLookupClient, LookupClient, LookupCompletion, LookupError};
pub use shared::{InfoOptions, StaleResponsePolicy};
