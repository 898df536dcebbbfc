//! Core-Domänentypen: Klicks, Geometrien, Layer, Marker, Service-Ergebnisse.

pub mod click;
pub mod form_action;
/// Vektor-Geometrien und repräsentative Punkte
///
/// - Geometry: Tagged-Variante je Geometrieart
/// - center_of: Marker-/Pan-Punkt je Geometrieart
pub mod geometry;
pub mod identify_result;
pub mod layer;
pub mod map_marker;
pub mod projection;
pub mod wkt;

pub use click::{ClickEvent, ClickModifiers, HitFeature};
pub use form_action::{FeatureLinkTarget, FormAction, FEATURE_LINK_ACTION};
pub use geometry::{center_of, Extent, Geometry, GeometryKind};
pub use identify_result::{IdentifiedFeature, IdentifyResult};
pub use layer::{query_layers_for_service, LayerRole, MapLayer, VectorFeature, VectorLayer};
pub use map_marker::MapMarker;
pub use projection::MapProjection;
pub use wkt::{parse_wkt, WktError};
