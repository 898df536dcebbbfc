//! Die zwei Abfrageformen des Info-Service und ihre URLs.

use glam::DVec2;
use url::{form_urlencoded, Url};

use super::LookupError;

/// Abfrage gegen den Info-Service.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupRequest {
    /// `fromcoordinates`: Treffer am Klickpunkt
    ByCoordinate {
        /// Numerischer EPSG-Code der Kartenprojektion
        epsg: u32,
        coordinate: DVec2,
        /// Maßstabszahl der aktuellen Zoomstufe
        zoom_ratio: f64,
        /// Abfragbare Layer-Namen in Host-Reihenfolge
        layers: Vec<String>,
    },
    /// `fromid`: Feature über ID und Tabelle (Feature-Link im Formular)
    ById { id: String, table_name: String },
}

impl LookupRequest {
    /// Endpunkt relativ zur Basis-URL.
    pub fn endpoint(&self) -> &'static str {
        match self {
            LookupRequest::ByCoordinate { .. } => "fromcoordinates",
            LookupRequest::ById { .. } => "fromid",
        }
    }

    /// Query-Parameter in Service-Reihenfolge.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        match self {
            LookupRequest::ByCoordinate {
                epsg,
                coordinate,
                zoom_ratio,
                layers,
            } => vec![
                ("epsg", epsg.to_string()),
                ("xcoord", coordinate.x.to_string()),
                ("ycoord", coordinate.y.to_string()),
                ("zoomRatio", zoom_ratio.to_string()),
                ("layers", layers.join(",")),
            ],
            LookupRequest::ById { id, table_name } => {
                vec![("id", id.clone()), ("tableName", table_name.clone())]
            }
        }
    }

    /// Vollständige Anfrage-URL: `{base}{endpoint}?{query}`.
    ///
    /// Die Basis-URL wird wie konfiguriert vorangestellt (ohne Slash-Korrektur).
    /// Kommas in Werten bleiben unkodiert, damit Layer-Listen lesbar bleiben.
    pub fn url(&self, base: &str) -> Result<Url, LookupError> {
        let raw = format!("{}{}", base, self.endpoint());
        let mut url = Url::parse(&raw).map_err(|e| LookupError::InvalidUrl(format!("{raw}: {e}")))?;

        let query = self
            .query_pairs()
            .into_iter()
            .map(|(key, value)| {
                let value: String = form_urlencoded::byte_serialize(value.as_bytes()).collect();
                format!("{}={}", key, value.replace("%2C", ","))
            })
            .collect::<Vec<_>>()
            .join("&");
        url.set_query(Some(&query));

        Ok(url)
    }
}
