//! Abfragen gegen den Info-Service.
//!
//! Anfragen laufen nebenläufig zur Host-Event-Loop; ihre Ergebnisse werden
//! als [`LookupCompletion`] abgeholt und dort auf den Zustand angewendet.

mod http;
mod request;

pub use http::HttpLookupClient;
pub use request::LookupRequest;

use glam::DVec2;
use thiserror::Error;
use url::Url;

use crate::core::IdentifyResult;

/// Fehler einer Service-Anfrage.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LookupError {
    #[error("ungültige Service-URL: {0}")]
    InvalidUrl(String),
    #[error("Netzwerkfehler: {0}")]
    Network(String),
    #[error("Service antwortete mit HTTP {0}")]
    Status(u16),
    #[error("Antwort nicht lesbar: {0}")]
    Decode(String),
    #[error("Lookup-Client nicht verfügbar: {0}")]
    Unavailable(String),
}

/// Art der Abfrage (für Logging und Diagnose).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupKind {
    ByCoordinate,
    ById,
}

/// Kennzeichnet eine Anfrage mit der Ergebnis-Generation zum Zeitpunkt des Absendens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupTicket {
    pub generation: u64,
    pub kind: LookupKind,
}

/// Abgeschlossene Anfrage.
#[derive(Debug, Clone, PartialEq)]
pub struct LookupCompletion {
    pub ticket: LookupTicket,
    pub outcome: Result<IdentifyResult, LookupError>,
}

/// Transport für Service-Anfragen.
///
/// `submit` darf nicht blockieren; Ergebnisse werden über `poll_completed`
/// in der Host-Event-Loop abgeholt. Ausstehende Anfragen werden nie
/// abgebrochen.
pub trait LookupClient {
    /// Startet eine Anfrage.
    fn submit(&mut self, ticket: LookupTicket, request: &LookupRequest, url: Url);

    /// Liefert alle seit dem letzten Aufruf abgeschlossenen Anfragen.
    fn poll_completed(&mut self) -> Vec<LookupCompletion>;

    /// Startet eine `fromcoordinates`-Abfrage.
    fn by_coordinate(
        &mut self,
        ticket: LookupTicket,
        base_url: &str,
        coordinate: DVec2,
        epsg: u32,
        zoom_ratio: f64,
        layers: Vec<String>,
    ) -> Result<(), LookupError> {
        let request = LookupRequest::ByCoordinate {
            epsg,
            coordinate,
            zoom_ratio,
            layers,
        };
        let url = request.url(base_url)?;
        self.submit(ticket, &request, url);
        Ok(())
    }

    /// Startet eine `fromid`-Abfrage.
    fn by_id(
        &mut self,
        ticket: LookupTicket,
        base_url: &str,
        id: &str,
        table_name: &str,
    ) -> Result<(), LookupError> {
        let request = LookupRequest::ById {
            id: id.to_string(),
            table_name: table_name.to_string(),
        };
        let url = request.url(base_url)?;
        self.submit(ticket, &request, url);
        Ok(())
    }
}
