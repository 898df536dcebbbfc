//! Zentrale Konfiguration für das Giswater-Info-Werkzeug.
//!
//! `InfoOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Werkzeug ────────────────────────────────────────────────────────

/// Task-/Identify-Tool-ID, unter der der Host das Werkzeug aktiviert.
pub const TOOL_ID: &str = "GwInfo";
/// Name des Identify-Markers.
pub const MARKER_ID: &str = "identify";
/// ID des Hervorhebungs-Layers für den Treffer.
pub const HIGHLIGHT_LAYER_ID: &str = "identifyselection";
/// ID des Auswahl-Layers der Suche (wird bei neuer Abfrage entfernt).
pub const SEARCH_LAYER_ID: &str = "searchselection";

// ── Service ─────────────────────────────────────────────────────────

/// Endpunkt, dessen Layer für Kartenklick-Abfragen verwendet werden.
pub const QUERY_SERVICE_URL: &str = "http://qwc2.bgeo.es/ogc/qgisserver";
/// Timeout für einzelne Service-Anfragen in Sekunden.
pub const REQUEST_TIMEOUT_SECS: u64 = 30;
/// Umgebungsvariable, die `service_url` überschreibt.
pub const SERVICE_URL_ENV: &str = "GW_INFO_SERVICE_URL";

/// Umgang mit Antworten, die nach einer neueren Abfrage eintreffen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaleResponsePolicy {
    /// Antworten veralteter Abfragen verwerfen
    #[default]
    Discard,
    /// Jede Antwort übernehmen; die zuletzt eintreffende gewinnt
    LastWins,
}

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Werkzeug-Optionen.
/// Wird als `gw_info.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InfoOptions {
    // ── Service ─────────────────────────────────────────────────
    /// Basis-URL des Info-Service (`gwInfoServiceUrl`); ohne sie bleibt das Werkzeug inaktiv
    #[serde(default)]
    pub service_url: Option<String>,
    /// Service-URL, die ein abfragbarer Layer exakt haben muss
    #[serde(default = "default_query_service_url")]
    pub query_service_url: String,
    /// Timeout je Anfrage in Sekunden
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Verhalten bei verspäteten Antworten
    #[serde(default)]
    pub stale_responses: StaleResponsePolicy,

    // ── IDs im Host ─────────────────────────────────────────────
    /// Task-/Identify-Tool-ID dieses Werkzeugs
    pub tool_id: String,
    /// Name des Identify-Markers
    pub marker_id: String,
    /// ID des Hervorhebungs-Layers
    pub highlight_layer_id: String,
    /// ID des Such-Auswahl-Layers
    pub search_layer_id: String,
}

impl Default for InfoOptions {
    fn default() -> Self {
        Self {
            service_url: None,
            query_service_url: QUERY_SERVICE_URL.to_string(),
            request_timeout_secs: REQUEST_TIMEOUT_SECS,
            stale_responses: StaleResponsePolicy::Discard,

            tool_id: TOOL_ID.to_string(),
            marker_id: MARKER_ID.to_string(),
            highlight_layer_id: HIGHLIGHT_LAYER_ID.to_string(),
            search_layer_id: SEARCH_LAYER_ID.to_string(),
        }
    }
}

/// Serde-Default für `query_service_url`.
fn default_query_service_url() -> String {
    QUERY_SERVICE_URL.to_string()
}

/// Serde-Default für `request_timeout_secs`.
fn default_request_timeout_secs() -> u64 {
    REQUEST_TIMEOUT_SECS
}

impl InfoOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler → Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("gw-info"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("gw_info.toml")
    }

    /// Übernimmt `GW_INFO_SERVICE_URL`, falls gesetzt und nicht leer.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var(SERVICE_URL_ENV) {
            if !url.trim().is_empty() {
                log::info!("Service-URL aus {} übernommen", SERVICE_URL_ENV);
                self.service_url = Some(url);
            }
        }
        self
    }

    /// Basis-URL des Info-Service; `None` wenn nicht konfiguriert oder leer.
    pub fn service_url(&self) -> Option<&str> {
        self.service_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}
