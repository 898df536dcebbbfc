//! Antwort des Info-Service.

use serde::{Deserialize, Deserializer, Serialize};

/// Vom Info-Service gefundenes Feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentifiedFeature {
    /// Feature-ID (der Service liefert sie teils als Zahl)
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    /// Geometrie als WKT in der Projektion der Anfrage
    pub geometry: String,
    /// Quelltabelle des Features
    #[serde(rename = "tableName")]
    pub table_name: String,
}

/// Ergebnis einer Identify-Abfrage.
///
/// Ein leeres Objekt `{}` bedeutet "abgefragt, kein Treffer".
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IdentifyResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature: Option<IdentifiedFeature>,
    /// Formular-Definition für den dynamischen Formular-Renderer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub form_xml: Option<String>,
}

impl IdentifyResult {
    /// Leeres Ergebnis (Platzhalter während einer Abfrage bzw. "kein Treffer").
    pub fn empty() -> Self {
        Self::default()
    }

    /// Gibt `true` zurück, wenn das Ergebnis keinen Inhalt hat.
    pub fn is_empty(&self) -> bool {
        self.feature.is_none() && self.form_xml.is_none()
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Int(i) => i.to_string(),
        Raw::Float(f) => f.to_string(),
    })
}
