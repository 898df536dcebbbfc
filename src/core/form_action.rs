//! Aktionen, die der dynamische Formular-Renderer zurückmeldet.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Name der einzigen unterstützten Formular-Aktion.
pub const FEATURE_LINK_ACTION: &str = "featureLink";

/// Aktion eines Formular-Buttons, z.B. `featureLink` mit `{id, tableName}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormAction {
    pub name: String,
    #[serde(default)]
    pub params: Value,
}

/// Ziel eines Feature-Links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureLinkTarget {
    pub id: String,
    pub table_name: String,
}

impl FormAction {
    /// Erstellt eine `featureLink`-Aktion.
    pub fn feature_link(id: impl Into<String>, table_name: impl Into<String>) -> Self {
        Self {
            name: FEATURE_LINK_ACTION.to_string(),
            params: serde_json::json!({
                "id": id.into(),
                "tableName": table_name.into(),
            }),
        }
    }

    /// Liest das Ziel eines Feature-Links aus den Parametern.
    ///
    /// `None`, wenn die Aktion kein Feature-Link ist oder `id`/`tableName` fehlen.
    /// Numerische IDs werden als Text übernommen.
    pub fn feature_link_target(&self) -> Option<FeatureLinkTarget> {
        if self.name != FEATURE_LINK_ACTION {
            return None;
        }
        let id = match self.params.get("id")? {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            _ => return None,
        };
        let table_name = self.params.get("tableName")?.as_str()?.to_string();
        Some(FeatureLinkTarget { id, table_name })
    }
}
