//! Kartenprojektion (CRS-Kennung im Format `AUTH:CODE`).

use serde::{Deserialize, Serialize};

/// CRS-Kennung der aktiven Kartenprojektion, z.B. `EPSG:25831`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MapProjection(String);

impl MapProjection {
    /// Erstellt eine Projektion aus ihrer Kennung.
    pub fn new(crs: impl Into<String>) -> Self {
        Self(crs.into())
    }

    /// Vollständige Kennung, z.B. `EPSG:25831`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numerischer Code nach dem letzten `:` (`EPSG:25831` → `25831`).
    ///
    /// Führende Ziffern werden wie bei `parseInt` gelesen, nachfolgende
    /// Zeichen ignoriert. `None`, wenn keine Ziffer am Anfang steht.
    pub fn code(&self) -> Option<u32> {
        let last = self.0.rsplit(':').next()?.trim();
        let digits: String = last.chars().take_while(|c| c.is_ascii_digit()).collect();
        digits.parse().ok()
    }
}

impl Default for MapProjection {
    fn default() -> Self {
        Self::new("EPSG:3857")
    }
}

impl std::fmt::Display for MapProjection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
