//! Theme catalog loading and lookup.

use std::{collections::BTreeSet, sync::OnceLock};

use thiserror::Error;

use crate::model::{Theme, ThemeId};

include!(concat!(env!("OUT_DIR"), "/theme_catalog_generated.rs"));

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Errors raised while building a [`ThemeRegistry`].
pub enum ThemeCatalogError {
    /// The catalog payload was not a valid theme list.
    #[error("invalid theme catalog: {0}")]
    Parse(String),
    /// Two themes share one id.
    #[error("duplicate theme id `{0}`")]
    DuplicateId(ThemeId),
}

/// Returns the generated built-in theme catalog JSON payload.
pub fn builtin_theme_catalog_json() -> &'static str {
    BUILTIN_THEME_CATALOG_JSON
}

/// Returns the built-in themes in catalog order.
pub fn builtin_themes() -> &'static [Theme] {
    static CATALOG: OnceLock<Vec<Theme>> = OnceLock::new();
    CATALOG.get_or_init(|| {
        serde_json::from_str(BUILTIN_THEME_CATALOG_JSON)
            .expect("generated built-in theme catalog should parse")
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Ordered, read-only theme catalog with lookup by id.
pub struct ThemeRegistry {
    themes: Vec<Theme>,
}

impl ThemeRegistry {
    /// Builds a registry, rejecting duplicate ids.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeCatalogError::DuplicateId`] when two entries share an id.
    pub fn new(themes: Vec<Theme>) -> Result<Self, ThemeCatalogError> {
        let mut seen = BTreeSet::new();
        for theme in &themes {
            if !seen.insert(&theme.id) {
                return Err(ThemeCatalogError::DuplicateId(theme.id.clone()));
            }
        }
        Ok(Self { themes })
    }

    /// Parses a JSON array of themes.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeCatalogError::Parse`] for malformed payloads and
    /// [`ThemeCatalogError::DuplicateId`] for repeated ids.
    pub fn from_json_str(raw: &str) -> Result<Self, ThemeCatalogError> {
        let themes: Vec<Theme> =
            serde_json::from_str(raw).map_err(|err| ThemeCatalogError::Parse(err.to_string()))?;
        Self::new(themes)
    }

    /// Registry over the built-in catalog.
    pub fn builtin() -> Self {
        Self {
            themes: builtin_themes().to_vec(),
        }
    }

    /// Looks up a theme by id.
    pub fn get(&self, id: &ThemeId) -> Option<&Theme> {
        self.themes.iter().find(|theme| &theme.id == id)
    }

    /// Themes in catalog order.
    pub fn themes(&self) -> &[Theme] {
        &self.themes
    }

    /// Consumes the registry, yielding the ordered theme list.
    pub fn into_themes(self) -> Vec<Theme> {
        self.themes
    }

    /// Number of themes in the catalog.
    pub fn len(&self) -> usize {
        self.themes.len()
    }

    /// Returns whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }
}
