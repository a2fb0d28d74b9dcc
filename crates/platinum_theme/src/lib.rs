//! Theme catalog for the Platinum desktop.
//!
//! Themes are plain data: palette, typography, window measurements, desktop background and the
//! sound-theme definition. The built-in catalog is assembled from `themes/*.toml` at build time;
//! additional catalogs can be parsed from JSON with [`ThemeRegistry::from_json_str`].

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod model;
pub mod registry;

pub use model::{
    Theme, ThemeColorPalette, ThemeColors, ThemeDesktop, ThemeId, ThemeMeasurements,
    ThemeSound, ThemeTypography, ThemeWindowColors, ThemeWindowMeasurements, DEFAULT_THEME_ID,
};
pub use registry::{builtin_theme_catalog_json, builtin_themes, ThemeCatalogError, ThemeRegistry};
