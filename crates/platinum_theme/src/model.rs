//! Theme descriptor types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Theme id the desktop starts with before any catalog is loaded.
pub const DEFAULT_THEME_ID: &str = "default";

/// Seven-step numeric palette used for system and theme gradients.
pub type ThemeColorPalette = [u32; 7];

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
/// Stable theme identifier.
pub struct ThemeId(pub String);

impl ThemeId {
    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ThemeId {
    fn default() -> Self {
        Self(DEFAULT_THEME_ID.to_string())
    }
}

impl From<&str> for ThemeId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ThemeId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Window chrome colors.
pub struct ThemeWindowColors {
    /// Outer window border.
    pub border: String,
    /// Raised bevel edge.
    pub border_outset: String,
    /// Sunken bevel edge.
    pub border_inset: String,
    /// Window frame fill.
    pub frame: String,
    /// Title text.
    pub title: String,
    /// Document area background.
    pub document: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Named semantic colors plus the numeric gradient palettes.
pub struct ThemeColors {
    /// Outline color.
    pub outline: String,
    /// Selection fill.
    pub select: String,
    /// Highlight fill.
    pub highlight: String,
    /// Black.
    pub black: String,
    /// White.
    pub white: String,
    /// Alert accent.
    pub alert: String,
    /// Error accent.
    pub error: String,
    /// System grayscale gradient.
    pub system: ThemeColorPalette,
    /// Theme accent gradient.
    pub theme: ThemeColorPalette,
    /// Window chrome colors.
    pub window: ThemeWindowColors,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Font family and size pairs.
pub struct ThemeTypography {
    /// UI font family.
    pub ui: String,
    /// UI font size.
    pub ui_size: String,
    /// Header font family.
    pub header: String,
    /// Header font size.
    pub header_size: String,
    /// Body font family.
    pub body: String,
    /// Body font size.
    pub body_size: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Window chrome measurements.
pub struct ThemeWindowMeasurements {
    /// Border width.
    pub border_size: String,
    /// Title bar control size.
    pub control_size: String,
    /// Content padding.
    pub padding_size: String,
    /// Scrollbar width.
    pub scrollbar_size: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Measurement groups.
pub struct ThemeMeasurements {
    /// Window measurements.
    pub window: ThemeWindowMeasurements,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Desktop background and icon sizing.
pub struct ThemeDesktop {
    /// Desktop icon size.
    pub icon_size: String,
    /// Desktop icon label size.
    pub icon_font_size: String,
    /// Background image reference.
    pub background_image: String,
    /// Background fill color.
    pub background_color: String,
    /// CSS repeat mode.
    pub repeat: String,
    /// CSS position.
    pub position: String,
    /// CSS size.
    pub size: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Sound-theme reference and the cues it mutes.
pub struct ThemeSound {
    /// Sound-theme manifest reference handed to the sound subsystem.
    pub file: String,
    /// Cue names that must not play under this theme.
    #[serde(default)]
    pub disabled: Vec<String>,
}

impl ThemeSound {
    /// Returns whether `cue` is muted by this theme.
    pub fn is_cue_disabled(&self, cue: &str) -> bool {
        self.disabled.iter().any(|disabled| disabled == cue)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A named bundle of color, typography, measurement, background and sound settings.
pub struct Theme {
    /// Stable identifier.
    pub id: ThemeId,
    /// Display name.
    pub name: String,
    /// Palette.
    pub color: ThemeColors,
    /// Typography.
    pub typography: ThemeTypography,
    /// Measurements.
    pub measurements: ThemeMeasurements,
    /// Desktop background.
    pub desktop: ThemeDesktop,
    /// Sound definition.
    pub sound: ThemeSound,
}
