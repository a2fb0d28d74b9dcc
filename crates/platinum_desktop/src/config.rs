//! Session configuration for the initial desktop value.

use platinum_theme::ThemeId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{AppInstance, AppInstanceId, MenuItem};

/// Asset base path baked in at compile time (`PLATINUM_BASE_PATH`), empty when unset.
pub const BUILD_BASE_PATH: &str = match option_env!("PLATINUM_BASE_PATH") {
    Some(path) => path,
    None => "",
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Errors raised while loading a [`DesktopConfig`].
pub enum ConfigError {
    /// The payload was not valid configuration JSON.
    #[error("invalid desktop config: {0}")]
    Parse(String),
    /// The foreground app is not one of the initially open apps.
    #[error("active app `{0}` is not among the initial open apps")]
    UnknownActiveApp(AppInstanceId),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
/// Initial desktop contents plus provider boot options.
pub struct DesktopConfig {
    /// Theme selected at mount.
    pub default_theme: ThemeId,
    /// Foreground application at mount.
    pub active_app: AppInstanceId,
    /// Global system menu; fixed for the session.
    pub system_menu: Vec<MenuItem>,
    /// Applications running at mount.
    pub open_apps: Vec<AppInstance>,
    /// Prefix for root-relative asset references.
    pub base_path: String,
    /// Whether the provider loads the built-in theme catalog at mount.
    pub load_builtin_themes: bool,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        let base_path = BUILD_BASE_PATH.trim_end_matches('/').to_string();
        Self {
            default_theme: ThemeId::default(),
            active_app: AppInstanceId::from("finder.app"),
            system_menu: vec![
                MenuItem::new("about", "About This Computer").with_shortcut("⌘S"),
                MenuItem::spacer(),
            ],
            open_apps: vec![AppInstance::new("finder.app", "Finder")
                .with_icon(format!("{base_path}/img/macos.svg"))],
            base_path,
            load_builtin_themes: true,
        }
    }
}

impl DesktopConfig {
    /// Parses a configuration object; omitted fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed or non-object JSON and
    /// [`ConfigError::UnknownActiveApp`] when `activeApp` names an app that is not initially open.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let value: serde_json::Value =
            serde_json::from_str(raw).map_err(|err| ConfigError::Parse(err.to_string()))?;
        if !value.is_object() {
            return Err(ConfigError::Parse("expected a JSON object".to_string()));
        }
        let config: Self =
            serde_json::from_value(value).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks cross-field consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownActiveApp`] when the foreground app is not open.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.open_apps.iter().any(|app| app.id == self.active_app) {
            Ok(())
        } else {
            Err(ConfigError::UnknownActiveApp(self.active_app.clone()))
        }
    }

    /// Prefixes a root-relative asset reference with the base path.
    pub fn asset_url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.base_path)
        } else {
            path.to_string()
        }
    }
}
