use std::fmt;

use platform_host::SoundHandle;
use platinum_theme::{Theme, ThemeId};
use serde::{Deserialize, Serialize};

use crate::config::DesktopConfig;

/// Element id of the bare desktop surface; pointer focus only starts a selection box here.
pub const DESKTOP_SURFACE_ID: &str = "platinumDesktop";

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
/// Identifier of a running application/window instance.
pub struct AppInstanceId(pub String);

impl AppInstanceId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AppInstanceId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for AppInstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
/// Identifier of a desktop icon.
pub struct IconId(pub String);

impl IconId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for IconId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Menu entry; menus nest through `menu_children`.
pub struct MenuItem {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyboard_shortcut: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub disabled: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub menu_children: Vec<MenuItem>,
}

impl MenuItem {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Separator row.
    pub fn spacer() -> Self {
        Self {
            id: "spacer".to_string(),
            ..Self::default()
        }
    }

    pub fn with_shortcut(mut self, shortcut: impl Into<String>) -> Self {
        self.keyboard_shortcut = Some(shortcut.into());
        self
    }

    pub fn with_children(mut self, children: Vec<MenuItem>) -> Self {
        self.menu_children = children;
        self
    }

    pub fn is_spacer(&self) -> bool {
        self.title.is_none() && self.menu_children.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// A running application/window: identity plus the menu it contributes to the menu bar.
pub struct AppInstance {
    pub id: AppInstanceId,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub app_menu: Vec<MenuItem>,
}

impl AppInstance {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: AppInstanceId(id.into()),
            name: name.into(),
            icon: None,
            app_menu: Vec::new(),
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_menu(mut self, app_menu: Vec<MenuItem>) -> Self {
        self.app_menu = app_menu;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
/// Client-space coordinate pair, also used for signed drag vectors.
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Vector from `origin` to `self`, saturating at the `i32` range.
    pub fn delta_from(self, origin: Point) -> Point {
        Point {
            x: self.x.saturating_sub(origin.x),
            y: self.y.saturating_sub(origin.y),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Axis-aligned rectangle with non-negative size.
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Rubber-band selection geometry. `start` and `size` only mean something while `active`.
pub struct SelectionBox {
    pub active: bool,
    pub start: Point,
    /// Signed vector from `start` to the pointer; negative axes mean an up/left drag.
    pub size: Point,
}

impl SelectionBox {
    /// Rectangle covered by the box regardless of drag direction.
    pub fn bounds(&self) -> Rect {
        Rect {
            x: self.start.x.min(self.start.x.saturating_add(self.size.x)),
            y: self.start.y.min(self.start.y.saturating_add(self.size.y)),
            w: self.size.x.saturating_abs(),
            h: self.size.y.saturating_abs(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// The single source of truth for the desktop shell.
pub struct DesktopState {
    /// Selected theme id; stays the `default` sentinel until a catalog is loaded.
    pub active_theme: ThemeId,
    /// Handle of the active theme's sound; replaced on every resolved theme change.
    pub sound_player: Option<SoundHandle>,
    pub available_themes: Vec<Theme>,
    pub selected_desktop_icon: Option<IconId>,
    /// Focused window; `None` when nothing is focused.
    pub active_window: Option<AppInstanceId>,
    /// Foreground application, independent of window focus.
    pub active_app: AppInstanceId,
    pub menu_bar: Vec<MenuItem>,
    pub system_menu: Vec<MenuItem>,
    /// Running instances in launch order.
    pub open_apps: Vec<AppInstance>,
    pub context_menu: Vec<MenuItem>,
    pub show_context_menu: bool,
    pub select_box: SelectionBox,
}

impl Default for DesktopState {
    fn default() -> Self {
        Self::from_config(&DesktopConfig::default())
    }
}

impl DesktopState {
    /// Initial desktop for a session.
    pub fn from_config(config: &DesktopConfig) -> Self {
        Self {
            active_theme: config.default_theme.clone(),
            sound_player: None,
            available_themes: Vec::new(),
            selected_desktop_icon: None,
            active_window: None,
            active_app: config.active_app.clone(),
            menu_bar: Vec::new(),
            system_menu: config.system_menu.clone(),
            open_apps: config.open_apps.clone(),
            context_menu: Vec::new(),
            show_context_menu: false,
            select_box: SelectionBox::default(),
        }
    }

    /// Catalog entry for the active theme, if the catalog has one.
    pub fn active_theme_definition(&self) -> Option<&Theme> {
        self.available_themes
            .iter()
            .find(|theme| theme.id == self.active_theme)
    }

    /// Open instance behind the focused window.
    pub fn focused_app(&self) -> Option<&AppInstance> {
        let active = self.active_window.as_ref()?;
        self.open_apps.iter().find(|app| &app.id == active)
    }

    pub fn is_app_open(&self, app_id: &AppInstanceId) -> bool {
        self.open_apps.iter().any(|app| &app.id == app_id)
    }

    /// Plays `cue` through the active sound theme unless that theme mutes it.
    ///
    /// Returns whether the cue was handed to the player.
    ///
    /// # Errors
    ///
    /// Propagates the sound player's failure message.
    pub fn play_sound(&self, cue: &str) -> Result<bool, String> {
        let Some(player) = self.sound_player.as_ref() else {
            return Ok(false);
        };
        if self
            .active_theme_definition()
            .is_some_and(|theme| theme.sound.is_cue_disabled(cue))
        {
            return Ok(false);
        }
        player.play(cue)?;
        Ok(true)
    }
}
