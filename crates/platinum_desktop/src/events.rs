//! Typed desktop events and decoding of the `{type, ...}` wire form.
//!
//! Wire tags are namespaced by prefix. Decoding checks the prefixes in a fixed order (window,
//! application, desktop icon, then generic desktop) so that `PlatinumDesktopIcon*` tags never fall
//! through to the generic desktop namespace. Tags that match no namespace, or a namespace but no
//! known event, decode to [`DesktopEvent::Unrecognized`].

use platinum_theme::{Theme, ThemeId};
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::Value;
use thiserror::Error;

use crate::model::{AppInstance, AppInstanceId, IconId, MenuItem, Point, DESKTOP_SURFACE_ID};

pub const WINDOW_EVENT_PREFIX: &str = "PlatinumWindow";
pub const APP_EVENT_PREFIX: &str = "PlatinumApp";
pub const DESKTOP_ICON_EVENT_PREFIX: &str = "PlatinumDesktopIcon";
pub const DESKTOP_EVENT_PREFIX: &str = "PlatinumDesktop";

#[derive(Debug, Clone, PartialEq, Eq)]
/// Pointer sample taken from a UI event: the element it landed on and its client coordinates.
pub struct DesktopPointer {
    pub target_id: String,
    pub client: Point,
}

impl DesktopPointer {
    pub fn new(target_id: impl Into<String>, x: i32, y: i32) -> Self {
        Self {
            target_id: target_id.into(),
            client: Point::new(x, y),
        }
    }

    /// Returns whether the pointer landed on the bare desktop surface.
    pub fn on_desktop_surface(&self) -> bool {
        self.target_id == DESKTOP_SURFACE_ID
    }

    /// Samples a DOM mouse event.
    ///
    /// Entry point for the presentation layer's mouse handlers; the reducer only sees the sample.
    pub fn from_mouse_event(event: &web_sys::MouseEvent) -> Self {
        use wasm_bindgen::JsCast;

        let target_id = event
            .target()
            .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
            .map(|element| element.id())
            .unwrap_or_default();
        Self::new(target_id, event.client_x(), event.client_y())
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Window-namespace events.
pub enum WindowEvent {
    /// Focus the window of `app` without touching the open-app list.
    Open { app: AppInstance },
    /// Reserved; removal is an application close.
    Close,
    /// Focus the window of `app` and show its menu.
    Focus { app: AppInstance },
    /// Replace the menu bar.
    Menu { menu_bar: Vec<MenuItem> },
}

impl WindowEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::Open { .. } => "PlatinumWindowOpen",
            Self::Close => "PlatinumWindowClose",
            Self::Focus { .. } => "PlatinumWindowFocus",
            Self::Menu { .. } => "PlatinumWindowMenu",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Application-namespace events.
pub enum AppEvent {
    /// Launch `app`. `app_id` names an instance to look for in the open-app list.
    Open {
        app_id: Option<AppInstanceId>,
        app: AppInstance,
    },
    /// Remove the first instance with `app_id`.
    Close { app_id: AppInstanceId },
    /// Reserved; window focus carries the visible effects.
    Focus,
}

impl AppEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::Open { .. } => "PlatinumAppOpen",
            Self::Close { .. } => "PlatinumAppClose",
            Self::Focus => "PlatinumAppFocus",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Desktop-icon events.
pub enum DesktopIconEvent {
    /// Select a single icon.
    Focus { icon_id: IconId },
    /// Select a single icon and launch its application.
    Open { icon_id: IconId, app: AppInstance },
}

impl DesktopIconEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::Focus { .. } => "PlatinumDesktopIconFocus",
            Self::Open { .. } => "PlatinumDesktopIconOpen",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Desktop surface, pointer and theme events.
pub enum DesktopSurfaceEvent {
    /// Pointer down; starts a selection box when it lands on the bare surface.
    Focus { pointer: DesktopPointer },
    /// Reserved.
    DoubleClick,
    /// Pointer moved during a selection drag.
    Drag { pointer: DesktopPointer },
    /// Pointer released; ends the selection drag.
    Stop,
    /// Show or hide the context menu, optionally replacing its contents.
    ContextMenu {
        show: bool,
        menu: Option<Vec<MenuItem>>,
    },
    /// Switch the active theme.
    Theme { active_theme: ThemeId },
    /// Replace the theme catalog.
    LoadThemes { themes: Vec<Theme> },
}

impl DesktopSurfaceEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::Focus { .. } => "PlatinumDesktopFocus",
            Self::DoubleClick => "PlatinumDesktopDoubleClick",
            Self::Drag { .. } => "PlatinumDesktopDrag",
            Self::Stop => "PlatinumDesktopStop",
            Self::ContextMenu { .. } => "PlatinumDesktopContextMenu",
            Self::Theme { .. } => "PlatinumDesktopTheme",
            Self::LoadThemes { .. } => "PlatinumDesktopLoadThemes",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Events accepted by [`crate::reduce_desktop`], one variant per namespace.
pub enum DesktopEvent {
    Window(WindowEvent),
    App(AppEvent),
    DesktopIcon(DesktopIconEvent),
    Desktop(DesktopSurfaceEvent),
    /// A tag no handler recognizes; dispatching it changes nothing.
    Unrecognized { event_type: String },
}

impl DesktopEvent {
    /// Wire tag of this event.
    pub fn event_type(&self) -> &str {
        match self {
            Self::Window(event) => event.event_type(),
            Self::App(event) => event.event_type(),
            Self::DesktopIcon(event) => event.event_type(),
            Self::Desktop(event) => event.event_type(),
            Self::Unrecognized { event_type } => event_type,
        }
    }
}

impl From<WindowEvent> for DesktopEvent {
    fn from(event: WindowEvent) -> Self {
        Self::Window(event)
    }
}

impl From<AppEvent> for DesktopEvent {
    fn from(event: AppEvent) -> Self {
        Self::App(event)
    }
}

impl From<DesktopIconEvent> for DesktopEvent {
    fn from(event: DesktopIconEvent) -> Self {
        Self::DesktopIcon(event)
    }
}

impl From<DesktopSurfaceEvent> for DesktopEvent {
    fn from(event: DesktopSurfaceEvent) -> Self {
        Self::Desktop(event)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Wire payloads that cannot be turned into a [`DesktopEvent`].
pub enum EventDecodeError {
    /// The payload is not an object with a string `type`.
    #[error("event has no string `type` field")]
    MissingType,
    /// A recognized event lacks a required field.
    #[error("`{event_type}` is missing field `{field}`")]
    MissingField {
        event_type: String,
        field: &'static str,
    },
    /// A field is present but has the wrong shape.
    #[error("`{event_type}` has an invalid `{field}`: {message}")]
    InvalidField {
        event_type: String,
        field: &'static str,
        message: String,
    },
}

/// Decodes a `{type, ...}` wire object into a typed event.
///
/// # Errors
///
/// Returns [`EventDecodeError`] when the tag is missing or a recognized event's payload is
/// malformed. Unknown tags are not errors; they decode to [`DesktopEvent::Unrecognized`].
pub fn decode_event(value: &Value) -> Result<DesktopEvent, EventDecodeError> {
    let event_type = value
        .get("type")
        .and_then(Value::as_str)
        .ok_or(EventDecodeError::MissingType)?;
    let fields = EventFields { event_type, value };

    let decoded = if let Some(kind) = event_type.strip_prefix(WINDOW_EVENT_PREFIX) {
        decode_window_event(kind, &fields)?.map(DesktopEvent::Window)
    } else if let Some(kind) = event_type.strip_prefix(APP_EVENT_PREFIX) {
        decode_app_event(kind, &fields)?.map(DesktopEvent::App)
    } else if let Some(kind) = event_type.strip_prefix(DESKTOP_ICON_EVENT_PREFIX) {
        decode_desktop_icon_event(kind, &fields)?.map(DesktopEvent::DesktopIcon)
    } else if let Some(kind) = event_type.strip_prefix(DESKTOP_EVENT_PREFIX) {
        decode_desktop_surface_event(kind, &fields)?.map(DesktopEvent::Desktop)
    } else {
        None
    };

    Ok(decoded.unwrap_or_else(|| DesktopEvent::Unrecognized {
        event_type: event_type.to_string(),
    }))
}

fn decode_window_event(
    kind: &str,
    fields: &EventFields<'_>,
) -> Result<Option<WindowEvent>, EventDecodeError> {
    Ok(Some(match kind {
        "Open" => WindowEvent::Open {
            app: fields.required("app")?,
        },
        "Close" => WindowEvent::Close,
        "Focus" => WindowEvent::Focus {
            app: fields.required("app")?,
        },
        "Menu" => WindowEvent::Menu {
            menu_bar: fields.required("menuBar")?,
        },
        _ => return Ok(None),
    }))
}

fn decode_app_event(
    kind: &str,
    fields: &EventFields<'_>,
) -> Result<Option<AppEvent>, EventDecodeError> {
    Ok(Some(match kind {
        "Open" => AppEvent::Open {
            app_id: fields.optional("appId")?,
            app: fields.required("app")?,
        },
        "Close" => AppEvent::Close {
            app_id: fields.required("appId")?,
        },
        "Focus" => AppEvent::Focus,
        _ => return Ok(None),
    }))
}

fn decode_desktop_icon_event(
    kind: &str,
    fields: &EventFields<'_>,
) -> Result<Option<DesktopIconEvent>, EventDecodeError> {
    Ok(Some(match kind {
        "Focus" => DesktopIconEvent::Focus {
            icon_id: fields.required("iconId")?,
        },
        "Open" => DesktopIconEvent::Open {
            icon_id: fields.required("iconId")?,
            app: fields.required("app")?,
        },
        _ => return Ok(None),
    }))
}

fn decode_desktop_surface_event(
    kind: &str,
    fields: &EventFields<'_>,
) -> Result<Option<DesktopSurfaceEvent>, EventDecodeError> {
    Ok(Some(match kind {
        "Focus" => DesktopSurfaceEvent::Focus {
            pointer: fields.required::<WirePointer>("e")?.into(),
        },
        "DoubleClick" => DesktopSurfaceEvent::DoubleClick,
        "Drag" => DesktopSurfaceEvent::Drag {
            pointer: fields.required::<WirePointer>("e")?.into(),
        },
        "Stop" => DesktopSurfaceEvent::Stop,
        "ContextMenu" => DesktopSurfaceEvent::ContextMenu {
            show: fields.optional("showContextMenu")?.unwrap_or(false),
            menu: fields.optional("contextMenu")?,
        },
        "Theme" => DesktopSurfaceEvent::Theme {
            active_theme: fields.required("activeTheme")?,
        },
        "LoadThemes" => DesktopSurfaceEvent::LoadThemes {
            themes: fields.required("availableThemes")?,
        },
        _ => return Ok(None),
    }))
}

struct EventFields<'a> {
    event_type: &'a str,
    value: &'a Value,
}

impl EventFields<'_> {
    fn required<T: DeserializeOwned>(&self, field: &'static str) -> Result<T, EventDecodeError> {
        self.optional(field)?
            .ok_or_else(|| EventDecodeError::MissingField {
                event_type: self.event_type.to_string(),
                field,
            })
    }

    /// Absent and `null` fields both read as `None`.
    fn optional<T: DeserializeOwned>(
        &self,
        field: &'static str,
    ) -> Result<Option<T>, EventDecodeError> {
        match self.value.get(field) {
            None | Some(Value::Null) => Ok(None),
            Some(raw) => T::deserialize(raw)
                .map(Some)
                .map_err(|err| EventDecodeError::InvalidField {
                    event_type: self.event_type.to_string(),
                    field,
                    message: err.to_string(),
                }),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct WireTarget {
    #[serde(default)]
    id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WirePointer {
    #[serde(default)]
    target: WireTarget,
    client_x: f64,
    client_y: f64,
}

impl From<WirePointer> for DesktopPointer {
    fn from(wire: WirePointer) -> Self {
        Self::new(
            wire.target.id,
            wire.client_x.round() as i32,
            wire.client_y.round() as i32,
        )
    }
}
