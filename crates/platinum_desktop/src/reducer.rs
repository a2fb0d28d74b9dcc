//! Event routing and the transition entry point for the desktop state.

mod app;
mod desktop;
mod desktop_icon;
mod window;

use std::fmt;

use platform_host::SoundThemeService;
use platinum_theme::ThemeId;

use crate::{
    events::DesktopEvent,
    model::{AppInstanceId, DesktopState},
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Observable record of an event that degraded to a no-op or a partial update.
///
/// Notices never change the transition outcome; they exist for logging and counters.
pub enum ReducerNotice {
    /// No handler recognizes the event tag.
    UnrecognizedEvent { event_type: String },
    /// A desktop focus landed on something other than the bare surface.
    FocusOutsideDesktop { target_id: String },
    /// The selected theme is not in the catalog; no sound theme was loaded.
    ThemeNotFound { theme_id: ThemeId },
    /// A close named an app that is not running.
    AppNotOpen { app_id: AppInstanceId },
    /// An open appended a second instance under an id that is already running.
    DuplicateAppInstance { app_id: AppInstanceId },
}

impl fmt::Display for ReducerNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnrecognizedEvent { event_type } => {
                write!(f, "ignored unrecognized event `{event_type}`")
            }
            Self::FocusOutsideDesktop { target_id } => {
                write!(f, "desktop focus on `{target_id}` is not the desktop surface")
            }
            Self::ThemeNotFound { theme_id } => {
                write!(f, "theme `{theme_id}` is not in the catalog; sound left unchanged")
            }
            Self::AppNotOpen { app_id } => {
                write!(f, "close requested for `{app_id}` which is not open")
            }
            Self::DuplicateAppInstance { app_id } => {
                write!(f, "opened another instance of `{app_id}`")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Result of one [`reduce_desktop`] call.
pub struct DesktopTransition {
    /// Next desktop state.
    pub state: DesktopState,
    /// No-ops and partial updates observed while applying the event.
    pub notices: Vec<ReducerNotice>,
}

/// Applies a [`DesktopEvent`] to a working copy of `state` and returns the next state.
///
/// The event reaches exactly one namespace handler. `sound` is only consulted for theme
/// changes that resolve to a catalog entry.
pub fn reduce_desktop(
    state: &DesktopState,
    event: DesktopEvent,
    sound: &dyn SoundThemeService,
) -> DesktopTransition {
    let mut next = state.clone();
    let mut notices = Vec::new();

    match event {
        DesktopEvent::Window(event) => window::reduce_window_event(&mut next, event),
        DesktopEvent::App(event) => app::reduce_app_event(&mut next, event, &mut notices),
        DesktopEvent::DesktopIcon(event) => {
            desktop_icon::reduce_desktop_icon_event(&mut next, event, &mut notices)
        }
        DesktopEvent::Desktop(event) => {
            desktop::reduce_desktop_surface_event(&mut next, event, sound, &mut notices)
        }
        DesktopEvent::Unrecognized { event_type } => {
            notices.push(ReducerNotice::UnrecognizedEvent { event_type });
        }
    }

    DesktopTransition {
        state: next,
        notices,
    }
}
