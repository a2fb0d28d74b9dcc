//! Desktop surface transitions: pointer focus, selection box, context menu and theme.

use platform_host::SoundThemeService;

use super::ReducerNotice;
use crate::{
    events::DesktopSurfaceEvent,
    model::{DesktopState, SelectionBox},
};

pub(super) fn reduce_desktop_surface_event(
    state: &mut DesktopState,
    event: DesktopSurfaceEvent,
    sound: &dyn SoundThemeService,
    notices: &mut Vec<ReducerNotice>,
) {
    match event {
        DesktopSurfaceEvent::Focus { pointer } => {
            if !pointer.on_desktop_surface() {
                notices.push(ReducerNotice::FocusOutsideDesktop {
                    target_id: pointer.target_id,
                });
                return;
            }
            state.active_window = None;
            state.selected_desktop_icon = None;
            state.show_context_menu = false;
            state.select_box = SelectionBox {
                active: true,
                start: pointer.client,
                ..state.select_box
            };
        }
        DesktopSurfaceEvent::DoubleClick => {}
        DesktopSurfaceEvent::Drag { pointer } => {
            state.select_box.size = pointer.client.delta_from(state.select_box.start);
        }
        DesktopSurfaceEvent::Stop => {
            state.select_box = SelectionBox::default();
        }
        DesktopSurfaceEvent::ContextMenu { show, menu } => {
            state.show_context_menu = show;
            if let Some(menu) = menu {
                state.context_menu = menu;
            }
        }
        DesktopSurfaceEvent::Theme { active_theme } => {
            state.active_theme = active_theme;
            let loaded = state
                .active_theme_definition()
                .map(|theme| sound.load_sound_theme(&theme.sound.file));
            match loaded {
                Some(handle) => state.sound_player = Some(handle),
                None => notices.push(ReducerNotice::ThemeNotFound {
                    theme_id: state.active_theme.clone(),
                }),
            }
        }
        DesktopSurfaceEvent::LoadThemes { themes } => {
            // The active theme and its sound are not reconciled against the new catalog.
            state.available_themes = themes;
        }
    }
}
