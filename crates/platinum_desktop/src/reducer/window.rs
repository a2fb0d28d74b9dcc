//! Window-namespace transitions.

use crate::{events::WindowEvent, model::DesktopState};

pub(super) fn reduce_window_event(state: &mut DesktopState, event: WindowEvent) {
    match event {
        WindowEvent::Open { app } => {
            state.active_window = Some(app.id);
        }
        WindowEvent::Close => {}
        WindowEvent::Focus { app } => {
            state.active_window = Some(app.id);
            state.menu_bar = app.app_menu;
        }
        WindowEvent::Menu { menu_bar } => {
            state.menu_bar = menu_bar;
        }
    }
}
