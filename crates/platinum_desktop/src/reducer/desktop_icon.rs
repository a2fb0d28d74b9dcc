//! Desktop-icon transitions; opening an icon launches its app through the app handler.

use super::{app::reduce_app_event, ReducerNotice};
use crate::{
    events::{AppEvent, DesktopIconEvent},
    model::DesktopState,
};

pub(super) fn reduce_desktop_icon_event(
    state: &mut DesktopState,
    event: DesktopIconEvent,
    notices: &mut Vec<ReducerNotice>,
) {
    match event {
        DesktopIconEvent::Focus { icon_id } => {
            state.selected_desktop_icon = Some(icon_id);
        }
        DesktopIconEvent::Open { icon_id, app } => {
            state.selected_desktop_icon = Some(icon_id);
            reduce_app_event(state, AppEvent::Open { app_id: None, app }, notices);
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{AppInstance, IconId};

    #[test]
    fn focus_replaces_the_selection() {
        let mut state = DesktopState::default();
        let mut notices = Vec::new();

        for icon in ["trash", "hd"] {
            reduce_desktop_icon_event(
                &mut state,
                DesktopIconEvent::Focus {
                    icon_id: IconId::from(icon),
                },
                &mut notices,
            );
        }

        assert_eq!(state.selected_desktop_icon, Some(IconId::from("hd")));
        assert!(notices.is_empty());
    }

    #[test]
    fn open_selects_and_launches_through_the_app_registry() {
        let mut state = DesktopState {
            open_apps: Vec::new(),
            ..DesktopState::default()
        };
        let calc = AppInstance::new("calc.app", "Calculator");
        let mut notices = Vec::new();

        reduce_desktop_icon_event(
            &mut state,
            DesktopIconEvent::Open {
                icon_id: IconId::from("calc"),
                app: calc.clone(),
            },
            &mut notices,
        );

        assert_eq!(state.selected_desktop_icon, Some(IconId::from("calc")));
        assert_eq!(state.open_apps, vec![calc]);
        assert_eq!(state.active_window, None);
    }
}
