//! Application-namespace transitions: the running-instance registry.

use super::ReducerNotice;
use crate::{events::AppEvent, model::DesktopState};

pub(super) fn reduce_app_event(
    state: &mut DesktopState,
    event: AppEvent,
    notices: &mut Vec<ReducerNotice>,
) {
    match event {
        AppEvent::Open { app_id, app } => {
            let already_open = app_id
                .as_ref()
                .is_some_and(|app_id| state.open_apps.iter().any(|open| &open.id == app_id));
            if already_open {
                // Another instance; ids are not disambiguated.
                notices.push(ReducerNotice::DuplicateAppInstance {
                    app_id: app.id.clone(),
                });
                state.active_window = Some(app.id.clone());
            }
            state.open_apps.push(app);
        }
        AppEvent::Close { app_id } => {
            match state.open_apps.iter().position(|open| open.id == app_id) {
                Some(index) => {
                    state.open_apps.remove(index);
                    state.active_window = None;
                }
                None => notices.push(ReducerNotice::AppNotOpen { app_id }),
            }
        }
        AppEvent::Focus => {}
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{AppInstance, AppInstanceId};

    fn empty_desktop() -> DesktopState {
        DesktopState {
            open_apps: Vec::new(),
            ..DesktopState::default()
        }
    }

    fn open(
        state: &mut DesktopState,
        app_id: Option<&str>,
        app: AppInstance,
    ) -> Vec<ReducerNotice> {
        let mut notices = Vec::new();
        reduce_app_event(
            state,
            AppEvent::Open {
                app_id: app_id.map(AppInstanceId::from),
                app,
            },
            &mut notices,
        );
        notices
    }

    fn close(state: &mut DesktopState, app_id: &str) -> Vec<ReducerNotice> {
        let mut notices = Vec::new();
        reduce_app_event(
            state,
            AppEvent::Close {
                app_id: AppInstanceId::from(app_id),
            },
            &mut notices,
        );
        notices
    }

    #[test]
    fn open_then_close_on_empty_desktop_round_trips() {
        let mut state = empty_desktop();
        let calc = AppInstance::new("calc.app", "Calculator");

        open(&mut state, Some("calc.app"), calc.clone());
        assert_eq!(state.open_apps, vec![calc]);
        assert_eq!(state.active_window, None);

        assert!(close(&mut state, "calc.app").is_empty());
        assert!(state.open_apps.is_empty());
        assert_eq!(state.active_window, None);
    }

    #[test]
    fn open_of_a_new_app_appends_without_focusing() {
        let mut state = DesktopState::default();
        state.active_window = Some(AppInstanceId::from("finder.app"));

        let notices = open(
            &mut state,
            Some("calc.app"),
            AppInstance::new("calc.app", "Calculator"),
        );

        assert!(notices.is_empty());
        assert_eq!(state.open_apps.len(), 2);
        assert_eq!(state.open_apps[1].id, AppInstanceId::from("calc.app"));
        assert_eq!(state.active_window, Some(AppInstanceId::from("finder.app")));
    }

    #[test]
    fn open_of_a_running_app_appends_the_event_payload_and_focuses_it() {
        let mut state = DesktopState::default();
        let second_finder = AppInstance::new("finder.app", "Finder 2");

        let notices = open(&mut state, Some("finder.app"), second_finder.clone());

        assert_eq!(state.open_apps.len(), 2);
        assert_eq!(state.open_apps[1], second_finder);
        assert_eq!(state.active_window, Some(AppInstanceId::from("finder.app")));
        assert_eq!(
            notices,
            vec![ReducerNotice::DuplicateAppInstance {
                app_id: AppInstanceId::from("finder.app"),
            }]
        );
    }

    #[test]
    fn open_without_app_id_never_matches_a_running_instance() {
        let mut state = DesktopState::default();

        let notices = open(&mut state, None, AppInstance::new("finder.app", "Finder"));

        assert!(notices.is_empty());
        assert_eq!(state.open_apps.len(), 2);
        assert_eq!(state.active_window, None);
    }

    #[test]
    fn close_clears_focus_even_for_unfocused_apps_and_removes_first_match_only() {
        let mut state = DesktopState::default();
        open(&mut state, Some("finder.app"), AppInstance::new("finder.app", "Finder 2"));
        state.active_window = Some(AppInstanceId::from("calc.app"));

        close(&mut state, "finder.app");

        assert_eq!(state.open_apps.len(), 1);
        assert_eq!(state.open_apps[0].name, "Finder 2");
        assert_eq!(state.active_window, None);
    }

    #[test]
    fn close_of_a_missing_app_changes_nothing() {
        let mut state = DesktopState::default();
        state.active_window = Some(AppInstanceId::from("finder.app"));
        let before = state.clone();

        let notices = close(&mut state, "calc.app");

        assert_eq!(state, before);
        assert_eq!(
            notices,
            vec![ReducerNotice::AppNotOpen {
                app_id: AppInstanceId::from("calc.app"),
            }]
        );
    }

    #[test]
    fn focus_is_a_placeholder() {
        let mut state = DesktopState::default();
        let before = state.clone();
        let mut notices = Vec::new();

        reduce_app_event(&mut state, AppEvent::Focus, &mut notices);

        assert_eq!(state, before);
        assert!(notices.is_empty());
    }
}
