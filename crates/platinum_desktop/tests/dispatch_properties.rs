use std::rc::Rc;

use platform_host::MemorySoundThemeService;
use platinum_desktop::{
    AppEvent, AppInstance, AppInstanceId, DesktopConfig, DesktopEvent, DesktopStore,
    DesktopSurfaceEvent, IconId, MenuItem, Point, SelectionBox, WindowEvent,
};
use platinum_theme::{builtin_themes, ThemeId};
use pretty_assertions::assert_eq;
use serde_json::json;

fn store_with(config: DesktopConfig) -> (DesktopStore, MemorySoundThemeService) {
    let sounds = MemorySoundThemeService::default();
    (
        DesktopStore::from_config(&config, Rc::new(sounds.clone())),
        sounds,
    )
}

fn empty_desktop() -> (DesktopStore, MemorySoundThemeService) {
    store_with(DesktopConfig {
        open_apps: Vec::new(),
        ..DesktopConfig::default()
    })
}

fn calculator() -> AppInstance {
    AppInstance::new("calc.app", "Calculator")
        .with_icon("/img/calc.svg")
        .with_menu(vec![MenuItem::new("file", "File")])
}

#[test]
fn unrecognized_wire_events_return_an_equal_but_distinct_snapshot() {
    let (mut store, sounds) = store_with(DesktopConfig::default());
    let before = store.state();

    let after = store.dispatch_value(&json!({"type": "ClassicTrashEmpty", "force": true}));

    assert!(!Rc::ptr_eq(&before, &after));
    assert_eq!(*before, *after);
    assert!(sounds.loaded_files().is_empty());
    assert_eq!(store.stats().unrecognized, 1);
}

#[test]
fn opening_then_closing_on_an_empty_desktop_leaves_it_empty() {
    let (mut store, _) = empty_desktop();

    store.dispatch(
        AppEvent::Open {
            app_id: Some(AppInstanceId::from("calc.app")),
            app: calculator(),
        }
        .into(),
    );
    assert_eq!(store.state().open_apps, vec![calculator()]);

    let state = store.dispatch(
        AppEvent::Close {
            app_id: AppInstanceId::from("calc.app"),
        }
        .into(),
    );
    assert!(state.open_apps.is_empty());
    assert_eq!(state.active_window, None);
}

#[test]
fn window_focus_swaps_the_menu_bar() {
    let (mut store, _) = store_with(DesktopConfig::default());

    let state = store.dispatch_value(&json!({
        "type": "PlatinumWindowFocus",
        "app": {
            "id": "calc.app",
            "name": "Calculator",
            "appMenu": [{"id": "file", "title": "File"}]
        }
    }));

    assert_eq!(state.active_window, Some(AppInstanceId::from("calc.app")));
    assert_eq!(state.menu_bar, calculator().app_menu);
    assert_eq!(state.focused_app(), None);
}

#[test]
fn theme_events_load_sound_only_for_catalog_themes() {
    let (mut store, sounds) = store_with(DesktopConfig::default());
    store.dispatch(
        DesktopSurfaceEvent::LoadThemes {
            themes: builtin_themes().to_vec(),
        }
        .into(),
    );

    store.dispatch_value(&json!({"type": "PlatinumDesktopTheme", "activeTheme": "default"}));
    assert_eq!(
        sounds.loaded_files(),
        vec!["/sounds/platinum/platinum.json".to_string()]
    );

    let state =
        store.dispatch_value(&json!({"type": "PlatinumDesktopTheme", "activeTheme": "gizmo"}));
    assert_eq!(sounds.loaded_files().len(), 1);
    assert_eq!(state.active_theme, ThemeId::from("gizmo"));
    assert_eq!(
        state.sound_player.as_ref().map(|handle| handle.file()),
        Some("/sounds/platinum/platinum.json")
    );
}

#[test]
fn rubber_band_drag_sequence() {
    let (mut store, _) = store_with(DesktopConfig::default());

    store.dispatch_value(&json!({
        "type": "PlatinumDesktopFocus",
        "e": {"target": {"id": "platinumDesktop"}, "clientX": 10, "clientY": 20}
    }));
    let state = store.dispatch_value(&json!({
        "type": "PlatinumDesktopDrag",
        "e": {"target": {"id": "platinumDesktop"}, "clientX": 50, "clientY": 70}
    }));
    assert!(state.select_box.active);
    assert_eq!(state.select_box.start, Point::new(10, 20));
    assert_eq!(state.select_box.size, Point::new(40, 50));

    let state = store.dispatch_value(&json!({"type": "PlatinumDesktopStop"}));
    assert_eq!(state.select_box, SelectionBox::default());
    assert_eq!(state.select_box.start, Point::ORIGIN);
    assert_eq!(state.select_box.size, Point::ORIGIN);
}

#[test]
fn icon_open_on_an_empty_desktop_selects_and_launches() {
    let (mut store, _) = empty_desktop();

    let state = store.dispatch_value(&json!({
        "type": "PlatinumDesktopIconOpen",
        "iconId": "calc",
        "app": {"id": "calc.app", "name": "Calculator"}
    }));

    assert_eq!(state.selected_desktop_icon, Some(IconId::from("calc")));
    assert_eq!(
        state.open_apps,
        vec![AppInstance::new("calc.app", "Calculator")]
    );
}

#[test]
fn hiding_the_context_menu_twice_is_idempotent() {
    let (mut store, _) = store_with(DesktopConfig::default());
    store.dispatch(
        DesktopSurfaceEvent::ContextMenu {
            show: true,
            menu: Some(vec![MenuItem::new("get-info", "Get Info")]),
        }
        .into(),
    );

    let hide = json!({"type": "PlatinumDesktopContextMenu", "showContextMenu": false});
    let first = store.dispatch_value(&hide);
    let second = store.dispatch_value(&hide);

    assert!(!first.show_context_menu);
    assert_eq!(*first, *second);
    assert_eq!(second.context_menu, vec![MenuItem::new("get-info", "Get Info")]);
}

#[test]
fn window_open_and_app_open_stay_decoupled() {
    let (mut store, _) = store_with(DesktopConfig::default());

    let state = store.dispatch(WindowEvent::Open { app: calculator() }.into());
    assert_eq!(state.active_window, Some(AppInstanceId::from("calc.app")));
    assert!(!state.is_app_open(&AppInstanceId::from("calc.app")));

    let state = store.dispatch(DesktopEvent::App(AppEvent::Open {
        app_id: Some(AppInstanceId::from("calc.app")),
        app: calculator(),
    }));
    assert!(state.is_app_open(&AppInstanceId::from("calc.app")));
    assert_eq!(
        state.focused_app().map(|app| app.name.as_str()),
        Some("Calculator")
    );
}

#[test]
fn drags_across_the_full_coordinate_range_saturate() {
    let (mut store, _) = store_with(DesktopConfig::default());

    store.dispatch_value(&json!({
        "type": "PlatinumDesktopFocus",
        "e": {"target": {"id": "platinumDesktop"}, "clientX": -3e9, "clientY": 5}
    }));
    let state = store.dispatch_value(&json!({
        "type": "PlatinumDesktopDrag",
        "e": {"target": {"id": "platinumDesktop"}, "clientX": 3e9, "clientY": -3e9}
    }));

    assert_eq!(state.select_box.start, Point::new(i32::MIN, 5));
    assert_eq!(state.select_box.size, Point::new(i32::MAX, i32::MIN));
    assert_eq!(state.select_box.bounds().w, i32::MAX);
    assert_eq!(store.stats().decode_failures, 0);
}
