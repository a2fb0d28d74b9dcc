//! Runtime provider and context wiring for the desktop shell.
//!
//! The provider owns the long-lived [`DesktopStore`], mirrors each published snapshot into a
//! signal for the presentation layer, and boots the built-in theme catalog.
#![allow(clippy::clone_on_copy)]

use std::rc::Rc;

use leptos::*;
use platform_host::HostServices;
use platinum_theme::ThemeRegistry;

use crate::{
    config::DesktopConfig,
    events::{DesktopEvent, DesktopSurfaceEvent},
    model::DesktopState,
    store::{DesktopStore, DispatchStats},
};

#[derive(Clone, Copy)]
/// Leptos context for reading desktop state and dispatching [`DesktopEvent`] values.
pub struct DesktopRuntimeContext {
    /// Host service bundle the store was built with.
    pub host: StoredValue<HostServices>,
    /// Latest desktop snapshot; replaced on every dispatch.
    pub state: RwSignal<Rc<DesktopState>>,
    /// Session dispatch counters.
    pub stats: RwSignal<DispatchStats>,
    /// Event dispatch callback.
    pub dispatch: Callback<DesktopEvent>,
}

impl DesktopRuntimeContext {
    /// Dispatches an event through the runtime context callback.
    pub fn dispatch_event(&self, event: impl Into<DesktopEvent>) {
        self.dispatch.call(event.into());
    }

    /// Plays a sound cue through the active theme's sound handle.
    ///
    /// Returns whether the cue reached the player; playback failures are logged.
    pub fn play_sound(&self, cue: &str) -> bool {
        match self.state.with_untracked(|state| state.play_sound(cue)) {
            Ok(played) => played,
            Err(err) => {
                logging::warn!("desktop sound: {err}");
                false
            }
        }
    }
}

fn boot_themes(runtime: DesktopRuntimeContext, config: &DesktopConfig) {
    runtime.dispatch_event(DesktopSurfaceEvent::LoadThemes {
        themes: ThemeRegistry::builtin().into_themes(),
    });
    runtime.dispatch_event(DesktopSurfaceEvent::Theme {
        active_theme: config.default_theme.clone(),
    });
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components.
pub fn PlatinumDesktopProvider(
    /// Injected browser or stub host bundle assembled by the entry layer.
    host_services: HostServices,
    /// Initial desktop contents; defaults to the Finder desktop.
    #[prop(optional)]
    config: Option<DesktopConfig>,
    children: Children,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let store = store_value(DesktopStore::from_config(
        &config,
        host_services.sound.clone(),
    ));
    let state = create_rw_signal(store.with_value(DesktopStore::state));
    let stats = create_rw_signal(DispatchStats::default());
    let host = store_value(host_services);

    let dispatch = Callback::new(move |event: DesktopEvent| {
        let mut published = None;
        store.update_value(|store| {
            let snapshot = store.dispatch(event);
            published = Some((snapshot, store.stats()));
        });
        if let Some((snapshot, latest)) = published {
            state.set(snapshot);
            stats.set(latest);
        }
    });

    let runtime = DesktopRuntimeContext {
        host,
        state,
        stats,
        dispatch,
    };

    provide_context(runtime.clone());

    if config.load_builtin_themes {
        boot_themes(runtime, &config);
    }

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`PlatinumDesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}

/// Read-only view of the desktop snapshot.
pub fn use_desktop() -> ReadSignal<Rc<DesktopState>> {
    use_desktop_runtime().state.read_only()
}

/// Dispatch half of the desktop context.
pub fn use_desktop_dispatch() -> Callback<DesktopEvent> {
    use_desktop_runtime().dispatch
}
