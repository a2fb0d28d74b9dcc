//! Session container that owns the desktop state and turns events into fresh snapshots.

use std::rc::Rc;

use leptos::logging;
use platform_host::SoundThemeService;
use serde_json::Value;

use crate::{
    config::DesktopConfig,
    events::{decode_event, DesktopEvent},
    model::DesktopState,
    reducer::{reduce_desktop, ReducerNotice},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Running counters over every dispatch in a session.
pub struct DispatchStats {
    /// Dispatches, including ones that changed nothing.
    pub dispatched: u64,
    /// Reducer notices of any kind.
    pub notices: u64,
    /// Events no handler recognized.
    pub unrecognized: u64,
    /// Wire payloads that failed to decode.
    pub decode_failures: u64,
}

/// Owns the current [`DesktopState`] snapshot for one session.
///
/// Every dispatch publishes a new `Rc`, so pointer comparison against the previous snapshot
/// always reports a change.
pub struct DesktopStore {
    state: Rc<DesktopState>,
    sound: Rc<dyn SoundThemeService>,
    stats: DispatchStats,
}

impl DesktopStore {
    pub fn new(initial: DesktopState, sound: Rc<dyn SoundThemeService>) -> Self {
        Self {
            state: Rc::new(initial),
            sound,
            stats: DispatchStats::default(),
        }
    }

    pub fn from_config(config: &DesktopConfig, sound: Rc<dyn SoundThemeService>) -> Self {
        Self::new(DesktopState::from_config(config), sound)
    }

    /// Current snapshot.
    pub fn state(&self) -> Rc<DesktopState> {
        self.state.clone()
    }

    pub fn stats(&self) -> DispatchStats {
        self.stats
    }

    /// Applies `event` and returns the new snapshot.
    pub fn dispatch(&mut self, event: DesktopEvent) -> Rc<DesktopState> {
        let transition = reduce_desktop(&self.state, event, self.sound.as_ref());
        self.stats.dispatched += 1;
        for notice in &transition.notices {
            self.record_notice(notice);
        }
        self.state = Rc::new(transition.state);
        self.state.clone()
    }

    /// Decodes a `{type, ...}` wire object and applies it.
    ///
    /// Undecodable payloads are logged and still publish an unchanged snapshot.
    pub fn dispatch_value(&mut self, value: &Value) -> Rc<DesktopState> {
        match decode_event(value) {
            Ok(event) => self.dispatch(event),
            Err(err) => {
                logging::warn!("desktop event dropped: {err}");
                self.stats.dispatched += 1;
                self.stats.decode_failures += 1;
                self.state = Rc::new(DesktopState::clone(&self.state));
                self.state.clone()
            }
        }
    }

    fn record_notice(&mut self, notice: &ReducerNotice) {
        self.stats.notices += 1;
        if matches!(notice, ReducerNotice::UnrecognizedEvent { .. }) {
            self.stats.unrecognized += 1;
        }
        logging::warn!("desktop reducer: {notice}");
    }
}

#[cfg(test)]
mod tests {
    use platform_host::MemorySoundThemeService;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn store() -> DesktopStore {
        DesktopStore::new(
            DesktopState::default(),
            Rc::new(MemorySoundThemeService::default()),
        )
    }

    #[test]
    fn every_dispatch_publishes_a_new_snapshot() {
        let mut store = store();
        let before = store.state();

        let after = store.dispatch(DesktopEvent::Unrecognized {
            event_type: "Nope".to_string(),
        });

        assert!(!Rc::ptr_eq(&before, &after));
        assert_eq!(*before, *after);
        assert!(Rc::ptr_eq(&after, &store.state()));
    }

    #[test]
    fn stats_count_notices_and_decode_failures() {
        let mut store = store();

        store.dispatch_value(&json!({"type": "PlatinumDesktopStop"}));
        store.dispatch_value(&json!({"type": "SomethingElse"}));
        store.dispatch_value(&json!({"type": "PlatinumAppClose", "appId": "calc.app"}));
        let before = store.state();
        let after = store.dispatch_value(&json!({"type": 7}));

        assert!(!Rc::ptr_eq(&before, &after));
        assert_eq!(*before, *after);
        assert_eq!(
            store.stats(),
            DispatchStats {
                dispatched: 4,
                notices: 2,
                unrecognized: 1,
                decode_failures: 1,
            }
        );
    }
}
