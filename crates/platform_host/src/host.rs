//! Shared host-bundle model for browser and stub runtime composition.

use std::rc::Rc;

use crate::{NoopSoundThemeService, SoundThemeService};

/// Stable host strategy selected for the current build/runtime composition path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Browser-backed runtime composition.
    Browser,
    /// Composition with placeholder/no-op adapters (native tests, headless builds).
    Stub,
}

impl HostStrategy {
    /// Returns a stable string token for diagnostics and runtime inspection.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Stub => "stub",
        }
    }
}

/// Runtime-selected host service bundle injected into the desktop runtime.
///
/// All environment-specific service selection happens before this bundle crosses into
/// `platinum_desktop`, which keeps the runtime decoupled from browser adapter details.
#[derive(Clone)]
pub struct HostServices {
    /// Sound-theme loading service.
    pub sound: Rc<dyn SoundThemeService>,
    /// Stable strategy identifier for diagnostics.
    pub host_strategy: HostStrategy,
}

impl HostServices {
    /// Bundles `sound` under the given strategy.
    pub fn new(sound: Rc<dyn SoundThemeService>, host_strategy: HostStrategy) -> Self {
        Self {
            sound,
            host_strategy,
        }
    }

    /// Bundle with no-op adapters.
    pub fn stub() -> Self {
        Self::new(Rc::new(NoopSoundThemeService), HostStrategy::Stub)
    }
}
