use std::rc::Rc;

use platform_host::{
    HostServices, HostStrategy, NoopSoundThemeService, SoundHandle, SoundThemeService,
};

use crate::WebSoundThemeService;

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(feature = "desktop-host-stub")]
    {
        HostStrategy::Stub
    }

    #[cfg(not(feature = "desktop-host-stub"))]
    {
        HostStrategy::Browser
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    selected_host_strategy().as_str()
}

/// Adapter enum that erases the concrete sound backend behind [`SoundThemeService`].
#[derive(Debug, Clone)]
pub enum SoundThemeServiceAdapter {
    /// `HtmlAudioElement`-backed playback.
    Browser(WebSoundThemeService),
    /// Silent fallback for stubbed hosts.
    Stub(NoopSoundThemeService),
}

impl SoundThemeService for SoundThemeServiceAdapter {
    fn load_sound_theme(&self, file: &str) -> SoundHandle {
        match self {
            Self::Browser(service) => service.load_sound_theme(file),
            Self::Stub(service) => service.load_sound_theme(file),
        }
    }
}

/// Builds the sound-theme adapter for the compile-time selected host strategy.
pub fn sound_theme_service(base_path: &str) -> SoundThemeServiceAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => {
            SoundThemeServiceAdapter::Browser(WebSoundThemeService::new(base_path))
        }
        HostStrategy::Stub => SoundThemeServiceAdapter::Stub(NoopSoundThemeService),
    }
}

/// Assembles the host service bundle injected into the desktop provider.
pub fn build_host_services(base_path: &str) -> HostServices {
    HostServices::new(
        Rc::new(sound_theme_service(base_path)),
        selected_host_strategy(),
    )
}
