//! Typed host-domain contracts shared by the desktop runtime and browser adapters.
//!
//! This crate is the API-first boundary for platform services. The desktop runtime only sees the
//! traits and models exported here; concrete browser adapters live in `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod host;
pub mod sound;

pub use host::{HostServices, HostStrategy};
pub use sound::{
    MemorySoundThemeService, NoopSoundPlayer, NoopSoundThemeService, PlayedCue, SoundHandle,
    SoundPlayer, SoundThemeManifest, SoundThemeService,
};
