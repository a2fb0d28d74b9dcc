//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! Off `wasm32` the adapters compile to silent fallbacks so the runtime can be tested natively.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and concrete adapter factories for runtime wiring.
pub mod adapters;
pub mod sound;

pub use adapters::{
    build_host_services, host_strategy_name, selected_host_strategy, sound_theme_service,
    SoundThemeServiceAdapter,
};
pub use sound::WebSoundThemeService;
