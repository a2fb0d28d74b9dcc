//! Desktop state engine for the Platinum shell.
//!
//! All desktop state lives in one [`DesktopState`] value that only changes through
//! [`reduce_desktop`]. [`DesktopStore`] holds the current snapshot for a session and
//! [`PlatinumDesktopProvider`] exposes it to Leptos components.

pub mod config;
pub mod events;
pub mod model;
pub mod reducer;
pub mod runtime_context;
pub mod store;

pub use config::{ConfigError, DesktopConfig};
pub use events::{
    decode_event, AppEvent, DesktopEvent, DesktopIconEvent, DesktopPointer, DesktopSurfaceEvent,
    EventDecodeError, WindowEvent,
};
pub use model::*;
pub use reducer::{reduce_desktop, DesktopTransition, ReducerNotice};
pub use runtime_context::{
    use_desktop, use_desktop_dispatch, use_desktop_runtime, DesktopRuntimeContext,
    PlatinumDesktopProvider,
};
pub use store::{DesktopStore, DispatchStats};
