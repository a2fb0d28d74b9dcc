//! Sound-theme service contracts, the shared manifest model, and in-memory adapters.
//!
//! Loading is synchronous from the caller's point of view: [`SoundThemeService::load_sound_theme`]
//! always returns a [`SoundHandle`] immediately, and any asynchronous fetching or decoding happens
//! behind the handle. Failures stay inside the sound subsystem.

use std::{cell::RefCell, collections::BTreeMap, fmt, rc::Rc};

use serde::{Deserialize, Serialize};

/// Plays named cues from one loaded sound theme.
pub trait SoundPlayer {
    /// Plays `cue`. Unknown cues are ignored.
    ///
    /// # Errors
    ///
    /// Returns a message when the theme failed to load or playback could not start.
    fn play(&self, cue: &str) -> Result<(), String>;
}

#[derive(Clone)]
/// Opaque, cheaply cloneable handle to a loaded sound theme.
///
/// Dropping the last clone releases the underlying player; handles are never closed explicitly.
pub struct SoundHandle {
    file: String,
    player: Rc<dyn SoundPlayer>,
}

impl SoundHandle {
    /// Wraps a player loaded from `file`.
    pub fn new(file: impl Into<String>, player: Rc<dyn SoundPlayer>) -> Self {
        Self {
            file: file.into(),
            player,
        }
    }

    /// Sound-theme reference this handle was loaded from.
    pub fn file(&self) -> &str {
        &self.file
    }

    /// Plays `cue` through the underlying player.
    ///
    /// # Errors
    ///
    /// Propagates the player's failure message.
    pub fn play(&self, cue: &str) -> Result<(), String> {
        self.player.play(cue)
    }
}

impl PartialEq for SoundHandle {
    fn eq(&self, other: &Self) -> bool {
        self.file == other.file
            && std::ptr::addr_eq(Rc::as_ptr(&self.player), Rc::as_ptr(&other.player))
    }
}

impl fmt::Debug for SoundHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SoundHandle")
            .field("file", &self.file)
            .finish_non_exhaustive()
    }
}

/// Host service that turns a theme's sound reference into a playable handle.
pub trait SoundThemeService {
    /// Loads the sound theme at `file`.
    fn load_sound_theme(&self, file: &str) -> SoundHandle;
}

#[derive(Debug, Clone, Copy, Default)]
/// Player that never makes a sound.
pub struct NoopSoundPlayer;

impl SoundPlayer for NoopSoundPlayer {
    fn play(&self, _cue: &str) -> Result<(), String> {
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op sound service for unsupported targets and baseline tests.
pub struct NoopSoundThemeService;

impl SoundThemeService for NoopSoundThemeService {
    fn load_sound_theme(&self, file: &str) -> SoundHandle {
        SoundHandle::new(file, Rc::new(NoopSoundPlayer))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One cue played through a [`MemorySoundThemeService`] handle.
pub struct PlayedCue {
    /// Sound-theme reference of the handle that played the cue.
    pub file: String,
    /// Cue name.
    pub cue: String,
}

#[derive(Debug, Default)]
struct SoundLog {
    loads: Vec<String>,
    plays: Vec<PlayedCue>,
}

#[derive(Debug, Clone, Default)]
/// In-memory sound service that records every load and play.
///
/// Clones share one log, so a clone handed to the runtime can be inspected by the caller.
pub struct MemorySoundThemeService {
    log: Rc<RefCell<SoundLog>>,
}

impl MemorySoundThemeService {
    /// Sound-theme references loaded so far, in call order.
    pub fn loaded_files(&self) -> Vec<String> {
        self.log.borrow().loads.clone()
    }

    /// Cues played so far, in call order.
    pub fn played_cues(&self) -> Vec<PlayedCue> {
        self.log.borrow().plays.clone()
    }
}

struct MemorySoundPlayer {
    file: String,
    log: Rc<RefCell<SoundLog>>,
}

impl SoundPlayer for MemorySoundPlayer {
    fn play(&self, cue: &str) -> Result<(), String> {
        self.log.borrow_mut().plays.push(PlayedCue {
            file: self.file.clone(),
            cue: cue.to_string(),
        });
        Ok(())
    }
}

impl SoundThemeService for MemorySoundThemeService {
    fn load_sound_theme(&self, file: &str) -> SoundHandle {
        self.log.borrow_mut().loads.push(file.to_string());
        SoundHandle::new(
            file,
            Rc::new(MemorySoundPlayer {
                file: file.to_string(),
                log: self.log.clone(),
            }),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
/// Sound-theme manifest: cue name to audio file reference.
pub struct SoundThemeManifest {
    /// Cue-to-file map.
    #[serde(default)]
    pub cues: BTreeMap<String, String>,
}

impl SoundThemeManifest {
    /// Parses a manifest from JSON text.
    ///
    /// # Errors
    ///
    /// Returns a readable message when the payload is not a manifest object.
    pub fn from_json_str(raw: &str) -> Result<Self, String> {
        let value: serde_json::Value = serde_json::from_str(raw)
            .map_err(|err| format!("invalid sound theme manifest: {err}"))?;
        if !value.is_object() {
            return Err("invalid sound theme manifest: expected a JSON object".to_string());
        }
        serde_json::from_value(value).map_err(|err| format!("invalid sound theme manifest: {err}"))
    }

    /// Audio file reference for `cue`, resolved against the manifest's own location.
    ///
    /// Absolute references (leading `/` or a URL scheme) are returned unchanged; relative ones are
    /// joined onto the directory of `manifest_file`.
    pub fn cue_url(&self, manifest_file: &str, cue: &str) -> Option<String> {
        let target = self.cues.get(cue)?;
        if target.starts_with('/') || target.contains("://") {
            return Some(target.clone());
        }
        let base = manifest_file
            .rfind('/')
            .map(|idx| &manifest_file[..=idx])
            .unwrap_or("");
        Some(format!("{base}{target}"))
    }
}
